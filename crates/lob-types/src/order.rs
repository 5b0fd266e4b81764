//! Order types accepted by the order book.
//!
//! An [`Order`] is built by the caller and handed to the book by value.
//! Once it rests, the book owns it; the caller can only look it up by ID.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{OrderId, Symbol};

/// Which side of the book this order is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    /// The side this order matches against.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}

/// The type of order.
///
/// `Stop` carries no trigger logic: it is matched and rested exactly like
/// `Limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Market,
    Limit,
    Stop,
}

impl OrderType {
    /// Whether an unfilled remainder of this type is placed in the book.
    #[must_use]
    pub fn rests(self) -> bool {
        match self {
            Self::Market => false,
            Self::Limit | Self::Stop => true,
        }
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Market => write!(f, "MARKET"),
            Self::Limit => write!(f, "LIMIT"),
            Self::Stop => write!(f, "STOP"),
        }
    }
}

/// Core order struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub symbol: Symbol,
    pub side: OrderSide,
    pub order_type: OrderType,
    /// Limit price. Required for `Limit` and `Stop`, ignored for `Market`.
    pub price: Option<Decimal>,
    /// Originally requested quantity.
    pub quantity: Decimal,
    /// Quantity still open. Only ever decreases.
    pub remaining_qty: Decimal,
    /// Arrival number assigned by the book when the order rests, starting
    /// at 1. Zero means the order never rested.
    pub sequence: u64,
}

impl Order {
    fn build(
        id: OrderId,
        symbol: Symbol,
        side: OrderSide,
        order_type: OrderType,
        price: Option<Decimal>,
        quantity: Decimal,
    ) -> Self {
        Self {
            id,
            symbol,
            side,
            order_type,
            price,
            quantity,
            remaining_qty: quantity,
            sequence: 0,
        }
    }

    #[must_use]
    pub fn market(id: OrderId, symbol: Symbol, side: OrderSide, quantity: Decimal) -> Self {
        Self::build(id, symbol, side, OrderType::Market, None, quantity)
    }

    #[must_use]
    pub fn limit(
        id: OrderId,
        symbol: Symbol,
        side: OrderSide,
        price: Decimal,
        quantity: Decimal,
    ) -> Self {
        Self::build(id, symbol, side, OrderType::Limit, Some(price), quantity)
    }

    #[must_use]
    pub fn stop(
        id: OrderId,
        symbol: Symbol,
        side: OrderSide,
        price: Decimal,
        quantity: Decimal,
    ) -> Self {
        Self::build(id, symbol, side, OrderType::Stop, Some(price), quantity)
    }

    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.remaining_qty.is_zero()
    }

    #[must_use]
    pub fn filled_qty(&self) -> Decimal {
        self.quantity - self.remaining_qty
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Order {
    pub fn dummy_limit(side: OrderSide, price: Decimal, qty: Decimal) -> Self {
        Self::limit(OrderId::new(), Symbol::new("TEST"), side, price, qty)
    }

    pub fn dummy_market(side: OrderSide, qty: Decimal) -> Self {
        Self::market(OrderId::new(), Symbol::new("TEST"), side, qty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_side_display() {
        assert_eq!(format!("{}", OrderSide::Buy), "BUY");
        assert_eq!(format!("{}", OrderSide::Sell), "SELL");
    }

    #[test]
    fn opposite_side() {
        assert_eq!(OrderSide::Buy.opposite(), OrderSide::Sell);
        assert_eq!(OrderSide::Sell.opposite(), OrderSide::Buy);
    }

    #[test]
    fn only_market_orders_never_rest() {
        assert!(!OrderType::Market.rests());
        assert!(OrderType::Limit.rests());
        assert!(OrderType::Stop.rests());
    }

    #[test]
    fn market_order_has_no_price() {
        let order = Order::dummy_market(OrderSide::Buy, Decimal::TEN);
        assert_eq!(order.order_type, OrderType::Market);
        assert!(order.price.is_none());
        assert_eq!(order.remaining_qty, Decimal::TEN);
    }

    #[test]
    fn fill_tracking() {
        let mut order =
            Order::dummy_limit(OrderSide::Buy, Decimal::new(100, 0), Decimal::new(10, 0));
        assert!(!order.is_filled());
        order.remaining_qty = Decimal::new(4, 0);
        assert_eq!(order.filled_qty(), Decimal::new(6, 0));
        order.remaining_qty = Decimal::ZERO;
        assert!(order.is_filled());
    }

    #[test]
    fn order_type_serializes_lowercase() {
        let json = serde_json::to_string(&OrderType::Stop).unwrap();
        assert_eq!(json, "\"stop\"");
    }
}
