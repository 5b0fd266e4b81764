//! Admission checks run before an order touches the book.
//!
//! A rejected order leaves the book exactly as it was.

use lob_types::{BookConfig, LobError, Order, OrderType, Result};
use rust_decimal::Decimal;

/// Validate an incoming order against the book's configuration.
///
/// # Errors
/// - [`LobError::SymbolMismatch`] if the order names another instrument
/// - [`LobError::InvalidOrder`] for non-positive quantities, a missing or
///   non-positive limit price, or tick/lot/minimum-size violations
pub fn validate_order(config: &BookConfig, order: &Order) -> Result<()> {
    // 1. Routing
    if order.symbol != config.symbol {
        return Err(LobError::SymbolMismatch {
            expected: config.symbol.clone(),
            actual: order.symbol.clone(),
        });
    }

    // 2. Quantity
    if order.remaining_qty <= Decimal::ZERO {
        return Err(LobError::invalid("Quantity must be positive"));
    }
    if order.remaining_qty > order.quantity {
        return Err(LobError::invalid(format!(
            "Remaining quantity {} exceeds order quantity {}",
            order.remaining_qty, order.quantity,
        )));
    }
    if let Some(min) = config.min_order_size {
        if order.remaining_qty < min {
            return Err(LobError::invalid(format!(
                "Quantity {} below minimum {min}",
                order.remaining_qty,
            )));
        }
    }
    if let Some(lot) = config.lot_size {
        if !(order.remaining_qty % lot).is_zero() {
            return Err(LobError::invalid(format!(
                "Quantity {} is not a multiple of lot size {lot}",
                order.remaining_qty,
            )));
        }
    }

    // 3. Price (market orders carry none)
    match order.order_type {
        OrderType::Market => Ok(()),
        OrderType::Limit | OrderType::Stop => {
            let Some(price) = order.price else {
                return Err(LobError::invalid(format!(
                    "{} order requires a price",
                    order.order_type
                )));
            };
            if price <= Decimal::ZERO {
                return Err(LobError::invalid("Price must be positive"));
            }
            if let Some(tick) = config.tick_size {
                if !(price % tick).is_zero() {
                    return Err(LobError::invalid(format!(
                        "Price {price} is not a multiple of tick size {tick}"
                    )));
                }
            }
            Ok(())
        }
    }
}
