//! The order book for a single instrument.
//!
//! Uses `BTreeMap` for price-level ordering:
//! - **Bids** (buys): `BTreeMap<Reverse<Decimal>, PriceLevel>` -- highest price first
//! - **Asks** (sells): `BTreeMap<Decimal, PriceLevel>` -- lowest price first
//!
//! Each level is a FIFO queue, so walking levels best-first and each queue
//! front-to-back yields strict price-time priority. An auxiliary
//! `HashMap<OrderId, (Side, Price)>` tracks which orders are resting.

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};

use lob_types::{BookConfig, Order, OrderId, OrderSide, Result, Symbol};
use rust_decimal::Decimal;

use crate::price_level::PriceLevel;

/// Outcome of filling against the front of one side.
#[derive(Debug, Clone)]
pub(crate) struct Fill {
    pub maker_id: OrderId,
    pub maker_side: OrderSide,
    pub price: Decimal,
    pub quantity: Decimal,
    pub maker_remaining: Decimal,
    /// The maker was the only order resting on its side before this fill.
    pub sole_resting_order: bool,
}

/// The order book for a single instrument.
#[derive(Debug)]
pub struct OrderBook {
    config: BookConfig,
    /// Buy side: highest price first (`Reverse` key).
    bids: BTreeMap<Reverse<Decimal>, PriceLevel>,
    /// Sell side: lowest price first.
    asks: BTreeMap<Decimal, PriceLevel>,
    /// Resting orders: `OrderId -> (side, price)`.
    index: HashMap<OrderId, (OrderSide, Decimal)>,
    /// Arrival number handed to the next resting order. Starts at 1.
    next_sequence: u64,
}

impl OrderBook {
    /// Create a new empty, unconstrained order book for `symbol`.
    #[must_use]
    pub fn new(symbol: impl Into<Symbol>) -> Self {
        Self::from_valid_config(BookConfig::new(symbol))
    }

    /// Create a new empty order book with tick/lot constraints.
    pub fn with_config(config: BookConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: BookConfig) -> Self {
        tracing::info!(
            symbol = %config.symbol,
            tick_size = ?config.tick_size,
            lot_size = ?config.lot_size,
            "Order book created"
        );
        Self {
            config,
            bids: BTreeMap::new(),
            asks: BTreeMap::new(),
            index: HashMap::new(),
            next_sequence: 1,
        }
    }

    #[must_use]
    pub fn symbol(&self) -> &Symbol {
        &self.config.symbol
    }

    #[must_use]
    pub fn config(&self) -> &BookConfig {
        &self.config
    }

    // =================================================================
    // Insertion
    // =================================================================

    /// Queue an order behind every resting order at its price.
    ///
    /// The caller guarantees a limit price and a positive remainder.
    pub(crate) fn insert_resting(&mut self, mut order: Order, price: Decimal) {
        order.sequence = self.next_sequence;
        self.next_sequence += 1;
        self.index.insert(order.id, (order.side, price));

        tracing::debug!(
            order = %order.id,
            side = %order.side,
            price = %price,
            qty = %order.remaining_qty,
            sequence = order.sequence,
            "Order resting"
        );

        match order.side {
            OrderSide::Buy => {
                self.bids
                    .entry(Reverse(price))
                    .or_insert_with(|| PriceLevel::new(price))
                    .push_back(order);
            }
            OrderSide::Sell => {
                self.asks
                    .entry(price)
                    .or_insert_with(|| PriceLevel::new(price))
                    .push_back(order);
            }
        }
    }

    // =================================================================
    // Filling
    // =================================================================

    /// Fill `taker` against the highest-priority order on `maker_side`.
    ///
    /// Both remainders drop by `min(taker, maker)`. An exhausted maker is
    /// removed in the same step, along with its level if that empties it.
    /// Returns `None` if `maker_side` is empty.
    pub(crate) fn fill_front(&mut self, maker_side: OrderSide, taker: &mut Order) -> Option<Fill> {
        let sole_resting_order = self.has_single_order(maker_side);

        let level = match maker_side {
            OrderSide::Buy => self.bids.values_mut().next(),
            OrderSide::Sell => self.asks.values_mut().next(),
        }?;
        let price = level.price;
        let maker = level.front_mut()?;

        let quantity = taker.remaining_qty.min(maker.remaining_qty);
        taker.remaining_qty -= quantity;
        maker.remaining_qty -= quantity;

        let fill = Fill {
            maker_id: maker.id,
            maker_side,
            price,
            quantity,
            maker_remaining: maker.remaining_qty,
            sole_resting_order,
        };

        if fill.maker_remaining.is_zero() {
            level.pop_front();
            let level_emptied = level.is_empty();
            self.index.remove(&fill.maker_id);
            if level_emptied {
                match maker_side {
                    OrderSide::Buy => {
                        self.bids.pop_first();
                    }
                    OrderSide::Sell => {
                        self.asks.pop_first();
                    }
                }
            }
        }

        Some(fill)
    }

    /// `true` if exactly one order rests on `side`.
    fn has_single_order(&self, side: OrderSide) -> bool {
        match side {
            OrderSide::Buy => self.bids.len() == 1 && self.bids.values().all(|l| l.len() == 1),
            OrderSide::Sell => self.asks.len() == 1 && self.asks.values().all(|l| l.len() == 1),
        }
    }

    // =================================================================
    // Queries
    // =================================================================

    /// Best (highest) bid price, or `None` if no bids.
    #[must_use]
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.keys().next().map(|r| r.0)
    }

    /// Best (lowest) ask price, or `None` if no asks.
    #[must_use]
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.keys().next().copied()
    }

    /// Best price on `side`.
    #[must_use]
    pub fn best_price(&self, side: OrderSide) -> Option<Decimal> {
        match side {
            OrderSide::Buy => self.best_bid(),
            OrderSide::Sell => self.best_ask(),
        }
    }

    /// Spread = best_ask - best_bid. `None` if either side is empty.
    #[must_use]
    pub fn spread(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    /// Mid price = (best_bid + best_ask) / 2. `None` if either side is empty
    /// or the midpoint is not representable.
    #[must_use]
    pub fn mid_price(&self) -> Option<Decimal> {
        let (bid, ask) = (self.best_bid()?, self.best_ask()?);
        bid.checked_add(ask)
            .map(|sum| sum / Decimal::TWO)
            .or_else(|| bid.checked_add(ask.checked_sub(bid)? / Decimal::TWO))
    }

    /// Total number of orders currently resting.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.index.len()
    }

    /// Number of distinct bid price levels.
    #[must_use]
    pub fn bid_depth(&self) -> usize {
        self.bids.len()
    }

    /// Number of distinct ask price levels.
    #[must_use]
    pub fn ask_depth(&self) -> usize {
        self.asks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    #[must_use]
    pub fn contains_order(&self, order_id: &OrderId) -> bool {
        self.index.contains_key(order_id)
    }

    /// Read-only view of a resting order.
    #[must_use]
    pub fn order(&self, order_id: &OrderId) -> Option<&Order> {
        let (side, price) = self.index.get(order_id)?;
        let level = match side {
            OrderSide::Buy => self.bids.get(&Reverse(*price)),
            OrderSide::Sell => self.asks.get(price),
        }?;
        level.iter().find(|o| o.id == *order_id)
    }

    /// Resting orders on `side` in matching priority.
    pub fn resting_orders(&self, side: OrderSide) -> Box<dyn Iterator<Item = &Order> + '_> {
        match side {
            OrderSide::Buy => Box::new(self.bids.values().flat_map(|level| level.iter())),
            OrderSide::Sell => Box::new(self.asks.values().flat_map(|level| level.iter())),
        }
    }

    /// Iterate bid levels from best (highest) to worst.
    pub fn bid_levels(&self) -> impl Iterator<Item = &PriceLevel> {
        self.bids.values()
    }

    /// Iterate ask levels from best (lowest) to worst.
    pub fn ask_levels(&self) -> impl Iterator<Item = &PriceLevel> {
        self.asks.values()
    }
}
