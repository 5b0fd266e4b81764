//! Continuous price-time priority matching.
//!
//! ```text
//! OrderBook::add_order(Order) -> Result<Vec<ExecutionReport>>
//! ```
//!
//! | Order type      | Matching                          | Remainder        |
//! |-----------------|-----------------------------------|------------------|
//! | `Market`        | full depth of the opposite side   | discarded        |
//! | `Limit`/`Stop`  | while the best price is crossable | rests in book    |
//!
//! Every fill trades at the maker's resting price and emits two reports,
//! taker first, then maker. A call fully resolves before returning.
//!
//! ## Market taker status
//!
//! A market taker's report is `Filled` when nothing remains **or** when the
//! fill exhausted the last order resting on the opposite side, even if the
//! taker still has quantity left. Limit takers and makers are `Filled` only
//! when their own remainder is zero.

use chrono::Utc;
use lob_types::{ExecStatus, ExecutionReport, LobError, Order, OrderSide, OrderType, Result};
use rust_decimal::Decimal;

use crate::{OrderBook, orderbook::Fill, validation::validate_order};

impl OrderBook {
    /// Submit an order and return the execution reports it generated.
    ///
    /// The book takes ownership of the order. If a limit or stop order is
    /// not completely filled, its remainder rests and can be inspected
    /// through [`OrderBook::order`].
    ///
    /// # Errors
    /// Returns [`LobError::InvalidOrder`], [`LobError::SymbolMismatch`] or
    /// [`LobError::DuplicateOrder`] without modifying the book.
    pub fn add_order(&mut self, mut order: Order) -> Result<Vec<ExecutionReport>> {
        if let Err(err) = self.admit(&order) {
            tracing::warn!(order = %order.id, error = %err, "Order rejected");
            return Err(err);
        }

        let mut reports = Vec::new();
        match order.order_type {
            OrderType::Market => self.execute_market(&mut order, &mut reports),
            OrderType::Limit | OrderType::Stop => {
                let limit = order
                    .price
                    .ok_or_else(|| LobError::invalid("Limit price required"))?;
                self.match_limit(&mut order, limit, &mut reports);
            }
        }

        if !order.is_filled() {
            match (order.price, order.order_type.rests()) {
                (Some(price), true) => self.insert_resting(order, price),
                _ => tracing::debug!(
                    order = %order.id,
                    unfilled = %order.remaining_qty,
                    "Unfilled remainder discarded"
                ),
            }
        }

        Ok(reports)
    }

    fn admit(&self, order: &Order) -> Result<()> {
        validate_order(self.config(), order)?;
        if self.contains_order(&order.id) {
            return Err(LobError::DuplicateOrder(order.id));
        }
        Ok(())
    }

    /// Sweep the opposite side until the taker is filled or the side is empty.
    fn execute_market(&mut self, taker: &mut Order, reports: &mut Vec<ExecutionReport>) {
        let maker_side = taker.side.opposite();

        while !taker.is_filled() {
            let Some(fill) = self.fill_front(maker_side, taker) else {
                break;
            };
            let exhausted_last_maker = fill.maker_remaining.is_zero() && fill.sole_resting_order;
            let taker_status = if taker.is_filled() || exhausted_last_maker {
                ExecStatus::Filled
            } else {
                ExecStatus::PartialFill
            };
            self.report_fill(taker, &fill, taker_status, reports);
        }
    }

    /// Match while the opposite best price is within `limit`.
    fn match_limit(&mut self, taker: &mut Order, limit: Decimal, reports: &mut Vec<ExecutionReport>) {
        let maker_side = taker.side.opposite();

        while !taker.is_filled() {
            let Some(best) = self.best_price(maker_side) else {
                break;
            };
            if !crosses(taker.side, limit, best) {
                break;
            }
            let Some(fill) = self.fill_front(maker_side, taker) else {
                break;
            };
            let taker_status = ExecStatus::from_remaining(taker.remaining_qty);
            self.report_fill(taker, &fill, taker_status, reports);
        }
    }

    /// Append the taker report, then the maker report, for one fill.
    fn report_fill(
        &self,
        taker: &Order,
        fill: &Fill,
        taker_status: ExecStatus,
        reports: &mut Vec<ExecutionReport>,
    ) {
        let timestamp = Utc::now();

        tracing::debug!(
            taker = %taker.id,
            maker = %fill.maker_id,
            side = %taker.side,
            price = %fill.price,
            qty = %fill.quantity,
            "Fill"
        );

        reports.push(ExecutionReport {
            order_id: taker.id,
            symbol: taker.symbol.clone(),
            side: taker.side,
            filled_qty: fill.quantity,
            price: fill.price,
            timestamp,
            status: taker_status,
        });
        reports.push(ExecutionReport {
            order_id: fill.maker_id,
            symbol: self.symbol().clone(),
            side: fill.maker_side,
            filled_qty: fill.quantity,
            price: fill.price,
            timestamp,
            status: ExecStatus::from_remaining(fill.maker_remaining),
        });
    }
}

/// Whether a taker on `side` with `limit` may trade at the opposite `best`.
fn crosses(side: OrderSide, limit: Decimal, best: Decimal) -> bool {
    match side {
        OrderSide::Buy => best <= limit,
        OrderSide::Sell => best >= limit,
    }
}
