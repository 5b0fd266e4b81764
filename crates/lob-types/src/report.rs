//! Execution reports produced by the matcher.
//!
//! Every fill yields two [`ExecutionReport`]s: one for the taker (the
//! incoming order), then one for the maker (the resting order). Both carry
//! the maker's price and share a timestamp.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{OrderId, OrderSide, Symbol};

/// Outcome of a fill from one order's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecStatus {
    Filled,
    PartialFill,
}

impl ExecStatus {
    /// `Filled` when nothing remains, `PartialFill` otherwise.
    #[must_use]
    pub fn from_remaining(remaining: Decimal) -> Self {
        if remaining.is_zero() {
            Self::Filled
        } else {
            Self::PartialFill
        }
    }
}

impl std::fmt::Display for ExecStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Filled => write!(f, "filled"),
            Self::PartialFill => write!(f, "partial_fill"),
        }
    }
}

/// One side of a single fill event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionReport {
    pub order_id: OrderId,
    pub symbol: Symbol,
    pub side: OrderSide,
    /// Quantity filled in this event only.
    pub filled_qty: Decimal,
    /// Execution price, always the maker's resting price.
    pub price: Decimal,
    pub timestamp: DateTime<Utc>,
    pub status: ExecStatus,
}

impl ExecutionReport {
    /// Traded value of this fill (price x quantity), capped at `Decimal::MAX`.
    #[must_use]
    pub fn notional(&self) -> Decimal {
        self.price
            .checked_mul(self.filled_qty)
            .unwrap_or(Decimal::MAX)
    }

    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.status == ExecStatus::Filled
    }
}

impl std::fmt::Display for ExecutionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Exec[{}] {} {} {} @ {} ({})",
            self.order_id, self.symbol, self.side, self.filled_qty, self.price, self.status,
        )
    }
}
