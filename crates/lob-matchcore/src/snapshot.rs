//! Aggregated depth view of the book.

use lob_types::{Symbol, constants::DEFAULT_SNAPSHOT_DEPTH};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{OrderBook, PriceLevel};

/// One aggregated price level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSnapshot {
    pub price: Decimal,
    /// Sum of remaining quantity at this price.
    pub quantity: Decimal,
    pub order_count: usize,
}

impl From<&PriceLevel> for LevelSnapshot {
    fn from(level: &PriceLevel) -> Self {
        Self {
            price: level.price,
            quantity: level.total_quantity(),
            order_count: level.len(),
        }
    }
}

/// Top-of-book depth for both sides, best level first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSnapshot {
    pub symbol: Symbol,
    pub bids: Vec<LevelSnapshot>,
    pub asks: Vec<LevelSnapshot>,
}

impl OrderBook {
    /// Aggregate up to `depth` levels per side.
    #[must_use]
    pub fn snapshot(&self, depth: usize) -> BookSnapshot {
        BookSnapshot {
            symbol: self.symbol().clone(),
            bids: self.bid_levels().take(depth).map(LevelSnapshot::from).collect(),
            asks: self.ask_levels().take(depth).map(LevelSnapshot::from).collect(),
        }
    }

    /// Snapshot with [`DEFAULT_SNAPSHOT_DEPTH`] levels per side.
    #[must_use]
    pub fn top_of_book(&self) -> BookSnapshot {
        self.snapshot(DEFAULT_SNAPSHOT_DEPTH)
    }
}
