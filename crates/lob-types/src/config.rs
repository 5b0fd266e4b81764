//! Per-book configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{LobError, Result, Symbol};

/// Configuration for a single order book.
///
/// Granularity constraints are optional. A config built with
/// [`BookConfig::new`] accepts any positive price and quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookConfig {
    /// The instrument this book serves.
    pub symbol: Symbol,
    /// Price granularity. Limit/stop prices must be a multiple of it.
    #[serde(default)]
    pub tick_size: Option<Decimal>,
    /// Quantity granularity. Quantities must be a multiple of it.
    #[serde(default)]
    pub lot_size: Option<Decimal>,
    /// Smallest accepted order quantity.
    #[serde(default)]
    pub min_order_size: Option<Decimal>,
}

impl BookConfig {
    /// Unconstrained config for `symbol`.
    #[must_use]
    pub fn new(symbol: impl Into<Symbol>) -> Self {
        Self {
            symbol: symbol.into(),
            tick_size: None,
            lot_size: None,
            min_order_size: None,
        }
    }

    #[must_use]
    pub fn with_tick_size(mut self, tick_size: Decimal) -> Self {
        self.tick_size = Some(tick_size);
        self
    }

    #[must_use]
    pub fn with_lot_size(mut self, lot_size: Decimal) -> Self {
        self.lot_size = Some(lot_size);
        self
    }

    #[must_use]
    pub fn with_min_order_size(mut self, min_order_size: Decimal) -> Self {
        self.min_order_size = Some(min_order_size);
        self
    }

    /// Reject non-positive granularity settings.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("tick_size", self.tick_size),
            ("lot_size", self.lot_size),
            ("min_order_size", self.min_order_size),
        ];
        for (name, value) in fields {
            if let Some(v) = value {
                if v <= Decimal::ZERO {
                    return Err(LobError::Configuration(format!(
                        "{name} must be positive, got {v}"
                    )));
                }
            }
        }
        if self.symbol.as_str().is_empty() {
            return Err(LobError::Configuration("symbol must not be empty".into()));
        }
        Ok(())
    }
}
