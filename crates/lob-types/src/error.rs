//! Error types for the LOB matching engine.
//!
//! All errors use the `LOB_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Order errors
//! - 9xx: General / configuration errors
//!
//! Partial fills and unfilled market remainders are normal outcomes and are
//! reported through [`ExecStatus`](crate::ExecStatus), never as errors.

use thiserror::Error;

use crate::{OrderId, Symbol};

/// Central error enum for all order book operations.
#[derive(Debug, Error)]
pub enum LobError {
    // =================================================================
    // Order Errors (1xx)
    // =================================================================
    /// The order failed validation (non-positive quantity, missing price, etc.).
    #[error("LOB_ERR_101: Invalid order: {reason}")]
    InvalidOrder { reason: String },

    /// An order with this ID is already resting in the book.
    #[error("LOB_ERR_102: Order already exists: {0}")]
    DuplicateOrder(OrderId),

    /// The order was addressed to a different instrument.
    #[error("LOB_ERR_103: Symbol mismatch: book is {expected}, order is {actual}")]
    SymbolMismatch { expected: Symbol, actual: Symbol },

    // =================================================================
    // General (9xx)
    // =================================================================
    /// The book configuration is invalid.
    #[error("LOB_ERR_902: Configuration error: {0}")]
    Configuration(String),
}

impl LobError {
    /// Shorthand for [`LobError::InvalidOrder`].
    #[must_use]
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidOrder {
            reason: reason.into(),
        }
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, LobError>;
