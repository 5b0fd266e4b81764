//! # lob-types
//!
//! Shared types, errors, and configuration for the **LOB** matching engine.
//!
//! This crate is the leaf dependency of the workspace. It defines:
//!
//! - **Identifiers**: [`OrderId`], [`Symbol`]
//! - **Order model**: [`Order`], [`OrderSide`], [`OrderType`]
//! - **Execution model**: [`ExecutionReport`], [`ExecStatus`]
//! - **Configuration**: [`BookConfig`]
//! - **Errors**: [`LobError`] with `LOB_ERR_` prefix codes
//! - **Constants**: engine-wide defaults

pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod order;
pub mod report;

// Re-export all primary types at crate root:
//   use lob_types::{Order, OrderSide, ExecutionReport, ...};

pub use config::*;
pub use error::*;
pub use ids::*;
pub use order::*;
pub use report::*;
