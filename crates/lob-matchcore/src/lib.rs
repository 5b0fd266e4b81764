//! # lob-matchcore
//!
//! **Synchronous limit order book matching for one instrument.**
//!
//! One [`OrderBook`] serves one symbol and has a single writer. Each call to
//! [`OrderBook::add_order`] fully resolves before returning:
//!
//! - **Price-time priority**: best price first, earliest arrival at equal price
//! - **Maker price**: every fill executes at the resting order's price
//! - **No crossed book**: matching continues until no compatible pair remains
//! - **Market orders never rest**: unfilled market quantity is dropped
//!
//! The book does no I/O and keeps no state across restarts. Hosts that need
//! to share a book across threads must serialize access themselves.

pub mod digest;
pub mod matcher;
pub mod orderbook;
pub mod price_level;
pub mod snapshot;
pub mod validation;

pub use digest::{compute_report_root, verify_report_root};
pub use orderbook::OrderBook;
pub use price_level::PriceLevel;
pub use snapshot::{BookSnapshot, LevelSnapshot};
pub use validation::validate_order;
