//! Engine-wide constants.

/// Number of price levels per side returned by a default book snapshot.
pub const DEFAULT_SNAPSHOT_DEPTH: usize = 10;
