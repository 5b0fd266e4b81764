//! Replay verification for execution report streams.
//!
//! Matching is deterministic given the same order stream, but report
//! timestamps are wall-clock. The report root hashes everything except the
//! timestamp, so two replays of a backtest can be compared by a single
//! 32-byte value.

use lob_types::{ExecStatus, ExecutionReport, OrderSide};
use sha2::{Digest, Sha256};

/// Compute the root hash over a sequence of execution reports.
///
/// Depends on, per report and in order: order ID, side, filled quantity,
/// price and status. Symbol and timestamp are excluded.
#[must_use]
pub fn compute_report_root(reports: &[ExecutionReport]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(b"lob:report_root:v1:");
    hasher.update((reports.len() as u64).to_le_bytes());

    for report in reports {
        hasher.update(report.order_id.0.as_bytes());
        hasher.update(match report.side {
            OrderSide::Buy => [0u8],
            OrderSide::Sell => [1u8],
        });
        hasher.update(report.filled_qty.normalize().to_string().as_bytes());
        hasher.update(b"@");
        hasher.update(report.price.normalize().to_string().as_bytes());
        hasher.update(match report.status {
            ExecStatus::Filled => [0u8],
            ExecStatus::PartialFill => [1u8],
        });
    }

    let result = hasher.finalize();
    let mut root = [0u8; 32];
    root.copy_from_slice(&result);
    root
}

/// Recompute the root and compare with `expected_root`.
#[must_use]
pub fn verify_report_root(reports: &[ExecutionReport], expected_root: &[u8; 32]) -> bool {
    compute_report_root(reports) == *expected_root
}
