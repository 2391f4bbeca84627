use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use crl_types::TxId;

/// Process-local transaction-id mint.
///
/// Combines a monotonically increasing counter with a coarse UTC timestamp
/// into a human-readable id that is unique for the process lifetime. This
/// stands in for a consensus-assigned transaction id on a real network;
/// nothing downstream may parse the result.
pub struct TxIdGenerator {
    counter: AtomicU64,
}

impl TxIdGenerator {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }

    /// Mint the next transaction id.
    pub fn next_id(&self) -> TxId {
        let seq = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        let stamp = Utc::now().format("%Y%m%d%H%M%S");
        TxId::new(format!("tx_{seq:08x}_{stamp}"))
    }
}

impl Default for TxIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
