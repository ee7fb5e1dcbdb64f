//! Request sequence numbers for discarding stale responses.

use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out strictly increasing request numbers, starting at 1.
#[derive(Debug, Default)]
pub struct RequestSequence {
    last_issued: AtomicU64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> u64 {
        self.last_issued.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// Consumer-side gate: accepts a response only if it is newer than the last
/// one accepted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LatestOnly {
    applied: u64,
}

impl LatestOnly {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accept(&mut self, seq: u64) -> bool {
        if seq > self.applied {
            self.applied = seq;
            true
        } else {
            false
        }
    }

    pub fn last_applied(&self) -> u64 {
        self.applied
    }
}
