use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out increasing request numbers so late responses can be recognised
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number for a new request. Also used by `clear` to retire everything in flight.
    pub fn next(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    pub fn is_stale(&self, seq: u64) -> bool {
        seq < self.latest()
    }
}
