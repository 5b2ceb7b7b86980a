//! Request generations, so a slow fetch can't overwrite a newer one.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

/// Hands out increasing [`RequestTicket`]s; clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: Arc<AtomicU64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request generation. Every earlier ticket becomes stale.
    pub fn issue(&self) -> RequestTicket {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket {
            seq,
            latest: Arc::clone(&self.latest),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RequestTicket {
    seq: u64,
    latest: Arc<AtomicU64>,
}

impl RequestTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.seq
    }
}
