//! Per-dispatch validation context.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cancellation context handed to the validator by the dispatch layer.
///
/// Clones share one flag: the dispatcher keeps a handle and cancels it
/// when the subscription shuts down; in-flight validations observe the
/// flag at their next call boundary. The engine call itself is not
/// interruptible, so cancellation is only checked between calls.
#[derive(Debug, Clone, Default)]
pub struct ValidationContext {
    cancelled: Arc<AtomicBool>,
}

impl ValidationContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark this context cancelled. Idempotent; never un-cancels.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
