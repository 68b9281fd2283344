//! Monotonic short-identifier allocation.

use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out short identifiers: 1, 2, 3, ... for the process lifetime.
///
/// Allocation is a single atomic fetch-add, so concurrent creation requests
/// never receive duplicate or skipped values, and the counter is never held
/// across validation or store writes.
#[derive(Debug)]
pub struct IdAllocator {
    next: AtomicU64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Returns the next identifier. Never fails, strictly increasing.
    pub fn next(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
