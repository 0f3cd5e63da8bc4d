//! `MealLedger` — per-philosopher meal counters.
//!
//! Each counter has a single writer (its philosopher's thread) and any
//! number of concurrent readers, so plain relaxed atomics suffice: there is
//! no cross-counter ordering to preserve, and per-counter monotonicity is
//! given by the single writer.

use std::sync::atomic::{AtomicU64, Ordering};

use dine_core::PhilosopherId;

/// Monotonic meal counts, one per philosopher.
pub struct MealLedger {
    counts: Vec<AtomicU64>,
}

impl MealLedger {
    pub fn new(philosophers: usize) -> Self {
        Self {
            counts: (0..philosophers).map(|_| AtomicU64::new(0)).collect(),
        }
    }

    pub fn philosophers(&self) -> usize {
        self.counts.len()
    }

    /// Record one more meal for `who` and return the new total.
    ///
    /// Must only be called from `who`'s own thread — the single-writer rule
    /// is what makes the returned total exact.
    pub fn increment(&self, who: PhilosopherId) -> u64 {
        self.counts[who.index()].fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Current count for one philosopher.
    pub fn count(&self, who: PhilosopherId) -> u64 {
        self.counts[who.index()].load(Ordering::Relaxed)
    }

    /// Copy of all counters, indexed by philosopher.  Safe to call while
    /// increments are in flight; each entry is individually coherent.
    pub fn snapshot(&self) -> Vec<u64> {
        self.counts
            .iter()
            .map(|c| c.load(Ordering::Relaxed))
            .collect()
    }
}
