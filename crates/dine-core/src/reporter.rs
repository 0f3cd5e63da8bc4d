//! The `StateReporter` trait — the notification contract toward presentation
//! layers.
//!
//! The protocol emits pure state-transition events through this trait; any
//! UI, logger, or test recorder subscribes by implementing it.  Callbacks run
//! on the philosopher threads and are expected to return promptly — a slow
//! reporter should buffer and dispatch asynchronously on its own side.
//!
//! All methods have default no-op implementations so implementors only need
//! to override what they care about.
//!
//! # Example — console printer
//!
//! ```rust,ignore
//! struct Printer;
//!
//! impl StateReporter for Printer {
//!     fn on_meal_count(&self, who: PhilosopherId, count: u64) {
//!         println!("{who}: {count} meals");
//!     }
//! }
//! ```

use std::panic::{self, AssertUnwindSafe};

use crate::{ForkId, ForkState, PhilosopherId, PhilosopherState};

/// Callbacks invoked on every observable state transition.
pub trait StateReporter: Send + Sync {
    /// A philosopher entered the given phase.
    fn on_philosopher_state(&self, _who: PhilosopherId, _state: PhilosopherState) {}

    /// A fork changed hands.  Emitted on every Free↔Held transition, in the
    /// order the transitions happened for that fork.
    fn on_fork_state(&self, _fork: ForkId, _state: ForkState) {}

    /// A philosopher's meal counter advanced to `count`.
    fn on_meal_count(&self, _who: PhilosopherId, _count: u64) {}
}

/// A [`StateReporter`] that does nothing.  Use when you need to build a table
/// but don't want notifications.
pub struct NoopReporter;

impl StateReporter for NoopReporter {}

// ── FaultIsolated ─────────────────────────────────────────────────────────────

/// Wraps a reporter so that a panic in any callback is caught and logged
/// instead of unwinding through the protocol.
///
/// Without this, a panicking reporter inside a fork's critical section would
/// abandon the philosopher thread with the fork still marked held, wedging
/// both neighbors.  The wrapped callback's panic payload is discarded; the
/// event is simply lost.
pub struct FaultIsolated<R>(R);

impl<R: StateReporter> FaultIsolated<R> {
    pub fn new(reporter: R) -> Self {
        Self(reporter)
    }
}

impl<R: StateReporter> StateReporter for FaultIsolated<R> {
    fn on_philosopher_state(&self, who: PhilosopherId, state: PhilosopherState) {
        let hook = AssertUnwindSafe(|| self.0.on_philosopher_state(who, state));
        if panic::catch_unwind(hook).is_err() {
            log::warn!("state reporter panicked in on_philosopher_state({who}, {state})");
        }
    }

    fn on_fork_state(&self, fork: ForkId, state: ForkState) {
        let hook = AssertUnwindSafe(|| self.0.on_fork_state(fork, state));
        if panic::catch_unwind(hook).is_err() {
            log::warn!("state reporter panicked in on_fork_state({fork}, {state})");
        }
    }

    fn on_meal_count(&self, who: PhilosopherId, count: u64) {
        let hook = AssertUnwindSafe(|| self.0.on_meal_count(who, count));
        if panic::catch_unwind(hook).is_err() {
            log::warn!("state reporter panicked in on_meal_count({who}, {count})");
        }
    }
}
