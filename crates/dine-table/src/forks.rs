//! `ForkTable` — N independently lockable forks arranged in a ring.
//!
//! Each fork is a holder slot guarded by its own mutex plus a condvar that
//! release notifies.  The holder is tracked explicitly (rather than leaning
//! on a plain `Mutex` guard) so that releasing a fork one does not hold is
//! detectable as an [`InvalidRelease`][crate::TableError::InvalidRelease]
//! instead of silent corruption.
//!
//! # Notification ordering
//!
//! Free↔Held reporter notifications are emitted *inside* the per-fork
//! critical section.  This serializes the event stream per fork — observers
//! see a strict Held/Free alternation — at the cost of holding that one
//! fork's lock across the callback.  Reporters are required to return
//! promptly (see `dine_core::reporter`); panics are already isolated by
//! `FaultIsolated` before a reporter reaches this crate.
//!
//! No wake ordering is guaranteed among philosophers blocked on the same
//! fork; `notify_one` wakes whichever waiter the OS picks.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dine_core::{ForkId, ForkState, PhilosopherId, ShutdownToken, StateReporter};
use parking_lot::{Condvar, Mutex};

use crate::{CANCEL_POLL, TableError, TableResult};

/// Outcome of a single acquisition attempt.  No internal retry — callers own
/// retry policy.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Acquire {
    /// The fork is now held by the caller.
    Acquired,
    /// The bounded wait elapsed with the fork still in another hand.
    TimedOut,
    /// Shutdown was requested while waiting; the fork was not taken.
    Cancelled,
}

struct Slot {
    holder: Mutex<Option<PhilosopherId>>,
    freed: Condvar,
}

/// The ring of fork locks shared by all philosophers.
pub struct ForkTable {
    slots: Vec<Slot>,
    reporter: Arc<dyn StateReporter>,
}

impl ForkTable {
    /// Create `forks` free forks reporting transitions to `reporter`.
    pub fn new(forks: usize, reporter: Arc<dyn StateReporter>) -> Self {
        let slots = (0..forks)
            .map(|_| Slot {
                holder: Mutex::new(None),
                freed: Condvar::new(),
            })
            .collect();
        Self { slots, reporter }
    }

    /// Number of forks on the table.
    pub fn forks(&self) -> usize {
        self.slots.len()
    }

    /// The current holder of `fork`, if any.  A sampling accessor for
    /// diagnostics; by the time the caller looks at the result the fork may
    /// already have changed hands.
    pub fn holder(&self, fork: ForkId) -> Option<PhilosopherId> {
        *self.slots[fork.index()].holder.lock()
    }

    /// Try to take `fork` for `who`, waiting at most `timeout` (`None` waits
    /// unboundedly).  Checks `shutdown` at every wakeup, so an unbounded wait
    /// still terminates promptly on cancellation.
    pub fn try_acquire(
        &self,
        fork: ForkId,
        who: PhilosopherId,
        timeout: Option<Duration>,
        shutdown: &ShutdownToken,
    ) -> Acquire {
        let slot = &self.slots[fork.index()];
        let deadline = timeout.map(|t| Instant::now() + t);

        let mut holder = slot.holder.lock();
        loop {
            if shutdown.is_signalled() {
                return Acquire::Cancelled;
            }
            if holder.is_none() {
                break;
            }
            let wait = match deadline {
                Some(d) => {
                    let now = Instant::now();
                    if now >= d {
                        return Acquire::TimedOut;
                    }
                    (d - now).min(CANCEL_POLL)
                }
                None => CANCEL_POLL,
            };
            // Spurious and poll-slice wakeups are fine: the loop re-examines
            // the holder, the deadline, and the token.
            slot.freed.wait_for(&mut holder, wait);
        }

        *holder = Some(who);
        self.reporter.on_fork_state(fork, ForkState::HeldBy(who));
        Acquire::Acquired
    }

    /// Put `fork` back on the table.  Only the current holder may release;
    /// anything else is an invariant violation and fails with
    /// [`TableError::InvalidRelease`].
    pub fn release(&self, fork: ForkId, who: PhilosopherId) -> TableResult<()> {
        let slot = &self.slots[fork.index()];
        let mut holder = slot.holder.lock();
        if *holder != Some(who) {
            return Err(TableError::InvalidRelease {
                fork,
                philosopher: who,
            });
        }
        *holder = None;
        self.reporter.on_fork_state(fork, ForkState::Free);
        slot.freed.notify_one();
        Ok(())
    }
}
