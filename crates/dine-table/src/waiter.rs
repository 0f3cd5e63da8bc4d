//! `Waiter` — the bounded admission gate.
//!
//! # Why this exists
//!
//! With N philosophers and N forks, nothing else in the protocol prevents
//! all N from picking up their left fork simultaneously and waiting forever
//! for a right fork that never frees — the classic circular-wait deadlock.
//! Capping the number of philosophers past the gate at N-1 guarantees that
//! at least one of them faces a right neighbor who is not holding anything,
//! so some philosopher can always complete its pair and the cycle cannot
//! close.
//!
//! Every `enter` must be paired with exactly one `leave`, including on the
//! rollback path where no meal happened.  `leave` wakes at most one waiter;
//! no FIFO ordering is guaranteed among the blocked — wake order is whatever
//! the OS condvar gives us.

use dine_core::ShutdownToken;
use parking_lot::{Condvar, Mutex};

use crate::CANCEL_POLL;

/// Counting gate limiting how many philosophers may be acquiring or holding
/// forks at once.
pub struct Waiter {
    capacity: usize,
    available: Mutex<usize>,
    freed: Condvar,
}

impl Waiter {
    /// Create a gate with `slots` concurrent occupants allowed.
    pub fn new(slots: usize) -> Self {
        Self {
            capacity: slots,
            available: Mutex::new(slots),
            freed: Condvar::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Block until a slot frees, then occupy it.
    ///
    /// Returns `false` without occupying a slot if shutdown is requested,
    /// whether before or during the wait.
    pub fn enter(&self, shutdown: &ShutdownToken) -> bool {
        let mut available = self.available.lock();
        loop {
            if shutdown.is_signalled() {
                return false;
            }
            if *available > 0 {
                break;
            }
            self.freed.wait_for(&mut available, CANCEL_POLL);
        }
        *available -= 1;
        true
    }

    /// Release the slot taken by a prior `enter`, waking at most one waiter.
    pub fn leave(&self) {
        let mut available = self.available.lock();
        debug_assert!(*available < self.capacity, "leave() without matching enter()");
        *available += 1;
        self.freed.notify_one();
    }
}
