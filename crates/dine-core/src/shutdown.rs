//! Cooperative shutdown signal.
//!
//! Every suspension point in the protocol — the waiter queue, fork waits, and
//! the think/eat sleeps — observes a [`ShutdownToken`].  Sleeps wake
//! immediately when the token fires because they wait on the token's own
//! condvar; fork and waiter queues wait on their own condvars and re-check
//! the token on a short poll slice instead, so cancellation latency there is
//! bounded by that slice.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

struct Inner {
    signalled: Mutex<bool>,
    cv: Condvar,
}

/// Clonable handle to a one-shot shutdown signal shared by a whole table.
#[derive(Clone)]
pub struct ShutdownToken {
    inner: Arc<Inner>,
}

impl ShutdownToken {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                signalled: Mutex::new(false),
                cv: Condvar::new(),
            }),
        }
    }

    /// Fire the signal, waking every sleeper on this token.  Idempotent.
    pub fn signal(&self) {
        let mut signalled = self.inner.signalled.lock();
        *signalled = true;
        self.inner.cv.notify_all();
    }

    pub fn is_signalled(&self) -> bool {
        *self.inner.signalled.lock()
    }

    /// Sleep for `dur` or until the token fires, whichever comes first.
    ///
    /// Returns `true` if shutdown was requested before the full duration
    /// elapsed.
    pub fn sleep(&self, dur: Duration) -> bool {
        let deadline = Instant::now() + dur;
        let mut signalled = self.inner.signalled.lock();
        while !*signalled {
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            self.inner.cv.wait_for(&mut signalled, deadline - now);
        }
        true
    }
}

impl Default for ShutdownToken {
    fn default() -> Self {
        Self::new()
    }
}
