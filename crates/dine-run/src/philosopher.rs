//! The per-thread philosopher loop.

use std::sync::Arc;
use std::time::Duration;

use dine_core::{
    DurationSource, ForkId, PhilosopherId, PhilosopherState, ShutdownToken, StateReporter,
};
use dine_table::{Acquire, ForkTable, MealLedger, TableResult, Waiter};

/// State shared by every philosopher at one table.
pub(crate) struct Shared {
    pub forks: ForkTable,
    pub waiter: Waiter,
    pub ledger: MealLedger,
    pub reporter: Arc<dyn StateReporter>,
}

/// One seat at the table: identity, the two reachable forks, timeout policy,
/// and this philosopher's private duration sources.
pub(crate) struct Philosopher {
    id: PhilosopherId,
    left: ForkId,
    right: ForkId,
    left_timeout: Option<Duration>,
    right_timeout: Duration,
    think: Box<dyn DurationSource>,
    eat: Box<dyn DurationSource>,
    shared: Arc<Shared>,
}

impl Philosopher {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        id: PhilosopherId,
        left: ForkId,
        right: ForkId,
        left_timeout: Option<Duration>,
        right_timeout: Duration,
        think: Box<dyn DurationSource>,
        eat: Box<dyn DurationSource>,
        shared: Arc<Shared>,
    ) -> Self {
        Self {
            id,
            left,
            right,
            left_timeout,
            right_timeout,
            think,
            eat,
            shared,
        }
    }

    pub(crate) fn id(&self) -> PhilosopherId {
        self.id
    }

    /// Run the Thinking → Acquiring → Eating cycle until shutdown or an
    /// invariant violation.
    pub(crate) fn run(mut self, shutdown: ShutdownToken) -> TableResult<()> {
        loop {
            self.shared
                .reporter
                .on_philosopher_state(self.id, PhilosopherState::Thinking);
            if shutdown.sleep(self.think.next_duration()) {
                return Ok(());
            }

            if !self.shared.waiter.enter(&shutdown) {
                return Ok(());
            }
            let outcome = self.dine(&shutdown);
            // Exactly once per cycle, meal or no meal, error or not.
            self.shared.waiter.leave();
            outcome?;

            if shutdown.is_signalled() {
                return Ok(());
            }
        }
    }

    /// One acquisition attempt: left fork, right fork, eat, release.
    ///
    /// Returns `Ok(())` both after a meal and after a contention timeout —
    /// the caller cannot tell the difference, which is intentional: a timed
    /// out cycle is just a shorter cycle.  Only an invalid release escapes
    /// as an error.
    fn dine(&mut self, shutdown: &ShutdownToken) -> TableResult<()> {
        let reporter = &self.shared.reporter;
        let forks = &self.shared.forks;

        reporter.on_philosopher_state(self.id, PhilosopherState::AcquiringLeft);
        match forks.try_acquire(self.left, self.id, self.left_timeout, shutdown) {
            Acquire::Acquired => {}
            // Nothing held yet, nothing to roll back.
            Acquire::TimedOut | Acquire::Cancelled => return Ok(()),
        }

        reporter.on_philosopher_state(self.id, PhilosopherState::AcquiringRight);
        match forks.try_acquire(self.right, self.id, Some(self.right_timeout), shutdown) {
            Acquire::Acquired => {}
            Acquire::TimedOut | Acquire::Cancelled => {
                // The lone left fork must go back before re-thinking, or the
                // table leaks a fork every contended cycle.
                forks.release(self.left, self.id)?;
                return Ok(());
            }
        }

        reporter.on_philosopher_state(self.id, PhilosopherState::Eating);
        let meals = self.shared.ledger.increment(self.id);
        reporter.on_meal_count(self.id, meals);

        // Shutdown during the meal still falls through to the releases;
        // the loop exits on the next token check.
        shutdown.sleep(self.eat.next_duration());

        forks.release(self.right, self.id)?;
        forks.release(self.left, self.id)?;
        Ok(())
    }
}
