//! Fluent builder for constructing a [`Table`].

use std::sync::Arc;

use dine_core::{
    DurationSource, FaultIsolated, ForkId, NoopReporter, PhilosopherId, StateReporter,
    TableConfig, UniformDurations,
};
use dine_table::{ForkTable, MealLedger, Waiter};

use crate::philosopher::{Philosopher, Shared};
use crate::{RunError, RunResult, Table};

/// Seed offset separating the eat-duration stream from the think-duration
/// stream for the same philosopher.
const EAT_STREAM: u64 = 0x517c_c1b7_2722_0a95;

/// Fluent builder for [`Table`].
///
/// # Required inputs
///
/// - [`TableConfig`] — philosopher count, timeouts, duration ranges, seed.
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                                        |
/// |----------------------|------------------------------------------------|
/// | `.reporter(r)`       | [`NoopReporter`]                               |
/// | `.think_durations(v)`| `UniformDurations` from `config.think_millis`  |
/// | `.eat_durations(v)`  | `UniformDurations` from `config.eat_millis`    |
///
/// # Example
///
/// ```rust,ignore
/// let table = TableBuilder::new(TableConfig::default())
///     .reporter(my_reporter)
///     .build()?;
/// let handle = table.run()?;
/// ```
pub struct TableBuilder {
    config: TableConfig,
    reporter: Arc<dyn StateReporter>,
    think: Option<Vec<Box<dyn DurationSource>>>,
    eat: Option<Vec<Box<dyn DurationSource>>>,
}

impl TableBuilder {
    pub fn new(config: TableConfig) -> Self {
        Self {
            config,
            reporter: Arc::new(NoopReporter),
            think: None,
            eat: None,
        }
    }

    /// Supply the state reporter.  It is wrapped in
    /// [`FaultIsolated`] so a panicking callback cannot corrupt the table.
    pub fn reporter<R: StateReporter + 'static>(mut self, reporter: R) -> Self {
        self.reporter = Arc::new(FaultIsolated::new(reporter));
        self
    }

    /// Override the think-duration sources (must be one per philosopher).
    pub fn think_durations(mut self, sources: Vec<Box<dyn DurationSource>>) -> Self {
        self.think = Some(sources);
        self
    }

    /// Override the eat-duration sources (must be one per philosopher).
    pub fn eat_durations(mut self, sources: Vec<Box<dyn DurationSource>>) -> Self {
        self.eat = Some(sources);
        self
    }

    /// Validate the configuration and assemble a ready-to-run [`Table`].
    pub fn build(self) -> RunResult<Table> {
        self.config.validate()?;
        let n = self.config.philosophers;

        let slots = self.config.resolved_slots();
        if slots != n - 1 {
            log::warn!(
                "admission waiter configured with {slots} slots instead of {} — \
                 deadlock-freedom holds but throughput drops",
                n - 1
            );
        }

        let think = resolve_sources(self.think, n, "think duration sources", || {
            default_sources(self.config.seed, n, self.config.think_millis)
        })?;
        let eat = resolve_sources(self.eat, n, "eat duration sources", || {
            default_sources(self.config.seed ^ EAT_STREAM, n, self.config.eat_millis)
        })?;

        let shared = Arc::new(Shared {
            forks: ForkTable::new(n, Arc::clone(&self.reporter)),
            waiter: Waiter::new(slots),
            ledger: MealLedger::new(n),
            reporter: self.reporter,
        });

        let philosophers = think
            .into_iter()
            .zip(eat)
            .enumerate()
            .map(|(i, (think, eat))| {
                let id = PhilosopherId(i as u32);
                Philosopher::new(
                    id,
                    ForkId::left_of(id, n),
                    ForkId::right_of(id, n),
                    self.config.left_fork_timeout,
                    self.config.right_fork_timeout,
                    think,
                    eat,
                    Arc::clone(&shared),
                )
            })
            .collect();

        Ok(Table::new(philosophers, shared))
    }
}

fn resolve_sources(
    supplied: Option<Vec<Box<dyn DurationSource>>>,
    expected: usize,
    what: &'static str,
    default: impl FnOnce() -> Vec<Box<dyn DurationSource>>,
) -> RunResult<Vec<Box<dyn DurationSource>>> {
    match supplied {
        Some(v) if v.len() != expected => Err(RunError::CountMismatch {
            expected,
            got: v.len(),
            what,
        }),
        Some(v) => Ok(v),
        None => Ok(default()),
    }
}

fn default_sources(
    seed: u64,
    n: usize,
    range: dine_core::DurationRange,
) -> Vec<Box<dyn DurationSource>> {
    (0..n)
        .map(|i| {
            Box::new(UniformDurations::new(seed, PhilosopherId(i as u32), range))
                as Box<dyn DurationSource>
        })
        .collect()
}
