//! Table configuration.
//!
//! All knobs are constant for the lifetime of a run.  The defaults reproduce
//! the reference behavior: 5 philosophers, 4 admission slots, an unbounded
//! wait on the left fork, a 1 s bound on the right fork, and think/eat
//! intervals drawn uniformly from 1–5 s.

use std::time::Duration;

use crate::{CoreError, CoreResult};

// ── DurationRange ─────────────────────────────────────────────────────────────

/// A half-open range of milliseconds to draw a duration from.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DurationRange {
    /// Inclusive lower bound, in milliseconds.
    pub min_ms: u64,
    /// Exclusive upper bound, in milliseconds.
    pub max_ms: u64,
}

impl DurationRange {
    pub const fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }
}

// ── TableConfig ───────────────────────────────────────────────────────────────

/// Top-level configuration for a dining table.
///
/// Typically loaded from a TOML/JSON file by the application crate (with the
/// `serde` feature) and passed to `TableBuilder`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableConfig {
    /// Number of philosophers (and forks).  Must be at least 2.
    pub philosophers: usize,

    /// Capacity of the admission waiter.  `None` derives `philosophers - 1`,
    /// the largest value that still rules out the circular-wait deadlock.
    /// Explicit values are accepted in `1..=philosophers - 1`; anything else
    /// is a configuration error.
    pub admission_slots: Option<usize>,

    /// Bound on the left-fork wait.  `None` waits unboundedly, which is the
    /// reference behavior; a bounded value trades fairness reasoning for a
    /// shorter worst-case cycle.  See `DESIGN.md` for the trade-off.
    pub left_fork_timeout: Option<Duration>,

    /// Bound on the right-fork wait.  A timeout here is the expected
    /// contention outcome and triggers rollback of the left fork, not an
    /// error.
    pub right_fork_timeout: Duration,

    /// Range the think intervals are drawn from.
    pub think_millis: DurationRange,

    /// Range the eat intervals are drawn from.
    pub eat_millis: DurationRange,

    /// Master RNG seed.  The same seed always produces the same duration
    /// sequences for every philosopher.
    pub seed: u64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            philosophers: 5,
            admission_slots: None,
            left_fork_timeout: None,
            right_fork_timeout: Duration::from_millis(1000),
            think_millis: DurationRange::new(1000, 5000),
            eat_millis: DurationRange::new(1000, 5000),
            seed: 0,
        }
    }
}

impl TableConfig {
    /// Check the configuration for values that would break the protocol's
    /// deadlock-freedom argument.
    pub fn validate(&self) -> CoreResult<()> {
        if self.philosophers < 2 {
            return Err(CoreError::Config(format!(
                "need at least 2 philosophers, got {}",
                self.philosophers
            )));
        }
        if let Some(slots) = self.admission_slots {
            if slots == 0 {
                return Err(CoreError::Config(
                    "admission_slots must be at least 1".into(),
                ));
            }
            if slots >= self.philosophers {
                return Err(CoreError::Config(format!(
                    "admission_slots {} admits a full circular wait at a table \
                     of {} (maximum is {})",
                    slots,
                    self.philosophers,
                    self.philosophers - 1
                )));
            }
        }
        if self.think_millis.min_ms >= self.think_millis.max_ms {
            return Err(CoreError::Config(format!(
                "empty think range {:?}",
                self.think_millis
            )));
        }
        if self.eat_millis.min_ms >= self.eat_millis.max_ms {
            return Err(CoreError::Config(format!(
                "empty eat range {:?}",
                self.eat_millis
            )));
        }
        Ok(())
    }

    /// The waiter capacity this configuration resolves to.
    ///
    /// Call [`validate`][Self::validate] first; on an unvalidated config with
    /// `philosophers == 0` this underflows.
    #[inline]
    pub fn resolved_slots(&self) -> usize {
        self.admission_slots.unwrap_or(self.philosophers - 1)
    }
}
