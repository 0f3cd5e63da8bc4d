//! Injected think/eat duration sources.
//!
//! The protocol never calls into `rand` directly; philosophers draw their
//! think and eat intervals from a [`DurationSource`] supplied at build time.
//! Tests inject [`FixedDuration`] to make runs deterministic; the default is
//! [`UniformDurations`], seeded per philosopher so that:
//!
//! - philosophers never share RNG state (no contention, no ordering
//!   dependency between threads), and
//! - the same master seed reproduces the same interval sequence for each
//!   philosopher regardless of how the others are scheduled.

use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{DurationRange, PhilosopherId};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Source of think/eat intervals for one philosopher.
///
/// Implementations must be `Send`: each source is moved onto its
/// philosopher's thread.
pub trait DurationSource: Send + 'static {
    /// Draw the next interval.
    fn next_duration(&mut self) -> Duration;
}

// ── UniformDurations ──────────────────────────────────────────────────────────

/// Uniformly distributed intervals from a per-philosopher deterministic RNG.
pub struct UniformDurations {
    rng: SmallRng,
    range: DurationRange,
}

impl UniformDurations {
    /// Seed deterministically from the run's master seed and a philosopher ID.
    pub fn new(master_seed: u64, who: PhilosopherId, range: DurationRange) -> Self {
        let seed = master_seed ^ (who.0 as u64).wrapping_mul(MIXING_CONSTANT);
        Self {
            rng: SmallRng::seed_from_u64(seed),
            range,
        }
    }
}

impl DurationSource for UniformDurations {
    fn next_duration(&mut self) -> Duration {
        let ms = self.rng.gen_range(self.range.min_ms..self.range.max_ms);
        Duration::from_millis(ms)
    }
}

// ── FixedDuration ─────────────────────────────────────────────────────────────

/// Always returns the same interval.  The workhorse of the test suite.
pub struct FixedDuration(pub Duration);

impl DurationSource for FixedDuration {
    fn next_duration(&mut self) -> Duration {
        self.0
    }
}
