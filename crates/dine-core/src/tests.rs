//! Unit tests for dine-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ForkId, PhilosopherId};

    #[test]
    fn index_roundtrip() {
        let id = PhilosopherId(3);
        assert_eq!(id.index(), 3);
        assert_eq!(PhilosopherId::try_from(3usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(PhilosopherId::INVALID.0, u32::MAX);
        assert_eq!(ForkId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(PhilosopherId(7).to_string(), "PhilosopherId(7)");
        assert_eq!(ForkId(0).to_string(), "ForkId(0)");
    }

    #[test]
    fn ring_adjacency() {
        // At a table of 5, philosopher 4's right fork wraps around to 0.
        assert_eq!(ForkId::left_of(PhilosopherId(4), 5), ForkId(4));
        assert_eq!(ForkId::right_of(PhilosopherId(4), 5), ForkId(0));
        assert_eq!(ForkId::right_of(PhilosopherId(2), 5), ForkId(3));
    }
}

#[cfg(test)]
mod config {
    use std::time::Duration;

    use crate::{CoreError, TableConfig};

    #[test]
    fn default_is_reference_behavior() {
        let cfg = TableConfig::default();
        assert_eq!(cfg.philosophers, 5);
        assert_eq!(cfg.resolved_slots(), 4);
        assert_eq!(cfg.left_fork_timeout, None);
        assert_eq!(cfg.right_fork_timeout, Duration::from_millis(1000));
        cfg.validate().unwrap();
    }

    #[test]
    fn rejects_single_philosopher() {
        let cfg = TableConfig {
            philosophers: 1,
            ..TableConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn rejects_slots_that_admit_full_circular_wait() {
        let cfg = TableConfig {
            admission_slots: Some(5),
            ..TableConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = TableConfig {
            admission_slots: Some(6),
            ..TableConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_zero_slots() {
        let cfg = TableConfig {
            admission_slots: Some(0),
            ..TableConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn accepts_reduced_slots() {
        let cfg = TableConfig {
            admission_slots: Some(2),
            ..TableConfig::default()
        };
        cfg.validate().unwrap();
        assert_eq!(cfg.resolved_slots(), 2);
    }

    #[test]
    fn rejects_empty_duration_range() {
        let mut cfg = TableConfig::default();
        cfg.think_millis.max_ms = cfg.think_millis.min_ms;
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod durations {
    use std::time::Duration;

    use crate::{
        DurationRange, DurationSource, FixedDuration, PhilosopherId, UniformDurations,
    };

    #[test]
    fn fixed_is_constant() {
        let mut src = FixedDuration(Duration::from_millis(7));
        assert_eq!(src.next_duration(), Duration::from_millis(7));
        assert_eq!(src.next_duration(), Duration::from_millis(7));
    }

    #[test]
    fn uniform_stays_in_range() {
        let range = DurationRange::new(10, 20);
        let mut src = UniformDurations::new(42, PhilosopherId(0), range);
        for _ in 0..1000 {
            let d = src.next_duration();
            assert!(d >= Duration::from_millis(10) && d < Duration::from_millis(20));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let range = DurationRange::new(0, 1_000_000);
        let mut a = UniformDurations::new(42, PhilosopherId(3), range);
        let mut b = UniformDurations::new(42, PhilosopherId(3), range);
        for _ in 0..100 {
            assert_eq!(a.next_duration(), b.next_duration());
        }
    }

    #[test]
    fn philosophers_get_independent_streams() {
        let range = DurationRange::new(0, 1_000_000);
        let mut a = UniformDurations::new(42, PhilosopherId(0), range);
        let mut b = UniformDurations::new(42, PhilosopherId(1), range);
        let firsts: Vec<_> = (0..8).map(|_| (a.next_duration(), b.next_duration())).collect();
        assert!(firsts.iter().any(|(x, y)| x != y));
    }
}

#[cfg(test)]
mod shutdown {
    use std::time::{Duration, Instant};

    use crate::ShutdownToken;

    #[test]
    fn sleep_runs_to_completion_when_unsignalled() {
        let token = ShutdownToken::new();
        let start = Instant::now();
        assert!(!token.sleep(Duration::from_millis(30)));
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn sleep_wakes_on_signal() {
        let token = ShutdownToken::new();
        let waker = token.clone();
        let t = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(20));
            waker.signal();
        });
        let start = Instant::now();
        assert!(token.sleep(Duration::from_secs(10)));
        assert!(start.elapsed() < Duration::from_secs(5));
        t.join().unwrap();
    }

    #[test]
    fn signal_is_idempotent_and_sticky() {
        let token = ShutdownToken::new();
        assert!(!token.is_signalled());
        token.signal();
        token.signal();
        assert!(token.is_signalled());
        // An already-signalled token returns from sleep immediately.
        assert!(token.sleep(Duration::from_secs(10)));
    }
}

#[cfg(test)]
mod reporter {
    use crate::{FaultIsolated, PhilosopherId, PhilosopherState, StateReporter};

    struct Explosive;
    impl StateReporter for Explosive {
        fn on_philosopher_state(&self, _: PhilosopherId, _: PhilosopherState) {
            panic!("boom");
        }
    }

    #[test]
    fn fault_isolation_swallows_reporter_panics() {
        let reporter = FaultIsolated::new(Explosive);
        // Must not unwind into the caller.
        reporter.on_philosopher_state(PhilosopherId(0), PhilosopherState::Thinking);
        // Non-overridden callbacks are no-ops and trivially safe.
        reporter.on_meal_count(PhilosopherId(0), 1);
    }
}
