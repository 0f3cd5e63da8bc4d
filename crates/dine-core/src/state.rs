//! Observable philosopher and fork states.
//!
//! These are the values carried by [`StateReporter`][crate::StateReporter]
//! notifications.  The protocol crates own the authoritative state; these
//! enums are snapshots for presentation layers.

use std::fmt;

use crate::PhilosopherId;

/// The phase a philosopher is currently in.
///
/// The release of held forks is instantaneous from the observer's point of
/// view: a philosopher goes straight from `Eating` back to `Thinking`, with
/// the two fork-state notifications in between.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhilosopherState {
    /// No forks held; waiting out the think interval.
    Thinking,
    /// Past the waiter, reaching for the left fork.
    AcquiringLeft,
    /// Left fork in hand, reaching for the right fork.
    AcquiringRight,
    /// Both forks held.
    Eating,
}

impl fmt::Display for PhilosopherState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PhilosopherState::Thinking => "Thinking",
            PhilosopherState::AcquiringLeft => "AcquiringLeft",
            PhilosopherState::AcquiringRight => "AcquiringRight",
            PhilosopherState::Eating => "Eating",
        };
        f.write_str(s)
    }
}

/// Whether a fork is on the table or in someone's hand.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ForkState {
    /// On the table, up for grabs.
    Free,
    /// In the hand of the given philosopher.
    HeldBy(PhilosopherId),
}

impl fmt::Display for ForkState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForkState::Free => f.write_str("Free"),
            ForkState::HeldBy(who) => write!(f, "Taken by {who}"),
        }
    }
}
