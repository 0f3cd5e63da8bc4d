use dine_core::{ForkId, PhilosopherId};
use thiserror::Error;

/// Errors raised by the shared table state.
///
/// A right-fork timeout is deliberately *not* here: timing out is the
/// expected contention outcome and is reported through
/// [`Acquire::TimedOut`][crate::Acquire], not as an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// A philosopher released a fork it does not hold.  This is an invariant
    /// violation, not a recoverable condition: the caller's loop must abort.
    #[error("{philosopher} released {fork} which it does not hold")]
    InvalidRelease {
        fork: ForkId,
        philosopher: PhilosopherId,
    },
}

pub type TableResult<T> = Result<T, TableError>;
