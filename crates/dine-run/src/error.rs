use dine_core::{CoreError, PhilosopherId};
use dine_table::TableError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("table configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("{what} length {got} does not match philosopher count {expected}")]
    CountMismatch {
        expected: usize,
        got: usize,
        what: &'static str,
    },

    #[error("table invariant violated: {0}")]
    Table(#[from] TableError),

    #[error("failed to spawn philosopher thread: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("philosopher {0} panicked")]
    Panicked(PhilosopherId),
}

pub type RunResult<T> = Result<T, RunError>;
