//! `dine-run` — the philosopher state machine and run lifecycle.
//!
//! # The cycle
//!
//! ```text
//! loop:
//!   Thinking     — sleep a think interval (interruptible)
//!   waiter.enter — at most N-1 philosophers past this point
//!   Acquiring    — left fork (unbounded by default), then right fork
//!                  (bounded); on a right-fork timeout the left fork is
//!                  released and the cycle ends early
//!   Eating       — meal recorded, eat interval slept, both forks released
//!   waiter.leave — exactly once per cycle, meal or no meal
//! ```
//!
//! A right-fork timeout is the expected contention outcome — the philosopher
//! simply thinks again and retries.  An `InvalidRelease` is an invariant
//! violation and aborts that one philosopher's thread; the rest of the table
//! keeps running.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dine_core::TableConfig;
//! use dine_run::TableBuilder;
//!
//! let handle = TableBuilder::new(TableConfig::default())
//!     .reporter(MyUiBridge::new())
//!     .build()?
//!     .run()?;
//! // ... later ...
//! handle.shutdown()?;
//! ```

pub mod builder;
pub mod error;
pub mod table;

mod philosopher;


pub use builder::TableBuilder;
pub use error::{RunError, RunResult};
pub use table::{Table, TableHandle};
