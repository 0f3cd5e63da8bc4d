//! `dine-table` — the shared state philosophers contend over.
//!
//! | Module     | Contents                                             |
//! |------------|------------------------------------------------------|
//! | [`forks`]  | `ForkTable` — N ring-arranged exclusive fork locks   |
//! | [`waiter`] | `Waiter` — the bounded admission gate                |
//! | [`ledger`] | `MealLedger` — per-philosopher meal counters         |
//! | [`error`]  | `TableError`, `TableResult`                          |
//!
//! Everything here is passive: the philosopher loop in `dine-run` owns all
//! retry and rollback policy.  `ForkTable` and `Waiter` only block, time out,
//! or cancel; they never retry on a caller's behalf.

use std::time::Duration;

pub mod error;
pub mod forks;
pub mod ledger;
pub mod waiter;


pub use error::{TableError, TableResult};
pub use forks::{Acquire, ForkTable};
pub use ledger::MealLedger;
pub use waiter::Waiter;

/// How often a blocked fork or waiter queue re-checks the shutdown token.
/// Bounds cancellation latency for waits that have their own condvars.
pub(crate) const CANCEL_POLL: Duration = Duration::from_millis(25);
