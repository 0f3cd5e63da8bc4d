//! The `Table` runtime: thread spawning, live ledger reads, and shutdown.
//!
//! Nothing starts at construction time; [`Table::run`] is the single point
//! where philosopher threads come into existence, and the returned
//! [`TableHandle`] is the only way to stop them.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use dine_core::{PhilosopherId, ShutdownToken};
use dine_table::TableResult;

use crate::philosopher::{Philosopher, Shared};
use crate::{RunError, RunResult};

/// A fully built, not-yet-running table.  Created by
/// [`TableBuilder`][crate::TableBuilder].
pub struct Table {
    philosophers: Vec<Philosopher>,
    shared: Arc<Shared>,
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("philosophers", &self.philosophers.len())
            .finish_non_exhaustive()
    }
}

impl Table {
    pub(crate) fn new(philosophers: Vec<Philosopher>, shared: Arc<Shared>) -> Self {
        Self {
            philosophers,
            shared,
        }
    }

    /// Number of seats at the table.
    pub fn philosophers(&self) -> usize {
        self.philosophers.len()
    }

    /// Spawn one named OS thread per philosopher and hand back the controls.
    ///
    /// If a spawn fails partway, the already-running philosophers are
    /// signalled and joined before the error is returned.
    pub fn run(self) -> RunResult<TableHandle> {
        let shutdown = ShutdownToken::new();
        let n = self.philosophers.len();
        log::info!(
            "seating {n} philosophers ({} admission slots)",
            self.shared.waiter.capacity()
        );

        let mut threads: Vec<(PhilosopherId, JoinHandle<TableResult<()>>)> =
            Vec::with_capacity(n);
        for philosopher in self.philosophers {
            let id = philosopher.id();
            let token = shutdown.clone();
            let spawned = thread::Builder::new()
                .name(format!("philosopher-{}", id.0))
                .spawn(move || philosopher.run(token));
            match spawned {
                Ok(handle) => threads.push((id, handle)),
                Err(e) => {
                    shutdown.signal();
                    for (_, t) in threads {
                        let _ = t.join();
                    }
                    return Err(RunError::Spawn(e));
                }
            }
        }

        Ok(TableHandle {
            shutdown,
            threads,
            shared: self.shared,
        })
    }
}

/// Controls for a running table.
pub struct TableHandle {
    shutdown: ShutdownToken,
    threads: Vec<(PhilosopherId, JoinHandle<TableResult<()>>)>,
    shared: Arc<Shared>,
}

impl TableHandle {
    /// Live read of every philosopher's meal count, indexed by seat.
    pub fn meal_counts(&self) -> Vec<u64> {
        self.shared.ledger.snapshot()
    }

    /// A clone of the table's shutdown token, e.g. to wire into a Ctrl-C
    /// handler.
    pub fn shutdown_token(&self) -> ShutdownToken {
        self.shutdown.clone()
    }

    /// Signal shutdown, join every philosopher, and surface the first
    /// failure (an invariant violation or a panicked thread) if any.
    pub fn shutdown(self) -> RunResult<()> {
        self.shutdown.signal();
        let mut first_err = None;
        for (id, t) in self.threads {
            match t.join() {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    log::error!("philosopher {id} aborted: {e}");
                    first_err.get_or_insert(RunError::Table(e));
                }
                Err(_) => {
                    log::error!("philosopher {id} panicked");
                    first_err.get_or_insert(RunError::Panicked(id));
                }
            }
        }
        log::info!("table cleared");
        match first_err {
            None => Ok(()),
            Some(e) => Err(e),
        }
    }
}
