//! `dine-core` — foundational types for the `dine` workspace.
//!
//! This crate is a dependency of every other `dine-*` crate.  It intentionally
//! has no `dine-*` dependencies and minimal external ones (`rand`,
//! `thiserror`, `parking_lot`, `log`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `PhilosopherId`, `ForkId`                               |
//! | [`state`]     | `PhilosopherState`, `ForkState`                         |
//! | [`config`]    | `TableConfig`, `DurationRange`                          |
//! | [`durations`] | `DurationSource`, `UniformDurations`, `FixedDuration`   |
//! | [`reporter`]  | `StateReporter`, `NoopReporter`, `FaultIsolated`        |
//! | [`shutdown`]  | `ShutdownToken`                                         |
//! | [`error`]     | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                        |
//! |---------|---------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.      |

pub mod config;
pub mod durations;
pub mod error;
pub mod ids;
pub mod reporter;
pub mod shutdown;
pub mod state;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DurationRange, TableConfig};
pub use durations::{DurationSource, FixedDuration, UniformDurations};
pub use error::{CoreError, CoreResult};
pub use ids::{ForkId, PhilosopherId};
pub use reporter::{FaultIsolated, NoopReporter, StateReporter};
pub use shutdown::ShutdownToken;
pub use state::{ForkState, PhilosopherState};
