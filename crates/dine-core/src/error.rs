//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! via `From` impls or wrap it as one variant.

use thiserror::Error;

/// The top-level error type for `dine-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `dine-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
