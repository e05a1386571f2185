//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `WlError` as one variant
//! via `#[from]`, so `?` works across crate boundaries.

use thiserror::Error;

/// The top-level error type for `wl-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum WlError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `wl-*` crates.
pub type WlResult<T> = Result<T, WlError>;
