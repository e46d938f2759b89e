//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors from `rf-core` constructors.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("matrix data length {len} does not match {rows}×{cols}")]
    Dimension {
        rows: usize,
        cols: usize,
        len:  usize,
    },
}

/// Shorthand result type for `rf-core`.
pub type CoreResult<T> = Result<T, CoreError>;
