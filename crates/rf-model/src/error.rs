//! Error types for rf-model.

use rf_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// A resource index outside the configured port/terminal range —
    /// indicates malformed input matrices, fatal to the run.
    #[error("{what} index {index} out of range ({count} configured)")]
    InvalidResourceIndex {
        what:  &'static str,
        index: usize,
        count: usize,
    },

    #[error("{what} length {got} does not match expected {expected}")]
    CountMismatch {
        what:     &'static str,
        expected: usize,
        got:      usize,
    },

    #[error("scenario error: {0}")]
    Scenario(String),

    #[error("scenario parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Shorthand result type for `rf-model`.
pub type ModelResult<T> = Result<T, ModelError>;
