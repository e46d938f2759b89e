//! Error types for rf-sim.
//!
//! All variants are programmer-error classes, not recoverable at runtime:
//! the simulation's correctness depends on temporal and indexing invariants
//! holding exactly, so the policy is to fail fast and abort the run rather
//! than attempt silent recovery.

use rf_core::SimTime;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// `remove_earliest` with nothing scheduled.  The run loop always
    /// checks emptiness first; hitting this means a caller drove the
    /// calendar directly and incorrectly.
    #[error("event calendar is empty")]
    EmptyCalendar,

    /// An event scheduled into the past — a caller/logic bug, fatal to the
    /// run.
    #[error("event scheduled at {fire_time}, before current time {now}")]
    InvalidSchedule { fire_time: SimTime, now: SimTime },

    /// A failure raised by the model's transitions.
    ///
    /// Boxed because model crates sit downstream of `rf-sim` and cannot add
    /// their error enums here; use [`SimError::model`] at the call site.
    #[error("model error: {0}")]
    Model(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl SimError {
    /// Wrap a model-layer error for propagation through the event loop.
    pub fn model<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        SimError::Model(Box::new(err))
    }
}

/// Shorthand result type for `rf-sim`.
pub type SimResult<T> = Result<T, SimError>;
