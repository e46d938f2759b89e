//! Run observer trait for progress reporting and tracing.

use rf_core::SimTime;

/// Callbacks invoked by [`Simulator::run`][crate::Simulator::run] at key
/// points in the event loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — event tracer
///
/// ```rust,ignore
/// struct Tracer;
///
/// impl<E: std::fmt::Display> SimObserver<E> for Tracer {
///     fn on_event(&mut self, time: SimTime, payload: &E) {
///         println!("{time} {payload}");
///     }
/// }
/// ```
pub trait SimObserver<E> {
    /// Called once after the model has been reset and seeded, before the
    /// first event fires.
    fn on_run_start(&mut self) {}

    /// Called for every popped event, after simulated time has advanced to
    /// its fire time and before the model's transition executes.
    fn on_event(&mut self, _time: SimTime, _payload: &E) {}

    /// Called once when the run terminates (calendar empty or horizon
    /// reached).  `events_processed` counts executed events only; events
    /// abandoned past the horizon are excluded.
    fn on_run_end(&mut self, _final_time: SimTime, _events_processed: u64) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl<E> SimObserver<E> for NoopObserver {}
