//! The `Model` trait — the seam between the event loop and domain logic.
//!
//! A model's event payload is expected to be a tagged variant over its
//! finite set of transitions, dispatched by a single `match` inside
//! [`Model::on_event`].  Keeping the dispatch in the model (rather than
//! storing callbacks in the calendar) makes the state machine explicit and
//! exhaustively checkable.

use crate::{SimResult, Simulator};

/// A discrete-event system model driven by [`Simulator::run`].
pub trait Model {
    /// The event payload: transition kind plus whatever context the
    /// transition needs.  Payloads are owned and move-passed — at most one
    /// event per logical actor is pending at a time, so there is no shared
    /// mutable aliasing between pending events.
    type Event;

    /// Reset all mutable model state to its initial value.
    ///
    /// Called by [`Simulator::run`] before seeding, so a model can be run
    /// repeatedly with identical results.
    fn reset(&mut self);

    /// Enqueue the model's starting events on a freshly reset simulator.
    fn starting_events(&mut self, sim: &mut Simulator<Self::Event>) -> SimResult<()>;

    /// Execute one transition.  `sim.time()` is the event's fire time;
    /// transitions run to completion synchronously and typically schedule
    /// the follow-up event before returning.
    fn on_event(
        &mut self,
        sim: &mut Simulator<Self::Event>,
        payload: Self::Event,
    ) -> SimResult<()>;
}
