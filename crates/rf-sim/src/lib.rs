//! `rf-sim` — the discrete-event core of the railflow simulator.
//!
//! # Event loop
//!
//! ```text
//! run(model, horizon, observer):
//!   ① Reset     — wipe the calendar, set time to zero, model.reset().
//!   ② Seed      — model.starting_events(sim) enqueues the initial events.
//!   ③ Loop      — while the calendar is non-empty and the earliest fire
//!                 time is ≤ horizon: pop it, advance time to it, and hand
//!                 the payload to model.on_event(sim, payload).
//! ```
//!
//! A single logical thread of control executes all transitions strictly in
//! fire-time order; two events with equal fire time execute in the order
//! they were scheduled (FIFO tie-break), so a run is fully reproducible.
//! Events left in the calendar past the horizon are abandoned, never
//! executed.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rf_sim::{NoopObserver, Simulator};
//!
//! let mut sim = Simulator::new();
//! sim.run(&mut model, SimTime(50.0 * 86_400.0), &mut NoopObserver)?;
//! ```

pub mod calendar;
pub mod error;
pub mod model;
pub mod observer;
pub mod simulator;


pub use calendar::{Event, EventCalendar};
pub use error::{SimError, SimResult};
pub use model::Model;
pub use observer::{NoopObserver, SimObserver};
pub use simulator::Simulator;
