//! `rf-model` — the fleet domain model for the railflow simulator.
//!
//! A closed fleet of trains cycles between loading terminals and unloading
//! ports:
//!
//! ```text
//! travel empty → queue/load at terminal → travel loaded → queue/unload at port ─┐
//!      ▲                                                                        │
//!      └────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each transition consults the dispatch policy, which forecasts completion
//! times across all resources of a class, commits the winning forecast onto
//! that resource's [`ResourceTimeline`], and returns the chosen index.  The
//! committed forecast is authoritative: it rides inside the train context to
//! the arrival transition, which uses it for queue-wait accounting and for
//! scheduling the service-finished event.
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`scenario`] | validated model inputs (`Scenario`)                 |
//! | [`loader`]   | CSV scenario loading                                |
//! | [`timeline`] | `ResourceTimeline`, `Booking`, `TimelineSet`        |
//! | [`dispatch`] | earliest-forecast-completion routing                |
//! | [`fleet`]    | `FleetModel` — the train-flow state machine         |
//! | [`stats`]    | delivery / queue-wait statistics                    |
//! | [`error`]    | `ModelError`, `ModelResult`                         |

pub mod dispatch;
pub mod error;
pub mod fleet;
pub mod loader;
pub mod scenario;
pub mod stats;
pub mod timeline;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use dispatch::Dispatch;
pub use error::{ModelError, ModelResult};
pub use fleet::{FleetModel, Leg, TrainContext, TrainEvent};
pub use loader::{load_scenario_csv, load_scenario_readers};
pub use scenario::Scenario;
pub use stats::{DeliveryRecord, FleetStats, ProductivityPoint, QueueRecord};
pub use timeline::{Booking, ResourceTimeline, TimelineSet};
