//! `rf-core` — foundational types for the `railflow` fleet simulator.
//!
//! This crate is a dependency of every other `rf-*` crate.  It intentionally
//! has no `rf-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                            |
//! |------------|-----------------------------------------------------|
//! | [`ids`]    | `PortId`, `TerminalId`, `TrainClassId`, `TrainId`   |
//! | [`time`]   | `SimTime` — continuous simulated seconds            |
//! | [`matrix`] | `Matrix` — dense row-major f64 tables               |
//! | [`error`]  | `CoreError`, `CoreResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod matrix;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{PortId, TerminalId, TrainClassId, TrainId};
pub use matrix::Matrix;
pub use time::SimTime;
