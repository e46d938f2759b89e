//! `rf-output` — statistics export for the railflow simulator.
//!
//! The simulation core only accumulates in-memory records (see
//! `rf_model::FleetStats`); this crate turns those snapshots into files for
//! the analysis/plotting collaborator.  One backend is provided:
//!
//! | Backend | Files created                          |
//! |---------|----------------------------------------|
//! | CSV     | `deliveries.csv`, `queue_waits.csv`    |
//!
//! # Usage
//!
//! ```rust,ignore
//! use rf_output::{CsvWriter, export_stats};
//!
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! export_stats(&mut writer, model.stats())?;
//! ```

pub mod csv;
pub mod error;
pub mod export;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use export::export_stats;
pub use row::{DeliveryRow, QueueWaitRow};
pub use writer::OutputWriter;
