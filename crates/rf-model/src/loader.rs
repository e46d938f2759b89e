//! CSV scenario loader.
//!
//! A scenario is described by three files:
//!
//! ```csv
//! # train_classes.csv — one row per class, class_id contiguous from 0
//! class_id,count,speed,load
//! 0,3,11.111,5000000
//!
//! # distances.csv — one row per (port, terminal) pair, all pairs required
//! port_id,terminal_id,distance
//! 0,0,320000
//!
//! # service_times.csv — resource is "port" (unloading) or "terminal" (loading)
//! resource,resource_id,class_id,seconds
//! port,0,0,14400
//! terminal,0,0,28800
//! ```
//!
//! Port, terminal, and class counts are inferred from the largest indices
//! seen; a missing or duplicated cell is a [`ModelError::Parse`].  Units
//! are whatever the scenario uses consistently (the demo uses meters,
//! meters/second, seconds, and kilograms).

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use rf_core::Matrix;

use crate::{ModelError, ModelResult, Scenario};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ClassRecord {
    class_id: u16,
    count:    u32,
    speed:    f64,
    load:     f64,
}

#[derive(Deserialize)]
struct DistanceRecord {
    port_id:     u16,
    terminal_id: u16,
    distance:    f64,
}

#[derive(Deserialize)]
struct ServiceRecord {
    resource:    String,
    resource_id: u16,
    class_id:    u16,
    seconds:     f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a scenario from `train_classes.csv`, `distances.csv`, and
/// `service_times.csv` inside `dir`.
pub fn load_scenario_csv(dir: &Path) -> ModelResult<Scenario> {
    let classes = std::fs::File::open(dir.join("train_classes.csv"))?;
    let distances = std::fs::File::open(dir.join("distances.csv"))?;
    let services = std::fs::File::open(dir.join("service_times.csv"))?;
    load_scenario_readers(classes, distances, services)
}

/// Like [`load_scenario_csv`] but accepts any `Read` sources.
///
/// Useful for testing (pass `std::io::Cursor`s) or loading from embedded
/// strings.
pub fn load_scenario_readers<C, D, S>(
    classes: C,
    distances: D,
    service_times: S,
) -> ModelResult<Scenario>
where
    C: Read,
    D: Read,
    S: Read,
{
    // ── Train classes ─────────────────────────────────────────────────────
    let mut class_rows: Vec<ClassRecord> = Vec::new();
    for result in csv::Reader::from_reader(classes).deserialize::<ClassRecord>() {
        class_rows.push(result.map_err(parse_err)?);
    }
    if class_rows.is_empty() {
        return Err(ModelError::Parse("train_classes.csv has no rows".into()));
    }
    class_rows.sort_by_key(|r| r.class_id);
    for (i, row) in class_rows.iter().enumerate() {
        if row.class_id as usize != i {
            return Err(ModelError::Parse(format!(
                "class_id values must be contiguous from 0; found {} at position {i}",
                row.class_id
            )));
        }
    }
    let class_count = class_rows.len();
    let train_counts: Vec<u32> = class_rows.iter().map(|r| r.count).collect();
    let train_speeds: Vec<f64> = class_rows.iter().map(|r| r.speed).collect();
    let train_loads: Vec<f64> = class_rows.iter().map(|r| r.load).collect();

    // ── Distances ─────────────────────────────────────────────────────────
    let mut distance_rows: Vec<DistanceRecord> = Vec::new();
    for result in csv::Reader::from_reader(distances).deserialize::<DistanceRecord>() {
        distance_rows.push(result.map_err(parse_err)?);
    }
    if distance_rows.is_empty() {
        return Err(ModelError::Parse("distances.csv has no rows".into()));
    }
    let port_count = 1 + distance_rows.iter().map(|r| r.port_id as usize).max().unwrap_or(0);
    let terminal_count = 1
        + distance_rows
            .iter()
            .map(|r| r.terminal_id as usize)
            .max()
            .unwrap_or(0);

    let mut distance_matrix = CellTracker::new("distances.csv", port_count, terminal_count);
    for row in &distance_rows {
        distance_matrix.set(row.port_id as usize, row.terminal_id as usize, row.distance)?;
    }

    // ── Service times ─────────────────────────────────────────────────────
    let mut unloading = CellTracker::new("service_times.csv (port)", port_count, class_count);
    let mut loading = CellTracker::new("service_times.csv (terminal)", terminal_count, class_count);
    for result in csv::Reader::from_reader(service_times).deserialize::<ServiceRecord>() {
        let row = result.map_err(parse_err)?;
        let tracker = match row.resource.trim() {
            "port" => &mut unloading,
            "terminal" => &mut loading,
            other => {
                return Err(ModelError::Parse(format!(
                    "invalid resource {other:?}: expected \"port\" or \"terminal\""
                )));
            }
        };
        tracker.set(row.resource_id as usize, row.class_id as usize, row.seconds)?;
    }

    Scenario::new(
        distance_matrix.finish()?,
        unloading.finish()?,
        loading.finish()?,
        train_counts,
        train_speeds,
        train_loads,
    )
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// A matrix under construction that rejects duplicate and missing cells.
struct CellTracker {
    what:   &'static str,
    matrix: Matrix,
    seen:   Vec<bool>,
}

impl CellTracker {
    fn new(what: &'static str, rows: usize, cols: usize) -> Self {
        Self {
            what,
            matrix: Matrix::filled(rows, cols, 0.0),
            seen: vec![false; rows * cols],
        }
    }

    fn set(&mut self, row: usize, col: usize, value: f64) -> ModelResult<()> {
        if row >= self.matrix.rows() || col >= self.matrix.cols() {
            return Err(ModelError::Parse(format!(
                "{}: cell ({row}, {col}) outside the inferred {}×{} table",
                self.what,
                self.matrix.rows(),
                self.matrix.cols()
            )));
        }
        let flat = row * self.matrix.cols() + col;
        if self.seen[flat] {
            return Err(ModelError::Parse(format!(
                "{}: duplicate cell ({row}, {col})",
                self.what
            )));
        }
        self.seen[flat] = true;
        self.matrix.set(row, col, value);
        Ok(())
    }

    fn finish(self) -> ModelResult<Matrix> {
        if let Some(flat) = self.seen.iter().position(|&s| !s) {
            let cols = self.matrix.cols();
            return Err(ModelError::Parse(format!(
                "{}: missing cell ({}, {})",
                self.what,
                flat / cols,
                flat % cols
            )));
        }
        Ok(self.matrix)
    }
}

fn parse_err(err: csv::Error) -> ModelError {
    ModelError::Parse(err.to_string())
}
