//! Validated scenario inputs.
//!
//! A `Scenario` holds the deterministic constants of one experiment: the
//! port × terminal distance matrix, per-resource service-time matrices, and
//! the per-class fleet vectors.  All dimension and value-domain checks
//! happen once in [`Scenario::new`]; everything downstream indexes the
//! tables unchecked on the validated ranges.

use rf_core::{Matrix, PortId, TerminalId, TrainClassId};

use crate::{ModelError, ModelResult};

/// Deterministic inputs for one simulation run.
#[derive(Clone, Debug)]
pub struct Scenario {
    /// Distance from each port to each terminal (port × terminal, ≥ 0).
    distances: Matrix,
    /// Unloading service time at each port per train class (port × class).
    unloading_times: Matrix,
    /// Loading service time at each terminal per train class (terminal × class).
    loading_times: Matrix,
    /// Number of trains of each class.
    train_counts: Vec<u32>,
    /// Travel speed of each class, distance units per second (> 0).
    train_speeds: Vec<f64>,
    /// Cargo mass carried by one train of each class (≥ 0).
    train_loads: Vec<f64>,
}

impl Scenario {
    /// Validate and assemble a scenario.
    ///
    /// Requires at least one port, one terminal, and one train class;
    /// matrix dimensions must agree with the per-class vectors; speeds must
    /// be strictly positive and all distances, service times, and loads
    /// non-negative.
    pub fn new(
        distances:       Matrix,
        unloading_times: Matrix,
        loading_times:   Matrix,
        train_counts:    Vec<u32>,
        train_speeds:    Vec<f64>,
        train_loads:     Vec<f64>,
    ) -> ModelResult<Self> {
        let ports = distances.rows();
        let terminals = distances.cols();
        let classes = train_counts.len();

        if ports == 0 || terminals == 0 {
            return Err(ModelError::Scenario(
                "distance matrix must have at least one port and one terminal".into(),
            ));
        }
        if classes == 0 {
            return Err(ModelError::Scenario(
                "at least one train class is required".into(),
            ));
        }

        check_len("train speeds", classes, train_speeds.len())?;
        check_len("train loads", classes, train_loads.len())?;
        check_len("unloading-time rows", ports, unloading_times.rows())?;
        check_len("unloading-time columns", classes, unloading_times.cols())?;
        check_len("loading-time rows", terminals, loading_times.rows())?;
        check_len("loading-time columns", classes, loading_times.cols())?;

        if train_speeds.iter().any(|&v| !(v > 0.0)) {
            return Err(ModelError::Scenario(
                "train speeds must be strictly positive".into(),
            ));
        }
        if train_loads.iter().any(|&v| !(v >= 0.0)) {
            return Err(ModelError::Scenario(
                "train loads must be non-negative".into(),
            ));
        }
        for (what, m) in [
            ("distances", &distances),
            ("unloading times", &unloading_times),
            ("loading times", &loading_times),
        ] {
            if m.iter().any(|v| !(v >= 0.0)) {
                return Err(ModelError::Scenario(format!("{what} must be non-negative")));
            }
        }

        Ok(Self {
            distances,
            unloading_times,
            loading_times,
            train_counts,
            train_speeds,
            train_loads,
        })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn port_count(&self) -> usize {
        self.distances.rows()
    }

    #[inline]
    pub fn terminal_count(&self) -> usize {
        self.distances.cols()
    }

    #[inline]
    pub fn class_count(&self) -> usize {
        self.train_counts.len()
    }

    /// Total trains across all classes.
    pub fn fleet_size(&self) -> u32 {
        self.train_counts.iter().sum()
    }

    // ── Table lookups ─────────────────────────────────────────────────────

    pub fn train_count(&self, class: TrainClassId) -> u32 {
        self.train_counts[class.index()]
    }

    pub fn train_speed(&self, class: TrainClassId) -> f64 {
        self.train_speeds[class.index()]
    }

    pub fn train_load(&self, class: TrainClassId) -> f64 {
        self.train_loads[class.index()]
    }

    pub fn distance(&self, port: PortId, terminal: TerminalId) -> f64 {
        self.distances.get(port.index(), terminal.index())
    }

    /// Seconds for `class` to travel between `port` and `terminal`.
    pub fn travel_time(&self, port: PortId, terminal: TerminalId, class: TrainClassId) -> f64 {
        self.distance(port, terminal) / self.train_speed(class)
    }

    pub fn loading_time(&self, terminal: TerminalId, class: TrainClassId) -> f64 {
        self.loading_times.get(terminal.index(), class.index())
    }

    pub fn unloading_time(&self, port: PortId, class: TrainClassId) -> f64 {
        self.unloading_times.get(port.index(), class.index())
    }
}

fn check_len(what: &'static str, expected: usize, got: usize) -> ModelResult<()> {
    if expected != got {
        return Err(ModelError::CountMismatch {
            what,
            expected,
            got,
        });
    }
    Ok(())
}
