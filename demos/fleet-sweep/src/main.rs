//! fleet-sweep — throughput vs fleet size for a single-lane rail scenario.
//!
//! One port and one terminal 320 km apart, trains at 40 km/h carrying
//! 5 000 t each, 8 h loading and 4 h unloading.  The sweep grows the fleet
//! one train at a time and compares the simulated productivity against the
//! analytic saturation curve `min(n, cycle/loading) × load / cycle`: once
//! the terminal is busy full-time, extra trains only add queue hours.
//!
//! Run with `--trace` for an event-by-event log of a two-day single-train
//! run instead of the sweep.

use std::path::Path;

use anyhow::Result;

use rf_core::{Matrix, SimTime};
use rf_model::{FleetModel, Scenario, TrainEvent};
use rf_output::{CsvWriter, export_stats};
use rf_sim::{NoopObserver, SimObserver, Simulator};

// ── Constants ─────────────────────────────────────────────────────────────────

const DISTANCE:       f64 = 320.0e3;      // m
const TRAIN_SPEED:    f64 = 40.0 / 3.6;   // m/s (40 km/h)
const UNLOADING_SECS: f64 = 4.0 * 3600.0;
const LOADING_SECS:   f64 = 8.0 * 3600.0;
const TRAIN_LOAD:     f64 = 5.0e6;        // kg
const MAX_TRAINS:     u32 = 8;
const HORIZON_SECS:   f64 = 50.0 * 24.0 * 3600.0;
const OUTPUT_DIR:     &str = "output";

// ── Observers ─────────────────────────────────────────────────────────────────

/// Prints every executed event — the event-by-event trace mode.
struct Tracer;

impl SimObserver<TrainEvent> for Tracer {
    fn on_event(&mut self, time: SimTime, payload: &TrainEvent) {
        println!("{time}  {payload}");
    }

    fn on_run_end(&mut self, final_time: SimTime, events_processed: u64) {
        println!("run ended at {final_time} after {events_processed} events");
    }
}

// ── Scenario ──────────────────────────────────────────────────────────────────

fn single_lane(trains: u32) -> Result<Scenario> {
    Ok(Scenario::new(
        Matrix::from_vec(1, 1, vec![DISTANCE])?,
        Matrix::from_vec(1, 1, vec![UNLOADING_SECS])?,
        Matrix::from_vec(1, 1, vec![LOADING_SECS])?,
        vec![trains],
        vec![TRAIN_SPEED],
        vec![TRAIN_LOAD],
    )?)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    if std::env::args().any(|a| a == "--trace") {
        return trace_run();
    }

    println!("=== fleet-sweep — railflow simulator ===");
    println!(
        "Lane: {:.0} km  |  Load {:.0} h / unload {:.0} h  |  Horizon: {:.0} days",
        DISTANCE / 1_000.0,
        LOADING_SECS / 3_600.0,
        UNLOADING_SECS / 3_600.0,
        HORIZON_SECS / 86_400.0
    );
    println!();

    let cycle_secs = LOADING_SECS + UNLOADING_SECS + 2.0 * DISTANCE / TRAIN_SPEED;
    // Fleet size at which the loading terminal saturates.
    let saturation = cycle_secs / LOADING_SECS;

    let mut summary = Vec::new();
    println!("{:>6}  {:>18}  {:>18}  {:>12}", "trains", "numerical (t/h)", "analytical (t/h)", "queue (h)");

    let mut last_model = None;
    for trains in 1..=MAX_TRAINS {
        let mut model = FleetModel::new(single_lane(trains)?);
        let mut sim = Simulator::new();
        sim.run(&mut model, SimTime(HORIZON_SECS), &mut NoopObserver)?;

        // kg/s → t/h.
        let numerical = model.stats().final_productivity() * 3.6;
        let analytical = (trains as f64).min(saturation) * TRAIN_LOAD / cycle_secs * 3.6;
        let queue_hours = model.stats().total_queue_wait() / 3_600.0;

        println!("{trains:>6}  {numerical:>18.0}  {analytical:>18.0}  {queue_hours:>12.1}");
        summary.push((trains, numerical, analytical, queue_hours));
        last_model = Some(model);
    }

    // Hand-off files for the plotting collaborator.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    write_summary(Path::new(OUTPUT_DIR), &summary)?;
    if let Some(model) = last_model {
        let mut writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
        export_stats(&mut writer, model.stats())?;
    }
    println!();
    println!("wrote {OUTPUT_DIR}/sweep_summary.csv plus the {MAX_TRAINS}-train run's records");

    Ok(())
}

fn write_summary(dir: &Path, summary: &[(u32, f64, f64, f64)]) -> Result<()> {
    let mut writer = csv::Writer::from_path(dir.join("sweep_summary.csv"))?;
    writer.write_record(["trains", "numerical_t_per_h", "analytical_t_per_h", "queue_hours"])?;
    for (trains, numerical, analytical, queue_hours) in summary {
        writer.write_record(&[
            trains.to_string(),
            format!("{numerical:.3}"),
            format!("{analytical:.3}"),
            format!("{queue_hours:.3}"),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn trace_run() -> Result<()> {
    let mut model = FleetModel::new(single_lane(1)?);
    let mut sim = Simulator::new();
    sim.run(&mut model, SimTime(2.0 * 86_400.0), &mut Tracer)?;
    Ok(())
}
