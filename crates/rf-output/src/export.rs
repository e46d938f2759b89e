//! Bridge from `FleetStats` snapshots to output rows.

use rf_model::FleetStats;

use crate::row::{DeliveryRow, QueueWaitRow};
use crate::writer::OutputWriter;
use crate::OutputResult;

/// Write every record accumulated in `stats` through `writer` and finish it.
pub fn export_stats<W: OutputWriter>(writer: &mut W, stats: &FleetStats) -> OutputResult<()> {
    let deliveries: Vec<DeliveryRow> = stats
        .deliveries()
        .iter()
        .map(|r| DeliveryRow {
            time_secs: r.time.secs(),
            cargo: r.cargo,
        })
        .collect();
    if !deliveries.is_empty() {
        writer.write_deliveries(&deliveries)?;
    }

    let waits: Vec<QueueWaitRow> = stats
        .queue_waits()
        .iter()
        .map(|r| QueueWaitRow {
            time_secs: r.time.secs(),
            wait_secs: r.wait,
        })
        .collect();
    if !waits.is_empty() {
        writer.write_queue_waits(&waits)?;
    }

    writer.finish()
}
