//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `deliveries.csv`
//! - `queue_waits.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DeliveryRow, OutputResult, QueueWaitRow};

/// Writes simulation statistics to two CSV files.
pub struct CsvWriter {
    deliveries:  Writer<File>,
    queue_waits: Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut deliveries = Writer::from_path(dir.join("deliveries.csv"))?;
        deliveries.write_record(["time_secs", "cargo"])?;

        let mut queue_waits = Writer::from_path(dir.join("queue_waits.csv"))?;
        queue_waits.write_record(["time_secs", "wait_secs"])?;

        Ok(Self {
            deliveries,
            queue_waits,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_deliveries(&mut self, rows: &[DeliveryRow]) -> OutputResult<()> {
        for row in rows {
            self.deliveries
                .write_record(&[row.time_secs.to_string(), row.cargo.to_string()])?;
        }
        Ok(())
    }

    fn write_queue_waits(&mut self, rows: &[QueueWaitRow]) -> OutputResult<()> {
        for row in rows {
            self.queue_waits
                .write_record(&[row.time_secs.to_string(), row.wait_secs.to_string()])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.deliveries.flush()?;
        self.queue_waits.flush()?;
        Ok(())
    }
}
