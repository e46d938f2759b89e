//! The `OutputWriter` trait implemented by backend writers.

use crate::{DeliveryRow, OutputResult, QueueWaitRow};

/// Trait implemented by output backends.
pub trait OutputWriter {
    /// Write a batch of delivery rows.
    fn write_deliveries(&mut self, rows: &[DeliveryRow]) -> OutputResult<()>;

    /// Write a batch of queue-wait rows.
    fn write_queue_waits(&mut self, rows: &[QueueWaitRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
