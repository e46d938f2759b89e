//! Run statistics: delivery and queue-wait records.
//!
//! The model only *accumulates*; reductions (productivity, total queue
//! time) are computed on demand and nothing is persisted — exporting the
//! records is the analysis collaborator's job (see `rf-output`).

use rf_core::SimTime;

/// One completed loading: `cargo` mass delivered at `time`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DeliveryRecord {
    pub time:  SimTime,
    pub cargo: f64,
}

/// One queue observation: a train that arrived at `time` waited `wait`
/// seconds before its service began (zero when uncontended).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QueueRecord {
    pub time: SimTime,
    pub wait: f64,
}

/// A point of the cumulative productivity curve.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProductivityPoint {
    pub time: SimTime,
    /// Cumulative cargo delivered up to and including `time`.
    pub delivered: f64,
    /// `delivered / time` — mass per second averaged from the run start.
    pub rate: f64,
}

/// Statistics accumulated over one run, in event order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FleetStats {
    deliveries:  Vec<DeliveryRecord>,
    queue_waits: Vec<QueueRecord>,
}

impl FleetStats {
    pub fn record_delivery(&mut self, time: SimTime, cargo: f64) {
        self.deliveries.push(DeliveryRecord { time, cargo });
    }

    pub fn record_queue_wait(&mut self, time: SimTime, wait: f64) {
        self.queue_waits.push(QueueRecord { time, wait });
    }

    /// Forget everything.  Called by the model's `reset` between runs.
    pub fn clear(&mut self) {
        self.deliveries.clear();
        self.queue_waits.clear();
    }

    // ── Snapshots ─────────────────────────────────────────────────────────

    pub fn deliveries(&self) -> &[DeliveryRecord] {
        &self.deliveries
    }

    pub fn queue_waits(&self) -> &[QueueRecord] {
        &self.queue_waits
    }

    // ── Reductions ────────────────────────────────────────────────────────

    /// Total cargo delivered over the run.
    pub fn total_delivered(&self) -> f64 {
        self.deliveries.iter().map(|r| r.cargo).sum()
    }

    /// Sum of all recorded queue waits, in seconds.
    pub fn total_queue_wait(&self) -> f64 {
        self.queue_waits.iter().map(|r| r.wait).sum()
    }

    /// The cumulative productivity curve, one point per delivery.
    pub fn productivity_series(&self) -> Vec<ProductivityPoint> {
        let mut delivered = 0.0;
        self.deliveries
            .iter()
            .map(|r| {
                delivered += r.cargo;
                let elapsed = r.time.secs();
                ProductivityPoint {
                    time: r.time,
                    delivered,
                    rate: if elapsed > 0.0 { delivered / elapsed } else { 0.0 },
                }
            })
            .collect()
    }

    /// Productivity at the last delivery: cumulative mass over elapsed
    /// time.  Zero if nothing was delivered.
    pub fn final_productivity(&self) -> f64 {
        self.productivity_series()
            .last()
            .map(|p| p.rate)
            .unwrap_or(0.0)
    }
}
