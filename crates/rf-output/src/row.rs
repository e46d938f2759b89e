//! Plain data row types written by output backends.

/// One completed loading, ready for export.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeliveryRow {
    /// Simulated seconds from the run start.
    pub time_secs: f64,
    /// Cargo mass delivered by this loading.
    pub cargo: f64,
}

/// One queue observation, ready for export.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueueWaitRow {
    /// Simulated seconds from the run start (the arrival instant).
    pub time_secs: f64,
    /// Seconds the train waited before its service began.
    pub wait_secs: f64,
}
