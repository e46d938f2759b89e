//! Simulation time model.
//!
//! # Design
//!
//! Time is a continuous, monotonically non-decreasing quantity measured in
//! simulated seconds and stored as an `f64`.  Event fire times are derived
//! from travel times (`distance / speed`) and service durations, neither of
//! which quantizes to an integer grid, so a real-valued clock is the natural
//! representation.  There is no wall-clock mapping: simulated time is
//! abstract and advances only when the simulator pops an event.
//!
//! `SimTime` deliberately does not implement `Ord` — `f64` has no total
//! order.  The event calendar compares fire times with [`SimTime::total_cmp`]
//! where a total order is needed.

use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// An absolute instant of simulated time, in seconds from the run start.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    /// The run start — also the sentinel for "resource free from the start".
    pub const ZERO: SimTime = SimTime(0.0);

    /// Seconds since the run start.
    #[inline]
    pub fn secs(self) -> f64 {
        self.0
    }

    /// The later of two instants.
    #[inline]
    pub fn max(self, other: SimTime) -> SimTime {
        SimTime(self.0.max(other.0))
    }

    /// Total ordering over fire times (IEEE 754 `totalOrder`).
    ///
    /// All times produced by the simulator are finite; this exists so the
    /// calendar's sort invariant is well-defined even for pathological input.
    #[inline]
    pub fn total_cmp(&self, other: &SimTime) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }

    /// Break the instant into (day, hour, minute) components from run start.
    /// Useful for human-readable logging without a datetime library.
    pub fn dhm(self) -> (u64, u32, u32) {
        let total_secs = self.0.max(0.0) as u64;
        let days = total_secs / 86_400;
        let hours = ((total_secs % 86_400) / 3_600) as u32;
        let minutes = ((total_secs % 3_600) / 60) as u32;
        (days, hours, minutes)
    }
}

impl Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, secs: f64) -> SimTime {
        SimTime(self.0 + secs)
    }
}

impl AddAssign<f64> for SimTime {
    #[inline]
    fn add_assign(&mut self, secs: f64) {
        self.0 += secs;
    }
}

impl Sub for SimTime {
    /// Elapsed seconds between two instants (may be negative).
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (d, h, m) = self.dhm();
        write!(f, "day {d} {h:02}:{m:02}")
    }
}
