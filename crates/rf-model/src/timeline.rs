//! `ResourceTimeline` — the per-resource ledger of committed availability
//! instants.
//!
//! # One ledger, two readers
//!
//! The timeline serves both as the *forecast* ledger consulted by the
//! dispatch policy and as the *realized occupancy* ledger used for
//! queue-wait accounting.  This dual use is intentional: because every
//! booking appends `max(last, ready) + service`, dispatch decisions and
//! realized queueing are mutually consistent by construction — provided
//! bookings occur in the same order as the corresponding arrivals.  That
//! ordering holds in this model because travel and service times are
//! deterministic constants; under stochastic travel times a later-booked
//! train could overtake an earlier one and the single-ledger design would
//! no longer be sound.

use rf_core::SimTime;

use crate::{ModelError, ModelResult};

// ── Booking ───────────────────────────────────────────────────────────────────

/// The slot committed by one [`ResourceTimeline::book`] call.
///
/// `completion` is appended to the timeline before the booking is returned;
/// a later, matching arrival relies on these values as-is.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Booking {
    /// The last committed instant *before* this booking — the completion of
    /// the train ahead, or `SimTime::ZERO` if the resource was never booked.
    pub queue_ahead: SimTime,
    /// `max(queue_ahead, ready)` — when service actually begins.
    pub service_start: SimTime,
    /// `service_start + service` — when the resource becomes free again.
    pub completion: SimTime,
}

// ── ResourceTimeline ──────────────────────────────────────────────────────────

/// Append-only sequence of committed completion instants for one resource
/// (a specific port or terminal).
///
/// Starts with the `SimTime::ZERO` sentinel ("free from the start"); grows
/// only by [`book`][Self::book], never shrinks, and lives for the whole run
/// (reset via [`clear`][Self::clear] between runs).  As long as bookings
/// happen in true arrival order, the sequence is non-decreasing.
#[derive(Clone, Debug)]
pub struct ResourceTimeline {
    committed: Vec<SimTime>,
}

impl ResourceTimeline {
    pub fn new() -> Self {
        Self {
            committed: vec![SimTime::ZERO],
        }
    }

    /// The most recently committed completion instant.
    #[inline]
    pub fn last(&self) -> SimTime {
        // The zero sentinel is never removed, so the vec is never empty.
        self.committed.last().copied().unwrap_or(SimTime::ZERO)
    }

    /// Commit the slot `max(last, ready) + service` and return it.
    pub fn book(&mut self, ready: SimTime, service: f64) -> Booking {
        let queue_ahead = self.last();
        let service_start = queue_ahead.max(ready);
        let completion = service_start + service;
        self.committed.push(completion);
        Booking {
            queue_ahead,
            service_start,
            completion,
        }
    }

    /// Number of committed slots, excluding the zero sentinel.
    pub fn bookings(&self) -> usize {
        self.committed.len() - 1
    }

    /// All committed instants, sentinel first.
    pub fn committed(&self) -> &[SimTime] {
        &self.committed
    }

    /// Reset to the fresh state (sentinel only).
    pub fn clear(&mut self) {
        self.committed.clear();
        self.committed.push(SimTime::ZERO);
    }
}

impl Default for ResourceTimeline {
    fn default() -> Self {
        Self::new()
    }
}

// ── TimelineSet ───────────────────────────────────────────────────────────────

/// The timelines of all resources of one class (all ports, or all
/// terminals), with index-checked access.
#[derive(Clone, Debug)]
pub struct TimelineSet {
    what: &'static str,
    timelines: Vec<ResourceTimeline>,
}

impl TimelineSet {
    /// `what` names the resource class in errors ("port" / "terminal").
    pub fn new(what: &'static str, count: usize) -> Self {
        Self {
            what,
            timelines: vec![ResourceTimeline::new(); count],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.timelines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timelines.is_empty()
    }

    /// Last committed instant of resource `index`.
    pub fn last(&self, index: usize) -> ModelResult<SimTime> {
        Ok(self.get(index)?.last())
    }

    /// Book a slot on resource `index`.
    pub fn book(&mut self, index: usize, ready: SimTime, service: f64) -> ModelResult<Booking> {
        let what = self.what;
        let count = self.timelines.len();
        let timeline = self
            .timelines
            .get_mut(index)
            .ok_or(ModelError::InvalidResourceIndex { what, index, count })?;
        Ok(timeline.book(ready, service))
    }

    /// Read-only view of one timeline.
    pub fn get(&self, index: usize) -> ModelResult<&ResourceTimeline> {
        self.timelines
            .get(index)
            .ok_or(ModelError::InvalidResourceIndex {
                what: self.what,
                index,
                count: self.timelines.len(),
            })
    }

    /// Iterate the last committed instant of every resource, in index order.
    pub fn lasts(&self) -> impl Iterator<Item = SimTime> + '_ {
        self.timelines.iter().map(ResourceTimeline::last)
    }

    /// Reset every timeline to the fresh state.
    pub fn clear_all(&mut self) {
        for timeline in &mut self.timelines {
            timeline.clear();
        }
    }
}
