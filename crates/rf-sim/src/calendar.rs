//! `EventCalendar` — the time-ordered queue of pending events.
//!
//! # Why a sorted deque and not a heap
//!
//! The calendar must fire simultaneous events in the order they were
//! scheduled.  A plain binary heap does not keep that FIFO tie order (it
//! would need an explicit sequence counter as a secondary key), while a
//! deque kept sorted by insertion gets it for free: the splice index is
//! found with the boundary condition `existing.fire_time <= new.fire_time →
//! go right`, which places a new event *after* every event sharing its fire
//! time.  Insertion is O(log n) search + O(n) shift and removal is O(1) pop
//! from the front — fine at the event counts a closed fleet produces (one
//! pending event per train).

use std::collections::VecDeque;

use rf_core::SimTime;

use crate::{SimError, SimResult};

// ── Event ─────────────────────────────────────────────────────────────────────

/// A scheduled future invocation: a fire time plus an opaque payload.
///
/// Immutable once inserted; consumed exactly once when the simulator pops it.
#[derive(Clone, Debug, PartialEq)]
pub struct Event<E> {
    /// The simulated instant at which this event executes.
    pub fire_time: SimTime,
    /// Model-defined payload handed back to the model's transition.
    pub payload: E,
}

// ── EventCalendar ─────────────────────────────────────────────────────────────

/// An ordered collection of pending events, sorted ascending by
/// `(fire_time, insertion order)`.
///
/// Invariant: `calendar[i].fire_time <= calendar[i+1].fire_time` for all
/// valid `i`, and equal fire times keep insertion order.
#[derive(Clone, Debug, Default)]
pub struct EventCalendar<E> {
    events: VecDeque<Event<E>>,
}

impl<E> EventCalendar<E> {
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    /// Insert a new event, maintaining the sort invariant.
    ///
    /// The splice index is the first position whose fire time is strictly
    /// later than `fire_time`, so an event tying an existing one lands
    /// after it (stable FIFO).
    pub fn insert(&mut self, fire_time: SimTime, payload: E) {
        let at = self
            .events
            .partition_point(|ev| ev.fire_time.total_cmp(&fire_time).is_le());
        self.events.insert(at, Event { fire_time, payload });
    }

    /// Remove and return the event with the smallest `(fire_time,
    /// insertion order)`.
    ///
    /// Fails with [`SimError::EmptyCalendar`] if no events remain.
    pub fn remove_earliest(&mut self) -> SimResult<Event<E>> {
        self.events.pop_front().ok_or(SimError::EmptyCalendar)
    }

    /// Fire time of the earliest pending event, or `None` if empty.
    pub fn peek_time(&self) -> Option<SimTime> {
        self.events.front().map(|ev| ev.fire_time)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Drop all pending events.  Called between independent runs.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
