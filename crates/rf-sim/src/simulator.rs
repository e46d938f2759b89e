//! The `Simulator` struct and its event loop.

use rf_core::SimTime;

use crate::{EventCalendar, Model, SimError, SimObserver, SimResult};

/// Owns simulated time and the event calendar, and drives the event loop.
///
/// `time` is monotonically non-decreasing and always equals the fire time
/// of the most recently processed event (`SimTime::ZERO` before any).  The
/// calendar is owned exclusively; collaborators schedule through
/// [`Simulator::schedule`] only.
#[derive(Debug, Default)]
pub struct Simulator<E> {
    time: SimTime,
    calendar: EventCalendar<E>,
}

impl<E> Simulator<E> {
    pub fn new() -> Self {
        Self {
            time: SimTime::ZERO,
            calendar: EventCalendar::new(),
        }
    }

    /// Current simulated time.
    #[inline]
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Number of pending events.
    pub fn pending_events(&self) -> usize {
        self.calendar.len()
    }

    /// Schedule an event at `fire_time`.
    ///
    /// Fails with [`SimError::InvalidSchedule`] if `fire_time` is earlier
    /// than the current simulated time.  The train-flow model never
    /// schedules into the past; the guard exists to catch logic bugs in
    /// other models immediately instead of corrupting the timeline.
    pub fn schedule(&mut self, fire_time: SimTime, payload: E) -> SimResult<()> {
        if fire_time.total_cmp(&self.time).is_lt() {
            return Err(SimError::InvalidSchedule {
                fire_time,
                now: self.time,
            });
        }
        self.calendar.insert(fire_time, payload);
        Ok(())
    }

    /// Reset simulated time to zero and drop all pending events.
    ///
    /// [`run`][Self::run] calls this first, so a `Simulator` can be reused
    /// across independent runs with no state leaking between them.
    pub fn reset(&mut self) {
        self.time = SimTime::ZERO;
        self.calendar.clear();
    }

    /// Run `model` until the calendar empties or the next event would fire
    /// past `horizon`.
    ///
    /// Resets the simulator and the model, asks the model to enqueue its
    /// starting events, then pops events in `(fire_time, insertion order)`
    /// order, advancing `time` to each fire time before invoking the
    /// model's transition.  No event with `fire_time > horizon` is ever
    /// executed — events already in the calendar beyond the horizon are
    /// simply abandoned.
    pub fn run<M, O>(&mut self, model: &mut M, horizon: SimTime, observer: &mut O) -> SimResult<()>
    where
        M: Model<Event = E>,
        O: SimObserver<E>,
    {
        self.reset();
        model.reset();
        model.starting_events(self)?;
        observer.on_run_start();

        let mut processed: u64 = 0;
        while let Some(fire_time) = self.calendar.peek_time() {
            if fire_time.total_cmp(&horizon).is_gt() {
                break;
            }
            let event = self.calendar.remove_earliest()?;
            self.time = event.fire_time;
            observer.on_event(self.time, &event.payload);
            model.on_event(self, event.payload)?;
            processed += 1;
        }

        observer.on_run_end(self.time, processed);
        Ok(())
    }
}
