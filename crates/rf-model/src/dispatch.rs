//! Dispatch policy: greedy earliest-forecast-completion routing.
//!
//! The same shape serves both directions of the cycle — choosing a terminal
//! for an empty train and choosing a port for a loaded one — parameterized
//! by the relevant travel-time and service-time vectors.

use rf_core::SimTime;

use crate::timeline::{Booking, TimelineSet};
use crate::{ModelError, ModelResult};

/// The outcome of one dispatch decision.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Dispatch {
    /// Index of the winning resource within its class.
    pub resource: usize,
    /// The travel component of the forecast — seconds until the train
    /// physically arrives.  The arrival event is scheduled with this, not
    /// with the full forecast (which also includes service time).
    pub travel_secs: f64,
    /// The slot committed on the winning resource's timeline.
    pub booking: Booking,
}

impl TimelineSet {
    /// Route a train ready at `now` to the resource minimizing forecast
    /// completion, and commit that forecast.
    ///
    /// For every candidate `i` the forecast is
    /// `max(timeline[i].last, now + travel_secs[i]) + service_secs[i]`.
    /// Ties break toward the lowest index (stable argmin).  The winning
    /// forecast is booked immediately — before the train physically arrives
    /// — so later dispatch decisions already see this train's slot.
    pub fn dispatch(
        &mut self,
        now: SimTime,
        travel_secs: &[f64],
        service_secs: &[f64],
    ) -> ModelResult<Dispatch> {
        let count = self.len();
        check_candidates("travel times", count, travel_secs.len())?;
        check_candidates("service times", count, service_secs.len())?;
        if count == 0 {
            return Err(ModelError::InvalidResourceIndex {
                what: "dispatch candidate",
                index: 0,
                count: 0,
            });
        }

        let mut winner = 0usize;
        let mut best = f64::INFINITY;
        for (i, (&travel, (&service, last))) in travel_secs
            .iter()
            .zip(service_secs.iter().zip(self.lasts()))
            .enumerate()
        {
            let forecast = last.max(now + travel).secs() + service;
            // Strict `<` keeps the lowest index on ties.
            if forecast < best {
                best = forecast;
                winner = i;
            }
        }

        let booking = self.book(winner, now + travel_secs[winner], service_secs[winner])?;
        Ok(Dispatch {
            resource: winner,
            travel_secs: travel_secs[winner],
            booking,
        })
    }
}

fn check_candidates(what: &'static str, expected: usize, got: usize) -> ModelResult<()> {
    if expected != got {
        return Err(ModelError::CountMismatch {
            what,
            expected,
            got,
        });
    }
    Ok(())
}
