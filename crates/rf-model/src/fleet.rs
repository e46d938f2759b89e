//! `FleetModel` — the per-train cyclic state machine.
//!
//! Every train repeats the same four-leg cycle forever; the run ends only
//! when the horizon cuts it off:
//!
//! ```text
//! ArriveAtTerminal → FinishLoading → ArriveAtPort → FinishUnloading → …
//! ```
//!
//! Each transition performs at most one dispatch (which appends to a
//! resource timeline), schedules exactly one follow-up event, and records
//! at most one statistic.  The train context is owned by the single
//! in-flight event of its train, so transitions can rewrite it freely and
//! move it into the next event.

use std::fmt;

use rf_core::{PortId, SimTime, TerminalId, TrainClassId, TrainId};
use rf_sim::{Model, SimError, SimResult, Simulator};

use crate::dispatch::Dispatch;
use crate::timeline::{Booking, TimelineSet};
use crate::{FleetStats, ModelResult, Scenario};

// ── Events ────────────────────────────────────────────────────────────────────

/// The four transitions of the train cycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Leg {
    /// Finished empty travel; queue and load at the target terminal.
    ArriveAtTerminal,
    /// Loading complete; cargo counts as delivered, head for a port.
    FinishLoading,
    /// Finished loaded travel; queue and unload at the target port.
    ArriveAtPort,
    /// Unloading complete; head for a terminal, closing the cycle.
    FinishUnloading,
}

/// Mutable per-train state threaded through the event chain.
///
/// Rewritten at each transition to reflect the train's next
/// origin/destination; `slot` is the booking committed by the most recent
/// dispatch and is consumed by the matching arrival transition.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrainContext {
    pub port:     PortId,
    pub terminal: TerminalId,
    pub class:    TrainClassId,
    pub id:       TrainId,
    pub slot:     Booking,
}

/// The event payload: which transition fires, for which train.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrainEvent {
    pub leg:   Leg,
    pub train: TrainContext,
}

impl fmt::Display for TrainEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = &self.train;
        match self.leg {
            Leg::ArriveAtTerminal => {
                write!(f, "train {} arrived at terminal {} to load", t.id.0, t.terminal.0)
            }
            Leg::FinishLoading => {
                write!(f, "train {} finished loading at terminal {}", t.id.0, t.terminal.0)
            }
            Leg::ArriveAtPort => {
                write!(f, "train {} arrived at port {} to unload", t.id.0, t.port.0)
            }
            Leg::FinishUnloading => {
                write!(f, "train {} finished unloading at port {}", t.id.0, t.port.0)
            }
        }
    }
}

// ── FleetModel ────────────────────────────────────────────────────────────────

/// Domain model implementing [`rf_sim::Model`].
///
/// Owns the scenario constants, one [`TimelineSet`] per resource class, and
/// the accumulated statistics.  Construct with a validated [`Scenario`];
/// all index arithmetic downstream stays within the validated ranges.
pub struct FleetModel {
    scenario:  Scenario,
    terminals: TimelineSet,
    ports:     TimelineSet,
    stats:     FleetStats,
}

impl FleetModel {
    pub fn new(scenario: Scenario) -> Self {
        let terminals = TimelineSet::new("terminal", scenario.terminal_count());
        let ports = TimelineSet::new("port", scenario.port_count());
        Self {
            scenario,
            terminals,
            ports,
            stats: FleetStats::default(),
        }
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// Statistics accumulated so far — a read-only snapshot for the
    /// analysis collaborator.
    pub fn stats(&self) -> &FleetStats {
        &self.stats
    }

    pub fn terminal_timelines(&self) -> &TimelineSet {
        &self.terminals
    }

    pub fn port_timelines(&self) -> &TimelineSet {
        &self.ports
    }

    // ── Dispatch wrappers ─────────────────────────────────────────────────

    /// Choose the terminal minimizing forecast loading completion for a
    /// train of `class` leaving `port` at `now`, and commit the slot.
    fn dispatch_to_terminal(
        &mut self,
        now: SimTime,
        port: PortId,
        class: TrainClassId,
    ) -> ModelResult<(TerminalId, Dispatch)> {
        let speed = self.scenario.train_speed(class);
        let travel: Vec<f64> = (0..self.scenario.terminal_count())
            .map(|t| self.scenario.distance(port, TerminalId(t as u16)) / speed)
            .collect();
        let service: Vec<f64> = (0..self.scenario.terminal_count())
            .map(|t| self.scenario.loading_time(TerminalId(t as u16), class))
            .collect();
        let dispatch = self.terminals.dispatch(now, &travel, &service)?;
        Ok((TerminalId(dispatch.resource as u16), dispatch))
    }

    /// Symmetric port choice for a loaded train leaving `terminal` at `now`.
    fn dispatch_to_port(
        &mut self,
        now: SimTime,
        terminal: TerminalId,
        class: TrainClassId,
    ) -> ModelResult<(PortId, Dispatch)> {
        let speed = self.scenario.train_speed(class);
        let travel: Vec<f64> = (0..self.scenario.port_count())
            .map(|p| self.scenario.distance(PortId(p as u16), terminal) / speed)
            .collect();
        let service: Vec<f64> = (0..self.scenario.port_count())
            .map(|p| self.scenario.unloading_time(PortId(p as u16), class))
            .collect();
        let dispatch = self.ports.dispatch(now, &travel, &service)?;
        Ok((PortId(dispatch.resource as u16), dispatch))
    }

    /// Record the queue wait implied by the train's committed slot.
    ///
    /// The wait is the overlap between this train's arrival and the
    /// completion of the train ahead of it: `max(0, queue_ahead − now)`.
    fn record_arrival(&mut self, now: SimTime, slot: &Booking, service: f64) {
        self.stats.record_queue_wait(now, (slot.queue_ahead - now).max(0.0));
        // The committed forecast and a recompute at arrival are built from
        // the same operands with the same operations, so they agree exactly.
        debug_assert_eq!(now.max(slot.queue_ahead) + service, slot.completion);
    }
}

impl Model for FleetModel {
    type Event = TrainEvent;

    fn reset(&mut self) {
        self.terminals.clear_all();
        self.ports.clear_all();
        self.stats.clear();
    }

    /// At time zero every train sits empty at port 0, is dispatched to a
    /// terminal, and schedules its first arrival.
    fn starting_events(&mut self, sim: &mut Simulator<TrainEvent>) -> SimResult<()> {
        let start_port = PortId(0);
        let mut next_id: u32 = 0;
        for c in 0..self.scenario.class_count() {
            let class = TrainClassId(c as u16);
            for _ in 0..self.scenario.train_count(class) {
                let now = sim.time();
                let (terminal, dispatch) = self
                    .dispatch_to_terminal(now, start_port, class)
                    .map_err(SimError::model)?;
                let train = TrainContext {
                    port: start_port,
                    terminal,
                    class,
                    id: TrainId(next_id),
                    slot: dispatch.booking,
                };
                sim.schedule(now + dispatch.travel_secs, TrainEvent {
                    leg: Leg::ArriveAtTerminal,
                    train,
                })?;
                next_id += 1;
            }
        }
        Ok(())
    }

    fn on_event(&mut self, sim: &mut Simulator<TrainEvent>, event: TrainEvent) -> SimResult<()> {
        let now = sim.time();
        let mut train = event.train;
        match event.leg {
            Leg::ArriveAtTerminal => {
                let service = self.scenario.loading_time(train.terminal, train.class);
                self.record_arrival(now, &train.slot, service);
                sim.schedule(train.slot.completion, TrainEvent {
                    leg: Leg::FinishLoading,
                    train,
                })?;
            }

            Leg::FinishLoading => {
                self.stats
                    .record_delivery(now, self.scenario.train_load(train.class));
                let (port, dispatch) = self
                    .dispatch_to_port(now, train.terminal, train.class)
                    .map_err(SimError::model)?;
                train.port = port;
                train.slot = dispatch.booking;
                sim.schedule(now + dispatch.travel_secs, TrainEvent {
                    leg: Leg::ArriveAtPort,
                    train,
                })?;
            }

            Leg::ArriveAtPort => {
                let service = self.scenario.unloading_time(train.port, train.class);
                self.record_arrival(now, &train.slot, service);
                sim.schedule(train.slot.completion, TrainEvent {
                    leg: Leg::FinishUnloading,
                    train,
                })?;
            }

            Leg::FinishUnloading => {
                let (terminal, dispatch) = self
                    .dispatch_to_terminal(now, train.port, train.class)
                    .map_err(SimError::model)?;
                train.terminal = terminal;
                train.slot = dispatch.booking;
                sim.schedule(now + dispatch.travel_secs, TrainEvent {
                    leg: Leg::ArriveAtTerminal,
                    train,
                })?;
            }
        }
        Ok(())
    }
}
