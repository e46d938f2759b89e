//! Unit and scenario tests for rf-model.

use std::io::Cursor;

use rf_core::{Matrix, SimTime, TerminalId, TrainClassId};
use rf_sim::{Model, NoopObserver, Simulator};

use crate::{
    FleetModel, Leg, ModelError, Scenario, TimelineSet, load_scenario_readers,
    timeline::ResourceTimeline,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// 320 km single lane, 40 km/h, 4 h unloading, 8 h loading, 5 kt load.
///
/// Uncontended cycle time: 28 800 (load) + 14 400 (unload) + 2 × 28 800
/// (travel) = 100 800 s, with the first loading completing at 57 600 s.
fn single_lane_scenario(trains: u32) -> Scenario {
    Scenario::new(
        Matrix::from_vec(1, 1, vec![320_000.0]).unwrap(),
        Matrix::from_vec(1, 1, vec![14_400.0]).unwrap(),
        Matrix::from_vec(1, 1, vec![28_800.0]).unwrap(),
        vec![trains],
        vec![40.0 / 3.6], // m/s
        vec![5.0e6],      // kg
    )
    .unwrap()
}

fn assert_close(got: f64, want: f64) {
    assert!(
        (got - want).abs() < 1e-6,
        "expected ≈{want}, got {got}"
    );
}

// ── Scenario validation ───────────────────────────────────────────────────────

mod scenario_tests {
    use super::*;

    #[test]
    fn accepts_a_consistent_scenario() {
        let s = single_lane_scenario(3);
        assert_eq!(s.port_count(), 1);
        assert_eq!(s.terminal_count(), 1);
        assert_eq!(s.class_count(), 1);
        assert_eq!(s.fleet_size(), 3);
    }

    #[test]
    fn travel_time_is_distance_over_speed() {
        let s = single_lane_scenario(1);
        let t = s.travel_time(rf_core::PortId(0), TerminalId(0), TrainClassId(0));
        assert_close(t, 28_800.0);
    }

    #[test]
    fn mismatched_service_matrix_errors() {
        let err = Scenario::new(
            Matrix::from_vec(1, 1, vec![320_000.0]).unwrap(),
            Matrix::from_vec(2, 1, vec![14_400.0, 14_400.0]).unwrap(), // 2 ports ≠ 1
            Matrix::from_vec(1, 1, vec![28_800.0]).unwrap(),
            vec![1],
            vec![10.0],
            vec![1.0],
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::CountMismatch { what: "unloading-time rows", .. }));
    }

    #[test]
    fn zero_speed_errors() {
        let err = Scenario::new(
            Matrix::from_vec(1, 1, vec![320_000.0]).unwrap(),
            Matrix::from_vec(1, 1, vec![14_400.0]).unwrap(),
            Matrix::from_vec(1, 1, vec![28_800.0]).unwrap(),
            vec![1],
            vec![0.0],
            vec![1.0],
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::Scenario(_)));
    }

    #[test]
    fn speed_and_load_vectors_must_match_class_count() {
        let err = Scenario::new(
            Matrix::from_vec(1, 1, vec![320_000.0]).unwrap(),
            Matrix::from_vec(1, 1, vec![14_400.0]).unwrap(),
            Matrix::from_vec(1, 1, vec![28_800.0]).unwrap(),
            vec![1],
            vec![10.0, 20.0],
            vec![1.0],
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::CountMismatch { what: "train speeds", .. }));
    }
}

// ── Resource timelines ────────────────────────────────────────────────────────

mod timeline_tests {
    use super::*;

    #[test]
    fn starts_free_from_time_zero() {
        let t = ResourceTimeline::new();
        assert_eq!(t.last(), SimTime::ZERO);
        assert_eq!(t.bookings(), 0);
    }

    #[test]
    fn book_commits_max_of_last_and_ready_plus_service() {
        let mut t = ResourceTimeline::new();

        let b = t.book(SimTime(5.0), 10.0);
        assert_eq!(b.queue_ahead, SimTime::ZERO);
        assert_eq!(b.service_start, SimTime(5.0));
        assert_eq!(b.completion, SimTime(15.0));
        assert_eq!(t.last(), SimTime(15.0));

        // A train ready before the resource frees up queues behind it.
        let b = t.book(SimTime(3.0), 2.0);
        assert_eq!(b.queue_ahead, SimTime(15.0));
        assert_eq!(b.service_start, SimTime(15.0));
        assert_eq!(b.completion, SimTime(17.0));
    }

    #[test]
    fn committed_sequence_is_nondecreasing_for_inorder_bookings() {
        let mut t = ResourceTimeline::new();
        for (ready, service) in [(1.0, 4.0), (2.0, 1.0), (9.0, 3.0), (9.5, 0.5)] {
            t.book(SimTime(ready), service);
        }
        for pair in t.committed().windows(2) {
            assert!(pair[1].secs() >= pair[0].secs());
        }
    }

    #[test]
    fn clear_restores_the_sentinel() {
        let mut t = ResourceTimeline::new();
        t.book(SimTime(1.0), 1.0);
        t.clear();
        assert_eq!(t.last(), SimTime::ZERO);
        assert_eq!(t.bookings(), 0);
    }

    #[test]
    fn set_rejects_out_of_range_indices() {
        let mut set = TimelineSet::new("terminal", 2);
        assert!(set.last(1).is_ok());
        let err = set.book(2, SimTime::ZERO, 1.0).unwrap_err();
        assert!(matches!(
            err,
            ModelError::InvalidResourceIndex { what: "terminal", index: 2, count: 2 }
        ));
    }
}

// ── Dispatch policy ───────────────────────────────────────────────────────────

mod dispatch_tests {
    use super::*;

    #[test]
    fn picks_the_earliest_forecast_completion() {
        let mut set = TimelineSet::new("terminal", 3);
        // Same service everywhere; the closest resource wins.
        let d = set
            .dispatch(SimTime::ZERO, &[30.0, 10.0, 20.0], &[5.0, 5.0, 5.0])
            .unwrap();
        assert_eq!(d.resource, 1);
        assert_eq!(d.travel_secs, 10.0);
        assert_eq!(d.booking.completion, SimTime(15.0));
        // The forecast was committed on the winner only.
        assert_eq!(set.last(1).unwrap(), SimTime(15.0));
        assert_eq!(set.last(0).unwrap(), SimTime::ZERO);
    }

    #[test]
    fn ties_break_toward_the_lowest_index() {
        let mut set = TimelineSet::new("terminal", 3);
        let d = set
            .dispatch(SimTime::ZERO, &[10.0, 10.0, 10.0], &[5.0, 5.0, 5.0])
            .unwrap();
        assert_eq!(d.resource, 0);
    }

    #[test]
    fn committed_slots_spread_symmetric_load() {
        // Three identical resources: successive dispatches see the earlier
        // commitments and rotate through the set.
        let mut set = TimelineSet::new("port", 3);
        let travel = [10.0, 10.0, 10.0];
        let service = [5.0, 5.0, 5.0];
        let picks: Vec<usize> = (0..4)
            .map(|_| set.dispatch(SimTime::ZERO, &travel, &service).unwrap().resource)
            .collect();
        assert_eq!(picks, vec![0, 1, 2, 0]);
    }

    #[test]
    fn candidate_vector_lengths_must_match() {
        let mut set = TimelineSet::new("port", 2);
        let err = set.dispatch(SimTime::ZERO, &[1.0], &[1.0, 1.0]).unwrap_err();
        assert!(matches!(err, ModelError::CountMismatch { what: "travel times", .. }));
    }
}

// ── Train flow ────────────────────────────────────────────────────────────────

mod fleet_tests {
    use super::*;

    #[test]
    fn single_train_cycle_matches_the_analytic_times() {
        let mut model = FleetModel::new(single_lane_scenario(1));
        let mut sim = Simulator::new();
        sim.run(&mut model, SimTime(200_000.0), &mut NoopObserver).unwrap();

        // Deliveries at 57 600 s and 57 600 + 100 800 s.
        let deliveries = model.stats().deliveries();
        assert_eq!(deliveries.len(), 2);
        assert_close(deliveries[0].time.secs(), 57_600.0);
        assert_close(deliveries[1].time.secs() - deliveries[0].time.secs(), 100_800.0);
        assert_eq!(deliveries[0].cargo, 5.0e6);

        // No contention: every recorded queue wait is zero.
        assert!(model.stats().queue_waits().iter().all(|r| r.wait == 0.0));
        assert_close(model.stats().total_queue_wait(), 0.0);
    }

    #[test]
    fn second_train_queues_behind_the_first() {
        let mut model = FleetModel::new(single_lane_scenario(2));
        let mut sim = Simulator::new();
        sim.run(&mut model, SimTime(100_000.0), &mut NoopObserver).unwrap();

        // Both trains reach the single terminal at 28 800 s.  The first
        // loads until 57 600 s; the second waits exactly that overlap.
        let waits: Vec<f64> = model
            .stats()
            .queue_waits()
            .iter()
            .take(2)
            .map(|r| r.wait)
            .collect();
        assert_eq!(waits[0], 0.0);
        assert_close(waits[1], 28_800.0);
        assert!(model.stats().total_queue_wait() > 0.0);
    }

    #[test]
    fn conservation_one_load_per_cycle_per_train() {
        let mut model = FleetModel::new(single_lane_scenario(1));
        let mut sim = Simulator::new();
        let horizon = SimTime(1_000_000.0);
        sim.run(&mut model, horizon, &mut NoopObserver).unwrap();

        // Deliveries land at 57 600 + k × 100 800 ≤ horizon → k = 0..=9.
        let deliveries = model.stats().deliveries();
        assert_eq!(deliveries.len(), 10);
        assert_close(model.stats().total_delivered(), 10.0 * 5.0e6);
        for pair in deliveries.windows(2) {
            assert_close(pair[1].time - pair[0].time, 100_800.0);
        }
    }

    #[test]
    fn rerun_reproduces_identical_statistics() {
        let mut model = FleetModel::new(single_lane_scenario(4));
        let mut sim = Simulator::new();
        sim.run(&mut model, SimTime(500_000.0), &mut NoopObserver).unwrap();
        let first = model.stats().clone();
        assert!(!first.deliveries().is_empty());

        sim.run(&mut model, SimTime(500_000.0), &mut NoopObserver).unwrap();
        assert_eq!(*model.stats(), first);
    }

    #[test]
    fn empty_fleet_terminates_with_no_events() {
        let mut model = FleetModel::new(single_lane_scenario(0));
        let mut sim = Simulator::new();
        sim.run(&mut model, SimTime(100_000.0), &mut NoopObserver).unwrap();
        assert_eq!(sim.time(), SimTime::ZERO);
        assert!(model.stats().deliveries().is_empty());
    }

    #[test]
    fn dispatch_routes_around_a_congested_terminal() {
        // One port, two terminals, terminal 1 twice as far (travel 25 600 s
        // vs 51 200 s, loading 28 800 s everywhere).  Forecast completions:
        //   train 1: 54 400 vs 80 000  → terminal 0
        //   train 2: 83 200 vs 80 000  → terminal 1 (0 is now backed up)
        //   train 3: 83 200 vs 108 800 → terminal 0
        // Speed 12.5 m/s keeps every quotient exact in f64.
        let scenario = Scenario::new(
            Matrix::from_vec(1, 2, vec![320_000.0, 640_000.0]).unwrap(),
            Matrix::from_vec(1, 1, vec![14_400.0]).unwrap(),
            Matrix::from_vec(2, 1, vec![28_800.0, 28_800.0]).unwrap(),
            vec![3],
            vec![12.5],
            vec![5.0e6],
        )
        .unwrap();

        let mut model = FleetModel::new(scenario);
        let mut sim = Simulator::new();
        model.reset();
        model.starting_events(&mut sim).unwrap();

        assert_eq!(model.terminal_timelines().get(0).unwrap().bookings(), 2);
        assert_eq!(model.terminal_timelines().get(1).unwrap().bookings(), 1);
        assert_eq!(sim.pending_events(), 3);
    }

    #[test]
    fn train_events_render_a_readable_trace_line() {
        use crate::{Booking, TrainContext, TrainEvent};
        use rf_core::{PortId, TrainId};

        let event = TrainEvent {
            leg: Leg::ArriveAtTerminal,
            train: TrainContext {
                port:     PortId(0),
                terminal: TerminalId(2),
                class:    TrainClassId(0),
                id:       TrainId(7),
                slot: Booking {
                    queue_ahead:   SimTime::ZERO,
                    service_start: SimTime(10.0),
                    completion:    SimTime(20.0),
                },
            },
        };
        assert_eq!(event.to_string(), "train 7 arrived at terminal 2 to load");
    }
}

// ── Statistics ────────────────────────────────────────────────────────────────

mod stats_tests {
    use super::*;
    use crate::FleetStats;

    #[test]
    fn productivity_is_cumulative_mass_over_elapsed_time() {
        let mut stats = FleetStats::default();
        stats.record_delivery(SimTime(100.0), 50.0);
        stats.record_delivery(SimTime(200.0), 50.0);

        let series = stats.productivity_series();
        assert_eq!(series.len(), 2);
        assert_close(series[0].rate, 0.5);
        assert_close(series[1].rate, 0.5);
        assert_close(series[1].delivered, 100.0);
        assert_close(stats.final_productivity(), 0.5);
    }

    #[test]
    fn empty_stats_report_zero_productivity() {
        let stats = FleetStats::default();
        assert_eq!(stats.final_productivity(), 0.0);
        assert_eq!(stats.total_delivered(), 0.0);
    }

    #[test]
    fn clear_resets_everything() {
        let mut stats = FleetStats::default();
        stats.record_delivery(SimTime(1.0), 1.0);
        stats.record_queue_wait(SimTime(1.0), 2.0);
        stats.clear();
        assert!(stats.deliveries().is_empty());
        assert!(stats.queue_waits().is_empty());
        assert_eq!(stats.total_queue_wait(), 0.0);
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

mod loader_tests {
    use super::*;

    const CLASSES: &str = "\
class_id,count,speed,load\n\
0,3,11.111,5000000\n\
";

    const DISTANCES: &str = "\
port_id,terminal_id,distance\n\
0,0,320000\n\
0,1,450000\n\
";

    const SERVICES: &str = "\
resource,resource_id,class_id,seconds\n\
port,0,0,14400\n\
terminal,0,0,28800\n\
terminal,1,0,21600\n\
";

    fn load(classes: &str, distances: &str, services: &str) -> Result<Scenario, ModelError> {
        load_scenario_readers(Cursor::new(classes), Cursor::new(distances), Cursor::new(services))
    }

    #[test]
    fn loads_a_complete_scenario() {
        let s = load(CLASSES, DISTANCES, SERVICES).unwrap();
        assert_eq!(s.port_count(), 1);
        assert_eq!(s.terminal_count(), 2);
        assert_eq!(s.class_count(), 1);
        assert_eq!(s.train_count(TrainClassId(0)), 3);
        assert_eq!(s.distance(rf_core::PortId(0), TerminalId(1)), 450_000.0);
        assert_eq!(s.loading_time(TerminalId(1), TrainClassId(0)), 21_600.0);
        assert_eq!(s.unloading_time(rf_core::PortId(0), TrainClassId(0)), 14_400.0);
    }

    #[test]
    fn missing_service_cell_errors() {
        let services = "\
resource,resource_id,class_id,seconds\n\
port,0,0,14400\n\
terminal,0,0,28800\n\
";
        let err = load(CLASSES, DISTANCES, services).unwrap_err();
        assert!(matches!(err, ModelError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn duplicate_distance_cell_errors() {
        let distances = "\
port_id,terminal_id,distance\n\
0,0,320000\n\
0,0,450000\n\
";
        let services = "\
resource,resource_id,class_id,seconds\n\
port,0,0,14400\n\
terminal,0,0,28800\n\
";
        let err = load(CLASSES, distances, services).unwrap_err();
        assert!(matches!(err, ModelError::Parse(_)));
    }

    #[test]
    fn unknown_resource_kind_errors() {
        let services = "\
resource,resource_id,class_id,seconds\n\
dock,0,0,14400\n\
";
        let err = load(CLASSES, DISTANCES, services).unwrap_err();
        assert!(matches!(err, ModelError::Parse(_)));
    }

    #[test]
    fn non_contiguous_class_ids_error() {
        let classes = "\
class_id,count,speed,load\n\
0,3,11.111,5000000\n\
2,1,11.111,5000000\n\
";
        let err = load(classes, DISTANCES, SERVICES).unwrap_err();
        assert!(matches!(err, ModelError::Parse(_)));
    }
}
