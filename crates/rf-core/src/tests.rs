//! Unit tests for rf-core.

use crate::{CoreError, Matrix, PortId, SimTime, TerminalId, TrainId};

// ── IDs ───────────────────────────────────────────────────────────────────────

mod id_tests {
    use super::*;

    #[test]
    fn index_casts_to_usize() {
        assert_eq!(PortId(3).index(), 3);
        assert_eq!(TerminalId(0).index(), 0);
        assert_eq!(usize::from(TrainId(41)), 41);
    }

    #[test]
    fn display_names_the_type() {
        assert_eq!(PortId(2).to_string(), "PortId(2)");
        assert_eq!(TrainId(7).to_string(), "TrainId(7)");
    }

    #[test]
    fn ids_are_ordered_and_hashable() {
        use std::collections::HashSet;
        assert!(PortId(1) < PortId(2));
        let set: HashSet<TerminalId> = [TerminalId(0), TerminalId(0), TerminalId(1)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }
}

// ── SimTime ───────────────────────────────────────────────────────────────────

mod time_tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let t = SimTime::ZERO + 3_600.0;
        assert_eq!(t.secs(), 3_600.0);
        assert_eq!(t - SimTime::ZERO, 3_600.0);
        assert_eq!(SimTime(10.0) - SimTime(25.0), -15.0);
    }

    #[test]
    fn max_picks_the_later_instant() {
        assert_eq!(SimTime(5.0).max(SimTime(9.0)), SimTime(9.0));
        assert_eq!(SimTime(9.0).max(SimTime(5.0)), SimTime(9.0));
    }

    #[test]
    fn total_cmp_orders_times() {
        use std::cmp::Ordering;
        assert_eq!(SimTime(1.0).total_cmp(&SimTime(2.0)), Ordering::Less);
        assert_eq!(SimTime(2.0).total_cmp(&SimTime(2.0)), Ordering::Equal);
    }

    #[test]
    fn display_breaks_into_day_hour_minute() {
        // 1 day + 4 h + 30 min = 102_600 s
        let t = SimTime(102_600.0);
        assert_eq!(t.dhm(), (1, 4, 30));
        assert_eq!(t.to_string(), "day 1 04:30");
    }
}

// ── Matrix ────────────────────────────────────────────────────────────────────

mod matrix_tests {
    use super::*;

    #[test]
    fn from_vec_validates_length() {
        let err = Matrix::from_vec(2, 3, vec![0.0; 5]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Dimension { rows: 2, cols: 3, len: 5 }
        ));
    }

    #[test]
    fn row_major_indexing() {
        let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(0, 2), 3.0);
        assert_eq!(m.get(1, 1), 5.0);
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
        let col: Vec<f64> = m.iter_col(2).collect();
        assert_eq!(col, vec![3.0, 6.0]);
    }

    #[test]
    fn filled_and_set() {
        let mut m = Matrix::filled(2, 2, 7.0);
        assert!(m.iter().all(|v| v == 7.0));
        m.set(1, 0, 0.5);
        assert_eq!(m.get(1, 0), 0.5);
        assert_eq!(m.get(0, 0), 7.0);
    }
}
