use crucible_core::{Cell, Direction};

use crate::error::SearchError;
use crate::state::State;
use crate::table::DistanceTable;

/// Minimum cost over the states in `table` located at `target` whose run is
/// at least `min_run`.
///
/// Fails with [`SearchError::NoTerminalState`] if no such state was reached,
/// or with [`SearchError::Grid`] if `target` lies outside the table's grid.
pub fn extract_min(table: &DistanceTable, target: Cell, min_run: u32) -> Result<u64, SearchError> {
    table.check_cell(target)?;

    let run_cap = table.run_cap();
    Direction::ALL
        .into_iter()
        .flat_map(|dir| (min_run..=run_cap).map(move |run| State::new(target, dir, run)))
        .filter_map(|s| table.get(&s))
        .min()
        .ok_or(SearchError::NoTerminalState { target })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::RunLimits;

    fn table_with(entries: &[(State, u64)]) -> DistanceTable {
        let mut t = DistanceTable::new((8, 8), RunLimits::ULTRA).unwrap();
        for (s, d) in entries {
            let i = t.idx(s).unwrap();
            t.dist[i] = *d;
        }
        t
    }

    #[test]
    fn picks_cheapest_terminal_state() {
        let target = Cell::new(1, 1);
        let t = table_with(&[
            (State::new(target, Direction::East, 4), 30),
            (State::new(target, Direction::South, 7), 21),
            (State::new(target, Direction::South, 2), 5),
        ]);
        assert_eq!(extract_min(&t, target, 4), Ok(21));
        assert_eq!(extract_min(&t, target, 1), Ok(5));
        assert_eq!(t.min_cost_at(target), Ok(21));
    }

    #[test]
    fn short_runs_are_not_terminal() {
        let target = Cell::new(1, 1);
        let t = table_with(&[(State::new(target, Direction::East, 3), 8)]);
        assert_eq!(
            extract_min(&t, target, 4),
            Err(SearchError::NoTerminalState { target })
        );
    }

    #[test]
    fn sources_are_not_terminal() {
        let t = table_with(&[(State::source(Cell::ORIGIN, Direction::East), 0)]);
        let err = extract_min(&t, Cell::ORIGIN, 1).unwrap_err();
        assert!(err.is_unreachable());
    }

    #[test]
    fn target_outside_grid() {
        let t = table_with(&[]);
        assert!(matches!(
            extract_min(&t, Cell::new(9, 0), 1),
            Err(SearchError::Grid(_))
        ));
    }

    #[test]
    fn huge_max_run_scans_only_stored_runs() {
        let limits = RunLimits::new(1, u32::MAX).unwrap();
        let mut t = DistanceTable::new((2, 2), limits).unwrap();
        let s = State::new(Cell::new(1, 1), Direction::South, 1);
        let i = t.idx(&s).unwrap();
        t.dist[i] = 7;
        assert_eq!(extract_min(&t, Cell::new(1, 1), 1), Ok(7));
    }
}
