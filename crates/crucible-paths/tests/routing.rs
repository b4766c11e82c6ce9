use crucible_core::{Cell, CostGrid};
use crucible_paths::{
    Execution, Pathfinder, RunLimits, SearchError, default_sources, extract_min, min_costs, solve,
};

const EXAMPLE: &str = "\
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533
";

const LONG_CORRIDOR: &str = "\
111111111111
999999999991
999999999991
999999999991
999999999991
";

fn grid(s: &str) -> CostGrid {
    s.parse().unwrap()
}

fn uniform(rows: usize, cols: usize) -> CostGrid {
    CostGrid::from_rows((0..rows).map(|_| vec![1; cols])).unwrap()
}

fn route(g: &CostGrid, limits: RunLimits) -> Result<u64, SearchError> {
    Pathfinder::new(limits).min_cost(g, Cell::ORIGIN, g.target())
}

#[test]
fn example_grid_both_configurations() {
    let g = grid(EXAMPLE);
    assert_eq!(route(&g, RunLimits::CRUCIBLE), Ok(102));
    assert_eq!(route(&g, RunLimits::ULTRA), Ok(94));
    assert_eq!(solve(&g), Ok((102, 94)));
}

#[test]
fn ultra_must_not_stop_mid_run() {
    // The all-ones route along the top and down the right edge breaks the
    // run limits at both ends, so the route has to cut through the nines.
    let g = grid(LONG_CORRIDOR);
    assert_eq!(route(&g, RunLimits::ULTRA), Ok(71));
}

#[test]
fn full_table_agrees_with_early_exit() {
    let g = grid(EXAMPLE);
    for limits in [RunLimits::CRUCIBLE, RunLimits::ULTRA] {
        let pf = Pathfinder::new(limits);
        let table = pf
            .distance_map(&g, &default_sources(Cell::ORIGIN))
            .unwrap();
        let extracted = extract_min(&table, g.target(), limits.min_run()).unwrap();
        assert_eq!(table.min_cost_at(g.target()), Ok(extracted));
        assert_eq!(route(&g, limits), Ok(extracted));
    }
}

#[test]
fn uniform_grid_costs_manhattan_distance() {
    for (rows, cols) in [(1, 2), (2, 1), (2, 2), (3, 5), (6, 4), (7, 7), (1, 9)] {
        let g = uniform(rows, cols);
        let max_run = rows.max(cols) as u32;
        let limits = RunLimits::new(1, max_run).unwrap();
        assert_eq!(
            route(&g, limits),
            Ok((rows + cols - 2) as u64),
            "{rows}x{cols}"
        );
    }
}

#[test]
fn single_cell_grid_has_no_terminal_state() {
    let g = uniform(1, 1);
    let err = route(&g, RunLimits::CRUCIBLE).unwrap_err();
    assert_eq!(
        err,
        SearchError::Unreachable {
            target: Cell::ORIGIN
        }
    );
    assert!(err.is_unreachable());
}

#[test]
fn raising_a_cost_never_lowers_the_answer() {
    let g = grid(EXAMPLE);
    for limits in [RunLimits::CRUCIBLE, RunLimits::ULTRA] {
        let base = route(&g, limits).unwrap();
        for (cell, cost) in g.iter().step_by(7) {
            let heavier = g.with_cost(cell, cost + 5).unwrap();
            let got = route(&heavier, limits).unwrap();
            assert!(got >= base, "{cell}: {got} < {base}");
        }
    }
}

#[test]
fn lowering_a_cost_never_raises_the_answer() {
    let g = grid(EXAMPLE);
    let base = route(&g, RunLimits::CRUCIBLE).unwrap();
    for (cell, _) in g.iter().step_by(5) {
        let lighter = g.with_cost(cell, 0).unwrap();
        assert!(route(&lighter, RunLimits::CRUCIBLE).unwrap() <= base);
    }
}

#[test]
fn single_row_needs_a_long_enough_run() {
    for n in 2..=8usize {
        let row = uniform(1, n);
        let col = uniform(n, 1);
        for max_run in 1..=8u32 {
            let limits = RunLimits::new(1, max_run).unwrap();
            let reachable = max_run as usize >= n - 1;
            for g in [&row, &col] {
                let res = route(g, limits);
                if reachable {
                    assert_eq!(res, Ok((n - 1) as u64), "n={n} max_run={max_run}");
                } else {
                    assert!(
                        res.as_ref().is_err_and(SearchError::is_unreachable),
                        "n={n} max_run={max_run}: {res:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn single_row_also_needs_min_run() {
    // A four-cell run reaches the end of a 1x5 row; a 1x4 row ends mid-run.
    assert_eq!(route(&uniform(1, 5), RunLimits::ULTRA), Ok(4));
    assert!(
        route(&uniform(1, 4), RunLimits::ULTRA)
            .unwrap_err()
            .is_unreachable()
    );
    assert!(
        route(&uniform(4, 1), RunLimits::ULTRA)
            .unwrap_err()
            .is_unreachable()
    );
}

#[test]
fn narrow_grid_seeds_both_directions() {
    // Two rows are too few for a legal southward run under ultra limits,
    // so the route can never finish; five rows are enough.
    assert!(
        route(&uniform(2, 12), RunLimits::ULTRA)
            .unwrap_err()
            .is_unreachable()
    );
    assert_eq!(route(&uniform(5, 5), RunLimits::ULTRA), Ok(8));
    assert_eq!(route(&uniform(5, 12), RunLimits::ULTRA), Ok(15));
}

#[test]
fn repeated_searches_are_identical() {
    let g = grid(EXAMPLE);
    let pf = Pathfinder::new(RunLimits::ULTRA);
    let sources = default_sources(Cell::ORIGIN);
    let a = pf.distance_map(&g, &sources).unwrap();
    let b = pf.distance_map(&g, &sources).unwrap();
    assert_eq!(a.len(), b.len());
    assert!(a.iter().eq(b.iter()));
    assert_eq!(a, b);
}

#[test]
fn invalid_limits_fail_before_searching() {
    assert_eq!(
        RunLimits::new(4, 3),
        Err(SearchError::InvalidLimits {
            min_run: 4,
            max_run: 3
        })
    );
    assert!("10:4".parse::<RunLimits>().is_err());
}

#[test]
fn batch_runs_in_input_order() {
    let g = grid(EXAMPLE);
    let limits = [RunLimits::ULTRA, RunLimits::CRUCIBLE];
    for exec in [Execution::Sequential, Execution::Parallel] {
        assert_eq!(min_costs(&g, &limits, None, exec), vec![Ok(94), Ok(102)]);
    }
}

#[test]
fn totals_beyond_u32_are_exact() {
    let top = i64::from(u32::MAX);
    let pair = CostGrid::from_rows([vec![0, top]]).unwrap();
    assert_eq!(route(&pair, RunLimits::CRUCIBLE), Ok(u64::from(u32::MAX)));

    let triple = CostGrid::from_rows([vec![0, 3_000_000_000, 3_000_000_000]]).unwrap();
    assert_eq!(route(&triple, RunLimits::CRUCIBLE), Ok(6_000_000_000));
    assert_eq!(
        min_costs(&triple, &[RunLimits::CRUCIBLE], None, Execution::Parallel),
        vec![Ok(6_000_000_000)]
    );
}

#[test]
fn max_run_far_beyond_grid_size() {
    let g = grid("12\n34");
    let unbounded = RunLimits::new(1, u32::MAX).unwrap();
    // East then south: 2 + 4.
    assert_eq!(route(&g, unbounded), Ok(6));
    assert_eq!(route(&g, unbounded), route(&g, RunLimits::CRUCIBLE));

    let row = uniform(1, 40);
    assert_eq!(route(&row, unbounded), Ok(39));
    let table = Pathfinder::new(unbounded)
        .distance_map(&row, &default_sources(Cell::ORIGIN))
        .unwrap();
    assert_eq!(table.min_cost_at(row.target()), Ok(39));
}
