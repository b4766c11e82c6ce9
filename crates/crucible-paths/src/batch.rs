//! Running several independent searches over one grid.

use std::time::Duration;

use crucible_core::{Cell, CostGrid, GridError};

use crate::error::SearchError;
use crate::limits::RunLimits;
use crate::pathfinder::Pathfinder;
use crate::traits::CostMap;

/// How [`min_costs`] schedules its searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Execution {
    /// One after another on the calling thread.
    Sequential,
    /// One scoped thread per configuration.
    #[default]
    Parallel,
}

/// Minimum top-left to bottom-right cost under each configuration in
/// `limits`. Results come back in the same order as `limits`.
///
/// Each search owns its own distance table; only `map` is shared, read-only.
pub fn min_costs<M: CostMap + Sync>(
    map: &M,
    limits: &[RunLimits],
    budget: Option<Duration>,
    exec: Execution,
) -> Vec<Result<u64, SearchError>> {
    let run = |l: RunLimits| {
        let mut pf = Pathfinder::new(l);
        if let Some(b) = budget {
            pf = pf.with_time_budget(b);
        }
        let (rows, cols) = map.dimensions();
        if rows == 0 || cols == 0 {
            return Err(SearchError::Grid(GridError::Empty));
        }
        pf.min_cost(map, Cell::ORIGIN, Cell::new(rows - 1, cols - 1))
    };

    match exec {
        Execution::Sequential => limits.iter().map(|&l| run(l)).collect(),
        Execution::Parallel => std::thread::scope(|s| {
            let handles: Vec<_> = limits
                .iter()
                .map(|&l| {
                    let run = &run;
                    s.spawn(move || run(l))
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
                .collect::<Vec<_>>()
        }),
    }
}

/// Both standard answers for `grid`: the ordinary crucible (`1:3`) and the
/// ultra crucible (`4:10`), searched in parallel.
pub fn solve(grid: &CostGrid) -> Result<(u64, u64), SearchError> {
    let (from, to) = (Cell::ORIGIN, grid.target());
    std::thread::scope(|s| {
        let ultra = s.spawn(|| Pathfinder::new(RunLimits::ULTRA).min_cost(grid, from, to));
        let crucible = Pathfinder::new(RunLimits::CRUCIBLE).min_cost(grid, from, to);
        let ultra = ultra
            .join()
            .unwrap_or_else(|e| std::panic::resume_unwind(e));
        Ok((crucible?, ultra?))
    })
}
