use std::collections::BinaryHeap;
use std::time::Instant;

use crucible_core::Cell;

use crate::error::SearchError;
use crate::neighbors::{default_sources, successors};
use crate::pathfinder::Pathfinder;
use crate::state::State;
use crate::table::{DistanceTable, NodeRef, SearchStats, UNREACHABLE};
use crate::traits::CostMap;

/// How many pops pass between time-budget checks.
const BUDGET_CHECK_INTERVAL: usize = 1024;

impl Pathfinder {
    /// Compute a multi-source distance table over every reachable state.
    ///
    /// Every source starts at cost 0. Entering a cell costs that cell's
    /// value; the source cells themselves are free.
    pub fn distance_map<M: CostMap>(
        &self,
        map: &M,
        sources: &[State],
    ) -> Result<DistanceTable, SearchError> {
        let (table, _) = self.search(map, sources, None)?;
        Ok(table)
    }

    /// Minimum cost of a route from `from` to `to`.
    ///
    /// The route may leave `from` heading east or south and must arrive at
    /// `to` with a run of at least `min_run`. The search stops as soon as the
    /// first such arrival is settled.
    pub fn min_cost<M: CostMap>(&self, map: &M, from: Cell, to: Cell) -> Result<u64, SearchError> {
        map.cost(to)?;
        let (_, found) = self.search(map, &default_sources(from), Some(to))?;
        found.ok_or(SearchError::Unreachable { target: to })
    }

    /// Lazy-deletion Dijkstra over the implicit state graph.
    ///
    /// Instead of decreasing keys, a cheaper path pushes a second entry for
    /// the same state; the older entry is dropped when popped.
    fn search<M: CostMap>(
        &self,
        map: &M,
        sources: &[State],
        goal: Option<Cell>,
    ) -> Result<(DistanceTable, Option<u64>), SearchError> {
        if sources.is_empty() {
            return Err(SearchError::NoSources);
        }

        let limits = self.limits;
        let dims = map.dimensions();
        let mut table = DistanceTable::new(dims, limits)?;
        let mut stats = SearchStats::default();
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();

        log::debug!(
            "search {limits} on {}x{} grid from {} source(s)",
            dims.0,
            dims.1,
            sources.len()
        );

        // Seed sources.
        for src in sources {
            table.check_cell(src.cell)?;
            let Some(si) = table.idx(src) else {
                return Err(SearchError::InvalidSource(*src));
            };
            if table.dist[si] == 0 {
                continue;
            }
            log::trace!("seed {src}");
            table.dist[si] = 0;
            open.push(NodeRef { idx: si, cost: 0 });
            stats.pushed += 1;
        }

        let started = Instant::now();
        let mut found = None;
        let mut nbuf: Vec<State> = Vec::with_capacity(3);

        while let Some(current) = open.pop() {
            stats.popped += 1;
            if let Some(budget) = self.budget {
                if stats.popped % BUDGET_CHECK_INTERVAL == 0 && started.elapsed() > budget {
                    log::warn!(
                        "search {limits} gave up after {budget:?} with {} state(s) settled",
                        stats.settled
                    );
                    return Err(SearchError::TimedOut { budget });
                }
            }

            let ci = current.idx;
            if current.cost > table.dist[ci] {
                stats.stale += 1;
                continue;
            }
            stats.settled += 1;

            let cs = table.state(ci);
            if goal == Some(cs.cell) && cs.run >= limits.min_run() {
                found = Some(current.cost);
                break;
            }

            nbuf.clear();
            successors(&cs, limits, dims, &mut nbuf);

            for next in nbuf.iter() {
                let Some(ni) = table.idx(next) else {
                    continue;
                };
                let step = u64::from(map.cost(next.cell)?);
                let tentative = current
                    .cost
                    .checked_add(step)
                    .filter(|&c| c != UNREACHABLE)
                    .ok_or(SearchError::TotalOverflow { state: *next })?;
                if tentative >= table.dist[ni] {
                    continue;
                }
                table.dist[ni] = tentative;
                open.push(NodeRef {
                    idx: ni,
                    cost: tentative,
                });
                stats.pushed += 1;
            }
        }

        log::debug!(
            "search {limits} done in {:?}: {} settled, {} stale, {} pushed",
            started.elapsed(),
            stats.settled,
            stats.stale,
            stats.pushed
        );

        table.stats = stats;
        Ok((table, found))
    }
}
