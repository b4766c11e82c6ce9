use crucible_core::{Cell, Direction, GridError};

use crate::error::SearchError;
use crate::limits::RunLimits;
use crate::state::State;

/// Sentinel value meaning "not reached" in the dense distance table.
pub const UNREACHABLE: u64 = u64::MAX;

/// Counters collected while a search runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Entries pushed onto the open queue.
    pub pushed: usize,
    /// Entries popped from the open queue, stale ones included.
    pub popped: usize,
    /// Popped entries discarded because a cheaper cost was already known.
    pub stale: usize,
    /// States expanded with their final cost.
    pub settled: usize,
}

// ---------------------------------------------------------------------------
// Open-queue entry
// ---------------------------------------------------------------------------

/// Reference into the distance table, ordered by `cost` for use in
/// `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) cost: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest cost first.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// DistanceTable
// ---------------------------------------------------------------------------

/// Minimum accumulated cost for every state a search reached.
///
/// Laid out densely as `rows × cols × 4 × (run_cap + 1)`, where `run_cap` is
/// `max_run` clamped to the longest run the grid can hold; the extra run slot
/// holds the run-0 source states. Costs are accumulated as `u64` so that no
/// real total can collide with [`UNREACHABLE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    pub(crate) dist: Vec<u64>,
    rows: usize,
    cols: usize,
    run_cap: u32,
    limits: RunLimits,
    pub(crate) stats: SearchStats,
}

impl DistanceTable {
    pub(crate) fn new(dims: (usize, usize), limits: RunLimits) -> Result<Self, SearchError> {
        // A run never covers more cells than the longer grid side.
        let longest = u32::try_from(dims.0.max(dims.1)).unwrap_or(u32::MAX);
        let run_cap = limits.max_run().min(longest);
        let too_large = SearchError::TableTooLarge {
            rows: dims.0,
            cols: dims.1,
            max_run: limits.max_run(),
        };
        let len = dims
            .0
            .checked_mul(dims.1)
            .and_then(|n| n.checked_mul(Direction::ALL.len()))
            .and_then(|n| n.checked_mul(run_cap as usize + 1))
            .ok_or_else(|| too_large.clone())?;
        let mut dist = Vec::new();
        dist.try_reserve_exact(len).map_err(|_| too_large)?;
        dist.resize(len, UNREACHABLE);
        Ok(Self {
            dist,
            rows: dims.0,
            cols: dims.1,
            run_cap,
            limits,
            stats: SearchStats::default(),
        })
    }

    #[inline]
    fn run_slots(&self) -> usize {
        self.run_cap as usize + 1
    }

    /// Longest run the table stores: `max_run`, clamped to the longer grid
    /// side.
    #[inline]
    pub fn run_cap(&self) -> u32 {
        self.run_cap
    }

    /// `(rows, cols)` of the grid the table was built for.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The limits the table was built under.
    #[inline]
    pub fn limits(&self) -> RunLimits {
        self.limits
    }

    /// Counters from the search that filled this table.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Minimum cost to reach `state`, or `None` if it was never reached or
    /// cannot exist under this table's limits.
    pub fn get(&self, state: &State) -> Option<u64> {
        let i = self.idx(state)?;
        let d = self.dist[i];
        (d != UNREACHABLE).then_some(d)
    }

    /// Number of reached states.
    pub fn len(&self) -> usize {
        self.dist.iter().filter(|&&d| d != UNREACHABLE).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over every reached state and its cost, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (State, u64)> + '_ {
        self.dist
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d != UNREACHABLE)
            .map(|(i, &d)| (self.state(i), d))
    }

    /// Minimum cost of a terminal state at `target` under this table's own
    /// `min_run`. See [`extract_min`](crate::extract_min).
    pub fn min_cost_at(&self, target: Cell) -> Result<u64, SearchError> {
        crate::extract::extract_min(self, target, self.limits.min_run())
    }

    pub(crate) fn check_cell(&self, cell: Cell) -> Result<(), GridError> {
        if cell.within(self.dimensions()) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                cell,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    // -----------------------------------------------------------------------
    // Index helpers
    // -----------------------------------------------------------------------

    /// Convert a `State` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, s: &State) -> Option<usize> {
        if !s.cell.within(self.dimensions()) || s.run > self.run_cap {
            return None;
        }
        let cell = s.cell.row * self.cols + s.cell.col;
        let slots = self.run_slots();
        Some((cell * Direction::ALL.len() + s.dir.index()) * slots + s.run as usize)
    }

    /// Convert a flat index back to a `State`.
    #[inline]
    pub(crate) fn state(&self, idx: usize) -> State {
        let slots = self.run_slots();
        let run = (idx % slots) as u32;
        let rest = idx / slots;
        let dir = Direction::ALL[rest % Direction::ALL.len()];
        let cell = rest / Direction::ALL.len();
        State::new(Cell::new(cell / self.cols, cell % self.cols), dir, run)
    }
}
