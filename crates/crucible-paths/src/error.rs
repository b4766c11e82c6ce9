use std::fmt;
use std::time::Duration;

use crucible_core::{Cell, GridError};

use crate::state::State;

/// Errors that can occur when configuring or running a constrained search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// `min_run` is zero or larger than `max_run`.
    InvalidLimits { min_run: u32, max_run: u32 },
    /// The search was given no source states.
    NoSources,
    /// A source state's run exceeds `max_run` or the longest run the grid
    /// can hold.
    InvalidSource(State),
    /// The dense distance table for this grid and these limits cannot be
    /// allocated.
    TableTooLarge {
        rows: usize,
        cols: usize,
        max_run: u32,
    },
    /// An accumulated cost no longer fits in a `u64`.
    TotalOverflow { state: State },
    /// A cell lookup failed. During a search this means an internal
    /// invariant was broken.
    Grid(GridError),
    /// The frontier emptied without reaching a terminal state at `target`.
    Unreachable { target: Cell },
    /// The distance table holds no terminal state at `target`.
    NoTerminalState { target: Cell },
    /// The search ran longer than its time budget.
    TimedOut { budget: Duration },
}

impl SearchError {
    /// Whether this error means "no valid route exists", whichever stage
    /// detected it.
    pub fn is_unreachable(&self) -> bool {
        matches!(
            self,
            SearchError::Unreachable { .. } | SearchError::NoTerminalState { .. }
        )
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLimits { min_run, max_run } => write!(
                f,
                "invalid run limits: need 1 <= min_run <= max_run, got ({min_run}, {max_run})"
            ),
            Self::NoSources => write!(f, "search needs at least one source state"),
            Self::InvalidSource(s) => write!(
                f,
                "source state at {} heading {} has run {} longer than allowed",
                s.cell, s.dir, s.run
            ),
            Self::TableTooLarge {
                rows,
                cols,
                max_run,
            } => write!(
                f,
                "distance table for a {rows}x{cols} grid with max_run {max_run} is too large"
            ),
            Self::TotalOverflow { state } => {
                write!(f, "accumulated cost overflows on reaching {state}")
            }
            Self::Grid(e) => write!(f, "{e}"),
            Self::Unreachable { target } => write!(f, "no valid route reaches {target}"),
            Self::NoTerminalState { target } => {
                write!(f, "no terminal state recorded at {target}")
            }
            Self::TimedOut { budget } => {
                write!(f, "search exceeded its time budget of {budget:?}")
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SearchError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
