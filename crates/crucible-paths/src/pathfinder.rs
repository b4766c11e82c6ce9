use std::time::Duration;

use crate::limits::RunLimits;

/// Constrained shortest-path search over a cost grid.
///
/// A `Pathfinder` is only configuration: each query allocates a fresh
/// [`DistanceTable`](crate::DistanceTable) that it hands back to the caller,
/// so one `Pathfinder` may serve any number of queries, from any number of
/// threads, without sharing search state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pathfinder {
    pub(crate) limits: RunLimits,
    pub(crate) budget: Option<Duration>,
}

impl Pathfinder {
    /// Create a pathfinder for the given run limits, with no time budget.
    pub fn new(limits: RunLimits) -> Self {
        Self {
            limits,
            budget: None,
        }
    }

    /// Abort searches that run longer than `budget` with
    /// [`SearchError::TimedOut`](crate::SearchError::TimedOut).
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.budget = Some(budget);
        self
    }

    #[inline]
    pub fn limits(&self) -> RunLimits {
        self.limits
    }

    #[inline]
    pub fn time_budget(&self) -> Option<Duration> {
        self.budget
    }
}
