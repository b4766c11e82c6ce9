use crucible_core::{Cell, Direction};

use crate::limits::RunLimits;
use crate::state::State;

/// The two pseudo-sources at `start`: facing east and facing south, both
/// with a run of zero so the first move may go either way.
pub fn default_sources(start: Cell) -> [State; 2] {
    [
        State::source(start, Direction::East),
        State::source(start, Direction::South),
    ]
}

/// Append every legal successor of `state` into `buf`. The caller clears
/// `buf` before calling.
///
/// A successor either continues in `state.dir` (only while the run is below
/// `max_run`) or turns onto a perpendicular direction (only once the run has
/// reached `min_run`), restarting the run at 1. Reversing is never legal and
/// steps off a grid of `dims` are dropped.
pub fn successors(state: &State, limits: RunLimits, dims: (usize, usize), buf: &mut Vec<State>) {
    if state.run < limits.max_run() {
        if let Some(next) = state.cell.step(state.dir, dims) {
            buf.push(State::new(next, state.dir, state.run + 1));
        }
    }

    if state.run >= limits.min_run() {
        for dir in state.dir.turns() {
            if let Some(next) = state.cell.step(dir, dims) {
                buf.push(State::new(next, dir, 1));
            }
        }
    }
}
