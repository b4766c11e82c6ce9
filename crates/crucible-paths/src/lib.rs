//! Shortest paths on cost grids with directional run-length limits.
//!
//! A route moves one cell at a time in the four cardinal directions and pays
//! the cost of every cell it enters. It may not go straight for more than
//! `max_run` cells, may not turn (or stop) before `min_run` cells, and may
//! never reverse. Because the legal moves out of a cell depend on how it was
//! entered, the search runs over augmented [`State`]s (cell, direction, run)
//! rather than over cells:
//!
//! - **Dijkstra** multi-source distance tables ([`Pathfinder::distance_map`])
//! - **Point-to-point** minimum cost with early exit ([`Pathfinder::min_cost`])
//! - **Terminal extraction** from a finished table ([`extract_min`])
//! - **Batch** runs over several configurations ([`min_costs`], [`solve`])
//!
//! # Example
//!
//! ```
//! use crucible_core::{Cell, CostGrid};
//! use crucible_paths::{Pathfinder, RunLimits};
//!
//! let grid: CostGrid = "1111\n9991\n9991".parse().unwrap();
//! let pf = Pathfinder::new(RunLimits::CRUCIBLE);
//! assert_eq!(pf.min_cost(&grid, Cell::ORIGIN, grid.target()), Ok(5));
//! ```

mod batch;
mod dijkstra;
mod error;
mod extract;
mod limits;
mod neighbors;
mod pathfinder;
mod state;
mod table;
mod traits;

pub use batch::{Execution, min_costs, solve};
pub use error::SearchError;
pub use extract::extract_min;
pub use limits::{ParseLimitsError, RunLimits};
pub use neighbors::{default_sources, successors};
pub use pathfinder::Pathfinder;
pub use state::State;
pub use table::{DistanceTable, SearchStats, UNREACHABLE};
pub use traits::CostMap;
