//! **crucible-core** — grid geometry and cost maps.
//!
//! This crate provides the foundational types shared by the *crucible*
//! workspace: cell coordinates, the four travel directions, and the
//! immutable per-cell [`CostGrid`] that searches read from.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::{Cell, Direction};
pub use grid::CostGrid;
