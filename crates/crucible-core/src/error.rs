use std::fmt;

use crate::geom::Cell;

/// Errors raised while building or reading a [`CostGrid`](crate::CostGrid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The input contained no rows, or only empty rows.
    Empty,
    /// A row's length differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character in the text form is not a decimal digit.
    InvalidDigit { ch: char, row: usize, col: usize },
    /// A cell cost is below zero.
    NegativeCost { row: usize, col: usize, value: i64 },
    /// A cell cost does not fit the grid's cost type.
    CostOverflow { row: usize, col: usize, value: i64 },
    /// A lookup addressed a cell outside the grid.
    OutOfBounds {
        cell: Cell,
        rows: usize,
        cols: usize,
    },
}

impl GridError {
    /// Whether this error was raised while constructing a grid from
    /// malformed input, as opposed to an invalid lookup afterwards.
    pub fn is_malformed(&self) -> bool {
        !matches!(self, GridError::OutOfBounds { .. })
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no rows"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidDigit { ch, row, col } => write!(
                f,
                "grid: invalid digit \u{201c}{ch}\u{201d} at ({row}, {col})"
            ),
            Self::NegativeCost { row, col, value } => {
                write!(f, "grid: negative cost {value} at ({row}, {col})")
            }
            Self::CostOverflow { row, col, value } => {
                write!(f, "grid: cost {value} at ({row}, {col}) is too large")
            }
            Self::OutOfBounds { cell, rows, cols } => {
                write!(f, "grid: cell {cell} outside {rows}x{cols} grid")
            }
        }
    }
}

impl std::error::Error for GridError {}
