//! The [`CostGrid`] type: an immutable rectangle of per-cell entry costs.
//!
//! A `CostGrid` owns its storage outright, so it is `Send + Sync` and can be
//! read by several searches at once. It is validated eagerly: every
//! constructor either returns a complete rectangular grid or an error.

use std::str::FromStr;

use crate::error::GridError;
use crate::geom::Cell;

/// A rectangular grid of non-negative traversal costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostGrid {
    costs: Vec<u32>,
    rows: usize,
    cols: usize,
}

impl CostGrid {
    /// Build a grid from rows of integer costs.
    ///
    /// Fails if there are no cells, if rows differ in length, or if any cost
    /// is negative or exceeds `u32::MAX`.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = i64>,
    {
        let mut costs = Vec::new();
        let mut width: Option<usize> = None;
        let mut height = 0;

        for (r, row) in rows.into_iter().enumerate() {
            let start = costs.len();
            for (c, value) in row.into_iter().enumerate() {
                if value < 0 {
                    return Err(GridError::NegativeCost {
                        row: r,
                        col: c,
                        value,
                    });
                }
                let cost = u32::try_from(value).map_err(|_| GridError::CostOverflow {
                    row: r,
                    col: c,
                    value,
                })?;
                costs.push(cost);
            }
            let found = costs.len() - start;
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::Ragged {
                        row: r,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let cols = width.unwrap_or(0);
        if cols == 0 || height == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            costs,
            rows: height,
            cols,
        })
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether `cell` is inside the grid.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.within(self.dimensions())
    }

    /// The bottom-right cell.
    #[inline]
    pub fn target(&self) -> Cell {
        Cell::new(self.rows - 1, self.cols - 1)
    }

    /// Cost of entering `cell`.
    pub fn cost(&self, cell: Cell) -> Result<u32, GridError> {
        self.index(cell)
            .map(|i| self.costs[i])
            .ok_or(GridError::OutOfBounds {
                cell,
                rows: self.rows,
                cols: self.cols,
            })
    }

    /// A copy of this grid with the cost at `cell` replaced.
    pub fn with_cost(&self, cell: Cell, cost: u32) -> Result<Self, GridError> {
        let i = self.index(cell).ok_or(GridError::OutOfBounds {
            cell,
            rows: self.rows,
            cols: self.cols,
        })?;
        let mut grid = self.clone();
        grid.costs[i] = cost;
        Ok(grid)
    }

    /// Row-major iterator over `(Cell, cost)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, u32)> + '_ {
        let cols = self.cols;
        self.costs
            .iter()
            .enumerate()
            .map(move |(i, &c)| (Cell::new(i / cols, i % cols), c))
    }

    #[inline]
    fn index(&self, cell: Cell) -> Option<usize> {
        self.contains(cell).then(|| cell.row * self.cols + cell.col)
    }
}

impl FromStr for CostGrid {
    type Err = GridError;

    /// Parse one row per line, one decimal digit per cell. Trailing blank
    /// lines are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().collect();
        let end = lines
            .iter()
            .rposition(|l| !l.trim().is_empty())
            .map_or(0, |i| i + 1);

        let mut rows = Vec::with_capacity(end);
        for (r, line) in lines[..end].iter().enumerate() {
            let row = line
                .trim_end()
                .chars()
                .enumerate()
                .map(|(c, ch)| {
                    ch.to_digit(10)
                        .map(i64::from)
                        .ok_or(GridError::InvalidDigit { ch, row: r, col: c })
                })
                .collect::<Result<Vec<i64>, _>>()?;
            rows.push(row);
        }
        Self::from_rows(rows)
    }
}
