use crucible_core::{Cell, CostGrid, GridError};

/// Read-only source of per-cell entry costs.
pub trait CostMap {
    /// `(rows, cols)` of the map.
    fn dimensions(&self) -> (usize, usize);

    /// Cost of entering `cell`. Fails with [`GridError::OutOfBounds`] if
    /// `cell` is outside the map.
    fn cost(&self, cell: Cell) -> Result<u32, GridError>;
}

impl CostMap for CostGrid {
    #[inline]
    fn dimensions(&self) -> (usize, usize) {
        CostGrid::dimensions(self)
    }

    #[inline]
    fn cost(&self, cell: Cell) -> Result<u32, GridError> {
        CostGrid::cost(self, cell)
    }
}

impl<M: CostMap + ?Sized> CostMap for &M {
    #[inline]
    fn dimensions(&self) -> (usize, usize) {
        (**self).dimensions()
    }

    #[inline]
    fn cost(&self, cell: Cell) -> Result<u32, GridError> {
        (**self).cost(cell)
    }
}
