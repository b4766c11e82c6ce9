use std::fmt;

use crucible_core::{Cell, Direction};

/// A search vertex: a cell together with how it was entered.
///
/// `run` counts the consecutive cells travelled in `dir` up to and including
/// `cell`. A run of `0` only ever appears on source states and means no
/// movement has happened yet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    pub cell: Cell,
    pub dir: Direction,
    pub run: u32,
}

impl State {
    #[inline]
    pub const fn new(cell: Cell, dir: Direction, run: u32) -> Self {
        Self { cell, dir, run }
    }

    /// A pseudo-source at `cell`, facing `dir` without having moved.
    #[inline]
    pub const fn source(cell: Cell, dir: Direction) -> Self {
        Self::new(cell, dir, 0)
    }

    #[inline]
    pub const fn is_source(&self) -> bool {
        self.run == 0
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}x{}", self.cell, self.dir, self.run)
    }
}
