use serde::{Deserialize, Serialize};

/// Content of one board cell, fixed at initialization: a mine, or the
/// number of mines among its neighbors.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Mine,
    Clear(u32),
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn adjacent_mines(self) -> Option<u32> {
        match self {
            Self::Mine => None,
            Self::Clear(count) => Some(count),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Clear(0)
    }
}
