#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::{ArrayD, IxDyn};
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid2d::*;
pub use render::*;
pub use tile::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod grid2d;
mod render;
mod tile;
mod types;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub shape: Shape,
    pub mines: CellCount,
}

impl GameConfig {
    pub fn new_unchecked(shape: Shape, mines: CellCount) -> Self {
        Self { shape, mines }
    }

    pub fn new(shape: &[Axis], mines: CellCount) -> Self {
        let shape: Shape = shape.iter().map(|&extent| extent.max(1)).collect();
        let mines = mines.clamp(1, total_cells(&shape));
        Self::new_unchecked(shape, mines)
    }

    pub fn total_cells(&self) -> CellCount {
        total_cells(&self.shape)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: ArrayD<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: ArrayD<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count();
        Self {
            mine_mask,
            mine_count,
        }
    }

    /// Builds a layout from explicit mine coordinates. Duplicate
    /// coordinates collapse into a single mine.
    pub fn from_mine_coords(shape: &[Axis], mine_coords: &[Coord]) -> Result<Self> {
        if shape.is_empty() || shape.contains(&0) {
            return Err(GameError::InvalidShape);
        }

        let mut mine_mask: ArrayD<bool> = ArrayD::from_elem(IxDyn(shape), false);

        for coords in mine_coords {
            if coords.len() != shape.len()
                || coords.iter().zip(shape).any(|(&coord, &extent)| coord >= extent)
            {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.as_slice()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            shape: Shape::from_slice(self.shape()),
            mines: self.mine_count,
        }
    }

    pub fn validate_coords(&self, coords: &[Axis]) -> Result<Coord> {
        let shape = self.shape();
        if coords.len() == shape.len()
            && coords.iter().zip(shape).all(|(&coord, &extent)| coord < extent)
        {
            Ok(Coord::from_slice(coords))
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn shape(&self) -> &[Axis] {
        self.mine_mask.shape()
    }

    pub fn ndim(&self) -> usize {
        self.mine_mask.ndim()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: &[Axis]) -> bool {
        self.mine_mask[coords]
    }

    /// Number of mines in the Moore neighborhood of `coords`, the cell
    /// itself excluded.
    pub fn adjacent_mine_count(&self, coords: &[Axis]) -> u32 {
        self.iter_neighbors(coords)
            .filter(|pos| pos.as_slice() != coords && self.mine_mask[pos.as_slice()])
            .count()
            .try_into()
            .unwrap()
    }

    pub(crate) fn iter_neighbors(&self, coords: &[Axis]) -> NeighborIter {
        iter_neighbors(coords, self.shape())
    }
}

impl Index<&[Axis]> for MineLayout {
    type Output = bool;

    fn index(&self, coords: &[Axis]) -> &Self::Output {
        &self.mine_mask[coords]
    }
}
