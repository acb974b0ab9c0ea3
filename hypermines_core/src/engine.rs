use alloc::collections::VecDeque;
use ndarray::{ArrayD, IxDyn};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameState {
    Ongoing,
    Victory,
    Defeat,
}

impl GameState {
    pub const fn is_ongoing(self) -> bool {
        matches!(self, Self::Ongoing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Victory | Self::Defeat)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Ongoing
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    layout: MineLayout,
    board: ArrayD<Cell>,
    visible: ArrayD<bool>,
    revealed_count: CellCount,
    state: GameState,
    triggered_mine: Option<Coord>,
}

impl Game {
    /// Precomputes the full cell board from the layout: mines stay mines,
    /// every safe cell gets its exact adjacent-mine count.
    pub fn new(layout: MineLayout) -> Self {
        let mut board = ArrayD::from_elem(IxDyn(layout.shape()), Cell::default());
        for coords in iter_coords(layout.shape()) {
            board[coords.as_slice()] = if layout.contains_mine(&coords) {
                Cell::Mine
            } else {
                Cell::Clear(layout.adjacent_mine_count(&coords))
            };
        }
        let visible = ArrayD::from_elem(IxDyn(layout.shape()), false);

        Self {
            layout,
            board,
            visible,
            revealed_count: 0,
            state: Default::default(),
            triggered_mine: None,
        }
    }

    pub fn from_mine_coords(shape: &[Axis], mine_coords: &[Coord]) -> Result<Self> {
        Ok(Self::new(MineLayout::from_mine_coords(shape, mine_coords)?))
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn shape(&self) -> &[Axis] {
        self.layout.shape()
    }

    pub fn ndim(&self) -> usize {
        self.layout.ndim()
    }

    pub fn total_mines(&self) -> CellCount {
        self.layout.mine_count()
    }

    /// Cells revealed so far, the triggering mine included after a defeat.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn triggered_mine(&self) -> Option<&Coord> {
        self.triggered_mine.as_ref()
    }

    pub fn has_mine_at(&self, coords: &[Axis]) -> bool {
        self.layout.contains_mine(coords)
    }

    /// Trusted-coordinate access, panics when out of bounds.
    pub fn cell_at(&self, coords: &[Axis]) -> Cell {
        self.board[coords]
    }

    pub fn is_visible(&self, coords: &[Axis]) -> bool {
        self.visible[coords]
    }

    pub fn board(&self) -> &ArrayD<Cell> {
        &self.board
    }

    pub fn visibility(&self) -> &ArrayD<bool> {
        &self.visible
    }

    /// Reveals the cell at `coords` and, through connected zero-count
    /// regions, its surroundings. Returns the number of cells newly
    /// revealed by this call. A finished game ignores the dig and reports
    /// zero, as does digging an already revealed cell.
    pub fn dig(&mut self, coords: &[Axis]) -> Result<CellCount> {
        let coords = self.layout.validate_coords(coords)?;

        if self.state.is_finished() {
            return Ok(0);
        }

        let revealed = if self.visible[coords.as_slice()] {
            0
        } else {
            match self.board[coords.as_slice()] {
                Cell::Mine => {
                    self.visible[coords.as_slice()] = true;
                    self.triggered_mine = Some(coords);
                    self.state = GameState::Defeat;
                    1
                }
                Cell::Clear(0) => self.reveal_region(coords),
                Cell::Clear(_) => {
                    self.visible[coords.as_slice()] = true;
                    1
                }
            }
        };
        self.revealed_count += revealed;

        // The victory scan runs once per dig call on every branch; a
        // visible mine always fails it, so a defeat is never overwritten.
        if self.is_won() {
            self.state = GameState::Victory;
        }

        Ok(revealed)
    }

    /// Worklist flood fill from a zero-count cell. The visibility array
    /// doubles as the visited set.
    fn reveal_region(&mut self, start: Coord) -> CellCount {
        self.visible[start.as_slice()] = true;
        let mut revealed = 1;

        let mut to_visit: VecDeque<Coord> = self
            .board
            .iter_neighbors(&start)
            .filter(|pos| !self.visible[pos.as_slice()])
            .collect();

        while let Some(visit_coords) = to_visit.pop_front() {
            if self.visible[visit_coords.as_slice()] {
                continue;
            }
            self.visible[visit_coords.as_slice()] = true;
            revealed += 1;

            if matches!(self.board[visit_coords.as_slice()], Cell::Clear(0)) {
                to_visit.extend(
                    self.board
                        .iter_neighbors(&visit_coords)
                        .filter(|pos| !self.visible[pos.as_slice()]),
                );
            }
        }

        revealed
    }

    /// Pure scan deciding whether every safe cell is revealed while every
    /// mine is still hidden. May be called any number of times.
    pub fn is_won(&self) -> bool {
        let mut visible_count: CellCount = 0;
        for (cell, &visible) in self.board.iter().zip(self.visible.iter()) {
            if visible {
                visible_count += 1;
            } else if !cell.is_mine() {
                return false;
            }
        }
        visible_count + self.layout.mine_count() == self.layout.total_cells()
    }
}
