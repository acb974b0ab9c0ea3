use alloc::vec::Vec;
use ndarray::{ArrayD, IxDyn};

use super::*;

/// Generation strategy that can optionally try to make the starting cell zero or at least safe, but other than that is
/// purely random.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomLayoutGenerator {
    seed: u64,
    start: Coord,
    start_cell: StartCell,
}

impl RandomLayoutGenerator {
    pub fn new(seed: u64, start: Coord, start_cell: StartCell) -> Self {
        Self {
            seed,
            start,
            start_cell,
        }
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(self, config: &GameConfig) -> MineLayout {
        use StartCell::*;
        use rand::prelude::*;

        let total_cells = config.total_cells();

        // optimize for full boards
        if config.mines >= total_cells {
            if config.mines > total_cells {
                log::warn!(
                    "Mine layout already full, generated anyway, requested {} but only fits {}",
                    config.mines,
                    total_cells
                );
            }
            return MineLayout::from_mine_mask(ArrayD::from_elem(IxDyn(&config.shape), true));
        }

        // clipped start neighborhood, the start cell included
        let start_zone: Vec<Coord> = iter_neighbors(&self.start, &config.shape).collect();

        let actual_start_cell = match self.start_cell {
            Random => Random,
            SimpleSafe | AlwaysZero if config.mines + 1 > total_cells => {
                log::warn!("Cannot make start cell safe, fallback to random");
                Random
            }
            SimpleSafe => SimpleSafe,
            AlwaysZero if config.mines + start_zone.len() > total_cells => {
                log::warn!("Cannot make start cell zero, fallback to simple safe");
                SimpleSafe
            }
            AlwaysZero => AlwaysZero,
        };

        let mut mines: ArrayD<bool> = ArrayD::from_elem(IxDyn(&config.shape), false);
        let mut free_cells = match actual_start_cell {
            Random => total_cells,
            SimpleSafe => {
                mines[self.start.as_slice()] = true;
                total_cells - 1
            }
            AlwaysZero => {
                for coords in &start_zone {
                    mines[coords.as_slice()] = true;
                }
                total_cells - start_zone.len()
            }
        };
        let mut mines_placed = 0;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        {
            let cells = mines.as_slice_mut().expect("layout should be standard");
            while mines_placed < config.mines {
                if free_cells == 0 {
                    break;
                }
                let mut place = rng.random_range(0..free_cells);
                for (i, cell) in cells.iter_mut().enumerate() {
                    if *cell {
                        place += 1;
                    }
                    if i == place {
                        *cell = true;
                        mines_placed += 1;
                        free_cells -= 1;
                        break;
                    }
                }
            }
        }

        // undo to make safe cells
        match actual_start_cell {
            Random => {}
            SimpleSafe => {
                mines[self.start.as_slice()] = false;
            }
            AlwaysZero => {
                for coords in &start_zone {
                    mines[coords.as_slice()] = false;
                }
            }
        }

        // double check mine count
        let count = mines.iter().filter(|&&cell| cell).count();
        if count != config.mines {
            log::warn!(
                "Generated layout count mismatch, actual: {}, requested: {}",
                count,
                config.mines
            );
        }
        MineLayout::from_mine_mask(mines)
    }
}
