use core::fmt;

use ndarray::{ArrayD, IxDyn, Zip};
use serde::{Deserialize, Serialize};

use crate::*;

/// Display-ready projection of one cell: `_` hidden, `.` mine, a single
/// space for a zero count, the decimal count otherwise.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Symbol {
    Hidden,
    Mine,
    Empty,
    Count(u32),
}

impl Symbol {
    fn for_cell(cell: Cell) -> Self {
        match cell {
            Cell::Mine => Self::Mine,
            Cell::Clear(0) => Self::Empty,
            Cell::Clear(count) => Self::Count(count),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hidden => f.write_str("_"),
            Self::Mine => f.write_str("."),
            Self::Empty => f.write_str(" "),
            Self::Count(count) => write!(f, "{count}"),
        }
    }
}

impl Game {
    /// Projects board and visibility into a same-shaped symbol array.
    /// Pure; `all_visible` bypasses the visibility mask.
    pub fn render(&self, all_visible: bool) -> ArrayD<Symbol> {
        let mut symbols = ArrayD::from_elem(IxDyn(self.shape()), Symbol::Hidden);
        Zip::from(&mut symbols)
            .and(self.board())
            .and(self.visibility())
            .for_each(|symbol, &cell, &visible| {
                if all_visible || visible {
                    *symbol = Symbol::for_cell(cell);
                }
            });
        symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    fn flat(symbols: &ArrayD<Symbol>) -> String {
        symbols.iter().map(ToString::to_string).collect()
    }

    fn two_by_four() -> Game {
        let mines: Vec<Coord> = [[0, 0], [1, 0], [1, 1]]
            .iter()
            .map(|coords| Coord::from_slice(coords))
            .collect();
        Game::from_mine_coords(&[2, 4], &mines).unwrap()
    }

    #[test]
    fn fresh_games_render_fully_hidden() {
        assert_eq!(flat(&two_by_four().render(false)), "________");
    }

    #[test]
    fn all_visible_ignores_the_visibility_mask() {
        assert_eq!(flat(&two_by_four().render(true)), ".31 ..1 ");
    }

    #[test]
    fn render_tracks_revealed_cells_without_mutating_the_game() {
        let mut game = two_by_four();
        game.dig(&[0, 1]).unwrap();
        game.dig(&[0, 2]).unwrap();
        game.dig(&[1, 2]).unwrap();

        let before = game.clone();
        assert_eq!(flat(&game.render(false)), "_31___1_");
        assert_eq!(game, before);
    }

    #[test]
    fn three_dimensional_render_matches_the_visibility_mask() {
        let mines: Vec<Coord> = [[0, 0, 1], [1, 0, 0], [1, 1, 1]]
            .iter()
            .map(|coords| Coord::from_slice(coords))
            .collect();
        let mut game = Game::from_mine_coords(&[2, 4, 2], &mines).unwrap();
        game.dig(&[0, 1, 1]).unwrap();
        game.dig(&[0, 3, 0]).unwrap();

        assert_eq!(flat(&game.render(false)), "___311  ____11  ");
        assert_eq!(flat(&game.render(true)), "3.3311  .33.11  ");
    }

    #[test]
    fn counts_above_nine_render_with_every_digit() {
        assert_eq!(Symbol::Count(12).to_string(), "12");
    }
}
