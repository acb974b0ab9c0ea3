use alloc::string::{String, ToString};
use alloc::vec::Vec;

use ndarray::{Array2, Ix2};
use smallvec::smallvec;

use crate::*;

/// Row/column pair accepted by the two-dimensional convenience API.
pub type Coord2 = (Axis, Axis);

fn nd_coord((row, col): Coord2) -> Coord {
    smallvec![row, col]
}

impl Game {
    /// Two-dimensional convenience constructor: reshapes the arguments
    /// and delegates to the general form.
    pub fn new_2d(rows: Axis, cols: Axis, mine_coords: &[Coord2]) -> Result<Self> {
        let mine_coords: Vec<Coord> = mine_coords.iter().copied().map(nd_coord).collect();
        Self::from_mine_coords(&[rows, cols], &mine_coords)
    }

    pub fn dig_2d(&mut self, row: Axis, col: Axis) -> Result<CellCount> {
        self.dig(&[row, col])
    }

    /// # Panics
    ///
    /// Panics if the game is not two-dimensional.
    pub fn render_2d(&self, all_visible: bool) -> Array2<Symbol> {
        self.render(all_visible)
            .into_dimensionality::<Ix2>()
            .expect("board must be two-dimensional")
    }

    /// ASCII board, one text line per row, rows joined with `\n`.
    pub fn render_2d_board(&self, all_visible: bool) -> String {
        let symbols = self.render_2d(all_visible);
        let mut board = String::new();
        for (row_index, row) in symbols.rows().into_iter().enumerate() {
            if row_index > 0 {
                board.push('\n');
            }
            for symbol in row {
                board.push_str(&symbol.to_string());
            }
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_four() -> Game {
        Game::new_2d(2, 4, &[(0, 0), (1, 0), (1, 1)]).unwrap()
    }

    #[test]
    fn the_2d_constructor_delegates_to_the_general_form() {
        let game = two_by_four();

        assert_eq!(game.shape(), &[2, 4]);
        assert_eq!(game.total_mines(), 3);
        assert_eq!(game.cell_at(&[0, 1]), Cell::Clear(3));
    }

    #[test]
    fn digging_2d_wins_through_the_zero_region() {
        let mut game = two_by_four();

        assert_eq!(game.dig_2d(0, 1).unwrap(), 1);
        assert_eq!(game.dig_2d(0, 3).unwrap(), 4);
        assert_eq!(game.state(), GameState::Victory);
    }

    #[test]
    fn render_2d_shows_revealed_locations_only() {
        let mut game = two_by_four();
        game.dig_2d(0, 1).unwrap();
        game.dig_2d(0, 2).unwrap();
        game.dig_2d(1, 2).unwrap();

        let symbols = game.render_2d(false);
        assert_eq!(symbols[(0, 0)], Symbol::Hidden);
        assert_eq!(symbols[(0, 1)], Symbol::Count(3));
        assert_eq!(symbols[(0, 2)], Symbol::Count(1));
        assert_eq!(symbols[(0, 3)], Symbol::Hidden);
        assert_eq!(symbols[(1, 2)], Symbol::Count(1));
    }

    #[test]
    fn ascii_board_joins_rows_with_newlines() {
        let mut game = two_by_four();
        game.dig_2d(0, 1).unwrap();
        game.dig_2d(0, 2).unwrap();
        game.dig_2d(1, 2).unwrap();
        game.dig_2d(0, 0).unwrap();

        assert_eq!(game.state(), GameState::Defeat);
        assert_eq!(game.render_2d_board(false), ".31_\n__1_");
        assert_eq!(game.render_2d_board(true), ".31 \n..1 ");
    }
}
