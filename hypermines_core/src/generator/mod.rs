use crate::*;
pub use random::*;

mod random;

pub trait LayoutGenerator {
    fn generate(self, config: &GameConfig) -> MineLayout;
}

/// Policy for the cell the player uncovers first.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StartCell {
    Random,
    SimpleSafe,
    AlwaysZero,
}
