use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape needs at least one axis, every extent positive")]
    InvalidShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
