use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Field must be at least one cell high and one cell wide")]
    EmptyField,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Cannot sample {requested} distinct values out of {available}")]
    SampleTooLarge {
        requested: CellCount,
        available: CellCount,
    },
    #[error("Sampler returned a mine placement that does not fit the field")]
    InvalidSample,
}

pub type Result<T> = core::result::Result<T, GameError>;
