use crate::{CellCount, Coord};
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("level {id}: {mines} mines do not fit a {size}x{size} board")]
    InvalidLevelConfig {
        id: u32,
        size: Coord,
        mines: CellCount,
    },
    #[error("level sequence is empty")]
    EmptyLevelSequence,
    #[error("position is outside the board")]
    OutOfBounds,
    #[error("no level at index {0}")]
    UnknownLevel(usize),
    #[error("advancing is only valid after clearing a level")]
    AdvanceNotAllowed,
}

pub type Result<T> = core::result::Result<T, GameError>;
