#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Index;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use score::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod generator;
mod score;
mod types;

/// One entry of the fixed level table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub id: u32,
    pub size: Coord,
    pub mines: CellCount,
}

impl LevelConfig {
    pub const fn new(id: u32, size: Coord, mines: CellCount) -> Self {
        Self { id, size, mines }
    }

    pub const fn total_cells(&self) -> CellCount {
        square(self.size)
    }

    /// A level must hold at least one mine and leave at least one safe cell.
    /// Anything else is a configuration bug, caught before a board exists.
    pub fn validate(&self) -> Result<()> {
        if self.mines == 0 || self.mines >= self.total_cells() {
            return Err(GameError::InvalidLevelConfig {
                id: self.id,
                size: self.size,
                mines: self.mines,
            });
        }
        Ok(())
    }
}

/// The original challenge's level table: three boards of rising size.
pub const STANDARD_LEVELS: [LevelConfig; 3] = [
    LevelConfig::new(1, 8, 5),
    LevelConfig::new(2, 10, 7),
    LevelConfig::new(3, 12, 8),
];

/// Validated, non-empty, ordered list of levels. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSequence {
    levels: Vec<LevelConfig>,
}

impl LevelSequence {
    pub fn new(levels: Vec<LevelConfig>) -> Result<Self> {
        if levels.is_empty() {
            return Err(GameError::EmptyLevelSequence);
        }
        for level in &levels {
            level.validate()?;
        }
        Ok(Self { levels })
    }

    pub fn standard() -> Self {
        Self {
            levels: STANDARD_LEVELS.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LevelConfig> {
        self.levels.get(index)
    }

    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.levels.len()
    }
}

impl Default for LevelSequence {
    fn default() -> Self {
        Self::standard()
    }
}

impl Index<usize> for LevelSequence {
    type Output = LevelConfig;

    fn index(&self, index: usize) -> &Self::Output {
        &self.levels[index]
    }
}
