use alloc::collections::VecDeque;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Outcome of revealing a single cell, cascade included.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The cell held a mine; exactly one cell was uncovered.
    HitMine,
    /// Safe cell; carries how many cells the reveal uncovered in total.
    Opened(CellCount),
}

impl RevealOutcome {
    pub const fn hit_mine(self) -> bool {
        matches!(self, Self::HitMine)
    }
}

/// One level's grid: the mine mask, precomputed neighbor counts, and the
/// player's reveal progress. Discarded when the level ends.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    mines: Array2<bool>,
    counts: Array2<u8>,
    revealed: Array2<bool>,
    mine_count: CellCount,
    revealed_count: CellCount,
}

impl Board {
    /// Builds a fresh board for `config` with mines placed by `generator`.
    pub fn generate<G: MineGenerator>(config: &LevelConfig, generator: &mut G) -> Self {
        debug_assert!(config.validate().is_ok());

        let mask = generator.generate(config.size, config.mines);
        log::debug!(
            "level {} board generated: {}x{}, {} mines",
            config.id,
            config.size,
            config.size,
            config.mines
        );
        Self::from_mask(mask)
    }

    /// Builds a board with mines at exactly the given positions.
    pub fn with_mines(size: Coord, mine_positions: &[Pos]) -> Result<Self> {
        let mut mask: Array2<bool> = Array2::default((size as usize, size as usize));
        for &pos in mine_positions {
            if pos.0 >= size || pos.1 >= size {
                return Err(GameError::OutOfBounds);
            }
            mask[pos.nd()] = true;
        }
        Ok(Self::from_mask(mask))
    }

    fn from_mask(mines: Array2<bool>) -> Self {
        let counts = neighbor_counts(&mines);
        let mine_count = mines.iter().filter(|&&mine| mine).count() as CellCount;
        let revealed = Array2::default(mines.raw_dim());
        Self {
            mines,
            counts,
            revealed,
            mine_count,
            revealed_count: 0,
        }
    }

    pub fn size(&self) -> Coord {
        self.mines.dim().0 as Coord
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.0 < self.size() && pos.1 < self.size()
    }

    pub fn is_mine(&self, pos: Pos) -> bool {
        self.mines[pos.nd()]
    }

    /// Mined-neighbor count; meaningful for safe cells only.
    pub fn neighbor_count(&self, pos: Pos) -> u8 {
        self.counts[pos.nd()]
    }

    pub fn is_revealed(&self, pos: Pos) -> bool {
        self.revealed[pos.nd()]
    }

    /// What the player currently sees at `pos`.
    pub fn cell_at(&self, pos: Pos) -> CellView {
        if !self.revealed[pos.nd()] {
            CellView::Hidden
        } else if self.mines[pos.nd()] {
            CellView::Exploded
        } else {
            CellView::Open(self.counts[pos.nd()])
        }
    }

    /// Reveals `pos`. Expects an in-bounds, still-hidden cell; the session
    /// filters everything else out as a no-op before calling in.
    pub fn reveal(&mut self, pos: Pos) -> RevealOutcome {
        debug_assert!(self.in_bounds(pos));
        debug_assert!(!self.is_revealed(pos));

        self.revealed[pos.nd()] = true;
        self.revealed_count += 1;

        if self.mines[pos.nd()] {
            // a hit mine never cascades
            return RevealOutcome::HitMine;
        }

        let mut opened: CellCount = 1;
        if self.counts[pos.nd()] == 0 {
            opened += self.flood_fill(pos);
        }
        RevealOutcome::Opened(opened)
    }

    /// Opens the 8-connected zero-count region around `start` plus its
    /// numbered border, leaving mines hidden. The revealed grid doubles as
    /// the visited set, so every cell is enqueued at most once and the
    /// traversal terminates on any finite grid.
    fn flood_fill(&mut self, start: Pos) -> CellCount {
        let size = self.size();
        let mut opened: CellCount = 0;
        let mut frontier = VecDeque::from([start]);

        while let Some(pos) = frontier.pop_front() {
            for next in neighbors(pos, size) {
                if self.revealed[next.nd()] || self.mines[next.nd()] {
                    continue;
                }
                self.revealed[next.nd()] = true;
                self.revealed_count += 1;
                opened += 1;
                log::trace!("flood opened {:?}, count {}", next, self.counts[next.nd()]);

                // zero cells keep expanding, numbered border cells stop
                if self.counts[next.nd()] == 0 {
                    frontier.push_back(next);
                }
            }
        }
        opened
    }
}

/// Mined-neighbor counts for every cell of `mask`; O(size^2).
fn neighbor_counts(mask: &Array2<bool>) -> Array2<u8> {
    let size = mask.dim().0 as Coord;
    let mut counts: Array2<u8> = Array2::default(mask.raw_dim());
    for row in 0..size {
        for col in 0..size {
            let pos = (row, col);
            if mask[pos.nd()] {
                // value at a mined cell is never read
                continue;
            }
            counts[pos.nd()] = neighbors(pos, size).filter(|&next| mask[next.nd()]).count() as u8;
        }
    }
    counts
}
