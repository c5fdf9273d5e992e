use serde::{Deserialize, Serialize};

/// Player-visible projection of a single board cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    /// Uncovered safe cell, carrying its mined-neighbor count.
    Open(u8),
    /// Uncovered mine. Finding these is the goal here.
    Exploded,
}

impl CellView {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}
