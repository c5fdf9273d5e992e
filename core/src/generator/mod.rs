use crate::*;
use ndarray::Array2;
pub use random::*;

mod random;

/// Placement strategy: decides which cells of a fresh board hold mines.
///
/// Implementations must return a `size` by `size` mask with exactly `mines`
/// cells set. The session holds one generator for its whole lifetime and
/// asks it for a new mask every time a level starts.
pub trait MineGenerator {
    fn generate(&mut self, size: Coord, mines: CellCount) -> Array2<bool>;
}
