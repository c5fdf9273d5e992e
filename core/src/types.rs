/// Single board axis. Boards are square, so rows and columns share it.
pub type Coord = u8;

/// Count type for mines and cells; a full 255x255 board still fits.
pub type CellCount = u16;

/// Cell position as `(row, col)`.
pub type Pos = (Coord, Coord);

pub trait GridIndex {
    fn nd(self) -> [usize; 2];
}

impl GridIndex for Pos {
    fn nd(self) -> [usize; 2] {
        [self.0.into(), self.1.into()]
    }
}

pub const fn square(size: Coord) -> CellCount {
    let size = size as CellCount;
    size * size
}

const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// In-bounds 8-neighborhood of `pos` on a `size` by `size` board. Edge and
/// corner cells simply yield fewer positions; there is no wraparound.
pub fn neighbors(pos: Pos, size: Coord) -> impl Iterator<Item = Pos> {
    let (row, col) = pos;
    OFFSETS.iter().filter_map(move |&(dr, dc)| {
        let next_row = row.checked_add_signed(dr)?;
        let next_col = col.checked_add_signed(dc)?;
        (next_row < size && next_col < size).then_some((next_row, next_col))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_three_neighbors() {
        let found: Vec<Pos> = neighbors((0, 0), 8).collect();
        assert_eq!(found, [(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn edge_has_five_neighbors() {
        assert_eq!(neighbors((0, 4), 8).count(), 5);
        assert_eq!(neighbors((7, 3), 8).count(), 5);
    }

    #[test]
    fn interior_has_eight_neighbors() {
        assert_eq!(neighbors((3, 3), 8).count(), 8);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(neighbors((0, 0), 1).count(), 0);
    }
}
