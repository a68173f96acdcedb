use serde::{Deserialize, Serialize};

/// A unit cell at integer `(row, col)` coordinates on an implicit unbounded grid.
/// Serializes as the two-element array `[row, col]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell(pub i64, pub i64);

impl Cell {
    /// Row coordinate of this cell.
    #[inline] pub fn row(&self) -> i64 { self.0 }

    /// Column coordinate of this cell.
    #[inline] pub fn col(&self) -> i64 { self.1 }

    /// The four axis-aligned neighbors of this cell (4-connectivity).
    #[inline]
    pub(crate) fn neighbors(&self) -> [Cell; 4] {
        let Cell(row, col) = *self;
        [
            Cell(row - 1, col),
            Cell(row + 1, col),
            Cell(row, col - 1),
            Cell(row, col + 1),
        ]
    }
}
