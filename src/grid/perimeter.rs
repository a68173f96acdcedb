use ahash::AHashSet;

use crate::grid::Cell;

/// Count the unit edges on the boundary of a set of cells.
///
/// An edge counts toward the perimeter when the cell on its other side is not
/// part of the set, under 4-connectivity (diagonal adjacency does not cancel
/// an edge). Disconnected components each contribute their own boundary, and
/// an interior hole contributes edges on both of its sides.
pub fn perimeter(cells: &[Cell]) -> u64 {
    if cells.is_empty() { return 0 }

    let occupied: AHashSet<Cell> = cells.iter().copied().collect();

    cells.iter()
        .flat_map(|cell| cell.neighbors())
        .filter(|neighbor| !occupied.contains(neighbor))
        .count() as u64
}
