//! Moore-neighborhood counting on a bounded grid.
//!
//! Offsets that leave the grid are skipped, never wrapped.

use super::{Coordinate, Grid};

/// The eight Moore offsets as (row, column) deltas, clockwise from top left.
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

/// Neighbor of `at` at the given offset, if it lies inside the grid.
#[inline]
pub fn neighbor(grid: &Grid, at: Coordinate, (dr, dc): (isize, isize)) -> Option<Coordinate> {
    let row = at.row.checked_add_signed(dr)?;
    let column = at.column.checked_add_signed(dc)?;
    let candidate = Coordinate::new(row, column);
    grid.contains(candidate).then_some(candidate)
}

/// Number of live cells among the (up to) eight neighbors of `at`, in `0..=8`.
///
/// Any live cell counts regardless of age.
pub fn count_live_neighbors(grid: &Grid, at: Coordinate) -> u8 {
    MOORE_OFFSETS
        .iter()
        .filter_map(|&offset| neighbor(grid, at, offset))
        .filter(|&n| grid[n].is_live())
        .count() as u8
}
