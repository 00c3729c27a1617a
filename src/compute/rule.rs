//! Generation transition rules.
//!
//! Both rules share Conway's thresholds (B3/S23). They differ only in what a
//! surviving or newborn cell looks like:
//!
//! - `Binary`: every live cell is `Alive(0)`.
//! - `Aging`: survivors grow one generation older, saturating at [`MAX_AGE`].
//!
//! [`MAX_AGE`]: super::MAX_AGE

use rayon::prelude::*;

use super::{Cell, Coordinate, Grid, count_live_neighbors};
use crate::schema::Mode;

/// Transition rule, selected once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rule {
    /// Standard Game of Life.
    #[default]
    Binary,
    /// Game of Life with per-cell age.
    Aging,
}

impl Rule {
    /// Next state of a cell from its current state and live-neighbor count.
    #[inline]
    pub fn next_state(self, current: Cell, neighbors: u8) -> Cell {
        match (self, neighbors) {
            (Rule::Binary, 2) => current,
            (Rule::Binary, 3) => match current {
                Cell::Dead => Cell::Alive(0),
                alive => alive,
            },
            (Rule::Aging, 2) => current.aged(),
            (Rule::Aging, 3) => match current {
                Cell::Dead => Cell::Alive(0),
                alive => alive.aged(),
            },
            _ => Cell::Dead,
        }
    }
}

impl From<Mode> for Rule {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Plain => Rule::Binary,
            Mode::Aging => Rule::Aging,
        }
    }
}

/// Apply `rule` to every cell of `current`, writing the result into `next`.
///
/// `next` is fully overwritten; only `current` is read. Rows are evaluated in
/// parallel, which cannot change the result since no cell reads `next`.
///
/// # Panics
///
/// If the two grids differ in dimensions.
pub fn evolve_into(rule: Rule, current: &Grid, next: &mut Grid) {
    assert_eq!(
        (current.width(), current.height()),
        (next.width(), next.height()),
        "grid dimensions must match"
    );

    let width = current.width();
    if width == 0 {
        return;
    }

    next.cells_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(row, out)| {
            for (column, cell) in out.iter_mut().enumerate() {
                let at = Coordinate::new(row, column);
                *cell = rule.next_state(current[at], count_live_neighbors(current, at));
            }
        });
}
