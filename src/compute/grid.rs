//! Grid storage for the bounded Game of Life board.
//!
//! Cells are stored row-major in a flat vector: index = row * width + column.

use std::collections::TryReserveError;
use std::fmt;
use std::ops::Index;

/// Largest age a live cell can reach. Older cells stay at this value.
pub const MAX_AGE: u8 = 9;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Dead,
    /// Live cell with its age in generations (0..=MAX_AGE).
    Alive(u8),
}

impl Cell {
    /// Live cell with the given age, clamped to [`MAX_AGE`].
    #[inline]
    pub fn alive(age: u8) -> Self {
        Cell::Alive(age.min(MAX_AGE))
    }

    #[inline]
    pub fn is_live(self) -> bool {
        matches!(self, Cell::Alive(_))
    }

    /// Age of a live cell, `None` for dead cells.
    #[inline]
    pub fn age(self) -> Option<u8> {
        match self {
            Cell::Dead => None,
            Cell::Alive(age) => Some(age),
        }
    }

    /// This cell one generation older, saturating at [`MAX_AGE`].
    /// Dead cells stay dead.
    #[inline]
    pub fn aged(self) -> Self {
        match self {
            Cell::Dead => Cell::Dead,
            Cell::Alive(age) => Cell::alive(age.saturating_add(1)),
        }
    }
}

/// Position of a cell, row first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    pub row: usize,
    pub column: usize,
}

impl Coordinate {
    #[inline]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, column): (usize, usize)) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Grid construction and access errors.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("Co-ordinate ({row}, {column}) outside board dimensions {width}x{height}")]
    OutOfBounds {
        row: usize,
        column: usize,
        width: usize,
        height: usize,
    },
    #[error("Board dimensions {width}x{height} overflow the cell count")]
    TooLarge { width: usize, height: usize },
    #[error("Memory allocation error for a {width}x{height} board")]
    Allocation {
        width: usize,
        height: usize,
        #[source]
        source: TryReserveError,
    },
}

fn cell_count(width: usize, height: usize) -> Result<usize, GridError> {
    width
        .checked_mul(height)
        .ok_or(GridError::TooLarge { width, height })
}

/// Rectangular, non-wrapping board of cells.
///
/// Dimensions are fixed at construction. Any dimensions whose cell count fits
/// in `usize` are accepted here, including zero; the run configuration
/// enforces the printable limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-dead grid.
    ///
    /// # Panics
    ///
    /// If `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Self {
        let len = cell_count(width, height).unwrap_or_else(|e| panic!("{e}"));
        Self {
            width,
            height,
            cells: vec![Cell::Dead; len],
        }
    }

    /// Create an all-dead grid, reporting an oversized board or allocation
    /// failure instead of aborting.
    pub fn try_new(width: usize, height: usize) -> Result<Self, GridError> {
        let len = cell_count(width, height)?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|source| GridError::Allocation {
                width,
                height,
                source,
            })?;
        cells.resize(len, Cell::Dead);
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells (width * height).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `at` lies inside the grid.
    #[inline]
    pub fn contains(&self, at: Coordinate) -> bool {
        at.row < self.height && at.column < self.width
    }

    #[inline]
    fn offset(&self, at: Coordinate) -> Option<usize> {
        self.contains(at).then(|| at.row * self.width + at.column)
    }

    /// Cell at `at`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, at: Coordinate) -> Option<Cell> {
        self.offset(at).map(|i| self.cells[i])
    }

    /// True if `at` is inside the grid and holds a live cell.
    #[inline]
    pub fn is_live(&self, at: Coordinate) -> bool {
        self.get(at).is_some_and(Cell::is_live)
    }

    /// Mark one cell alive with the given age.
    pub fn set_live(&mut self, at: Coordinate, initial_age: u8) -> Result<(), GridError> {
        let i = self.checked_offset(at)?;
        self.cells[i] = Cell::alive(initial_age);
        Ok(())
    }

    fn checked_offset(&self, at: Coordinate) -> Result<usize, GridError> {
        self.offset(at).ok_or(GridError::OutOfBounds {
            row: at.row,
            column: at.column,
            width: self.width,
            height: self.height,
        })
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_live()).count()
    }

    /// Live cell coordinates in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_live())
            .map(move |(i, _)| Coordinate::new(i / width, i % width))
    }

    /// Rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // chunks(0) panics; a zero-width grid has no cells to yield anyway
        self.cells.chunks(self.width.max(1))
    }

    /// True when both grids have the same dimensions and the same live/dead
    /// mask. Ages are ignored.
    pub fn same_pattern(&self, other: &Grid) -> bool {
        self.width == other.width
            && self.height == other.height
            && self
                .cells
                .iter()
                .zip(&other.cells)
                .all(|(a, b)| a.is_live() == b.is_live())
    }

    /// Flat cell storage, row-major.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }
}

impl Index<Coordinate> for Grid {
    type Output = Cell;

    /// Panics if `at` is outside the grid, like slice indexing.
    fn index(&self, at: Coordinate) -> &Cell {
        match self.offset(at) {
            Some(i) => &self.cells[i],
            None => panic!(
                "coordinate {} outside {}x{} grid",
                at, self.width, self.height
            ),
        }
    }
}
