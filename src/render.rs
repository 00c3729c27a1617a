//! Text rendering of boards.
//!
//! ```text
//! *-----*
//! |  X  |
//! |  X  |
//! |  X  |
//! *-----*
//!
//!
//! ```
//!
//! Dead cells are spaces. In plain mode a live cell is `X`; in aging mode it is
//! its age digit, `9` meaning "nine or older".

use std::fmt;
use std::io::{self, Write};

use crate::compute::{Cell, Coordinate, Grid, MAX_AGE, Rule};

/// Glyph for a dead cell.
pub const DEAD_GLYPH: char = ' ';

/// Glyph for a live cell in plain mode.
pub const LIVE_GLYPH: char = 'X';

/// Printed when a run reaches its generation limit.
pub const FINISHED_MESSAGE: &str = "Finished";

/// Printed when aging mode stops on a repeat.
pub fn period_message(period: usize) -> String {
    format!("Period detected ({period}): exiting")
}

/// Character shown for `cell` under `rule`.
#[inline]
pub fn glyph(cell: Cell, rule: Rule) -> char {
    match (cell, rule) {
        (Cell::Dead, _) => DEAD_GLYPH,
        (Cell::Alive(_), Rule::Binary) => LIVE_GLYPH,
        (Cell::Alive(age), Rule::Aging) => char::from(b'0' + age.min(MAX_AGE)),
    }
}

/// Display adapter for a bordered board, followed by two blank lines.
pub struct Board<'a> {
    grid: &'a Grid,
    rule: Rule,
}

impl<'a> Board<'a> {
    pub fn new(grid: &'a Grid, rule: Rule) -> Self {
        Self { grid, rule }
    }

    fn border(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "*{}*", "-".repeat(self.grid.width()))
    }
}

impl fmt::Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.border(f)?;
        for row in 0..self.grid.height() {
            let line: String = (0..self.grid.width())
                .map(|column| glyph(self.grid[Coordinate::new(row, column)], self.rule))
                .collect();
            writeln!(f, "|{line}|")?;
        }
        self.border(f)?;
        f.write_str("\n\n")
    }
}

/// Render a board to a string.
pub fn render_board(grid: &Grid, rule: Rule) -> String {
    Board::new(grid, rule).to_string()
}

/// Write a rendered board.
pub fn write_board<W: Write>(w: &mut W, grid: &Grid, rule: Rule) -> io::Result<()> {
    write!(w, "{}", Board::new(grid, rule))
}

/// Recover the live cells from one rendered board.
///
/// Rows are the lines framed by `|`; borders and blank lines are ignored. Any
/// non-space glyph is a live cell.
pub fn parse_board(text: &str) -> Vec<Coordinate> {
    text.lines()
        .filter_map(|line| line.strip_prefix('|')?.strip_suffix('|'))
        .enumerate()
        .flat_map(|(row, cells)| {
            cells
                .chars()
                .enumerate()
                .filter(|&(_, c)| c != DEAD_GLYPH)
                .map(move |(column, _)| Coordinate::new(row, column))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_render_plain() {
        let mut grid = Grid::new(4, 2);
        grid.set_live(Coordinate::new(0, 1), 0).unwrap();
        grid.set_live(Coordinate::new(1, 3), 5).unwrap();
        assert_eq!(
            render_board(&grid, Rule::Binary),
            "*----*\n| X  |\n|   X|\n*----*\n\n\n"
        );
    }

    #[test]
    fn test_render_ages() {
        let mut grid = Grid::new(3, 1);
        grid.set_live(Coordinate::new(0, 0), 0).unwrap();
        grid.set_live(Coordinate::new(0, 1), 7).unwrap();
        grid.set_live(Coordinate::new(0, 2), MAX_AGE).unwrap();
        assert_eq!(render_board(&grid, Rule::Aging), "*---*\n|079|\n*---*\n\n\n");
    }

    #[test]
    fn test_write_board_matches_render() {
        let mut grid = Grid::new(2, 2);
        grid.set_live(Coordinate::new(1, 1), 0).unwrap();
        let mut out = Vec::new();
        write_board(&mut out, &grid, Rule::Binary).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            render_board(&grid, Rule::Binary)
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(period_message(3), "Period detected (3): exiting");
        assert_eq!(FINISHED_MESSAGE, "Finished");
    }

    proptest! {
        #[test]
        fn prop_render_parse_roundtrip(
            width in 1usize..20,
            height in 1usize..20,
            mask in prop::collection::vec(any::<bool>(), 400),
            aging in any::<bool>(),
        ) {
            let mut grid = Grid::new(width, height);
            for row in 0..height {
                for column in 0..width {
                    if mask[row * 20 + column] {
                        let age = ((row + column) % 12) as u8;
                        grid.set_live(Coordinate::new(row, column), age).unwrap();
                    }
                }
            }
            let rule = if aging { Rule::Aging } else { Rule::Binary };
            let parsed = parse_board(&render_board(&grid, rule));
            prop_assert_eq!(parsed, grid.live_cells().collect::<Vec<_>>());
        }
    }
}
