//! Seed types for initializing a board.
//!
//! A seed is either a named pattern or an explicit list of live cells. Explicit
//! lists are also read from and written to the plain coordinate-list file:
//!
//! ```text
//! N
//! row column
//! row column
//! ...
//! ```

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::compute::Coordinate;

/// Complete seed specification for simulation initialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    /// Pattern to use for seeding.
    pub pattern: Pattern,
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            pattern: Pattern::Glider { origin: (0, 0) },
        }
    }
}

/// Predefined patterns. Origins are (row, column) of the pattern's top-left
/// bounding-box corner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// Explicit live cells as (row, column) pairs.
    Cells { cells: Vec<(usize, usize)> },
    /// Period-2 oscillator, horizontal phase.
    Blinker { origin: (usize, usize) },
    /// 2x2 still life.
    Block { origin: (usize, usize) },
    /// Smallest spaceship, travelling down and right.
    Glider { origin: (usize, usize) },
    /// Period-2 oscillator made of two diagonal blocks.
    Beacon { origin: (usize, usize) },
}

impl Pattern {
    fn shape(&self) -> &'static [(usize, usize)] {
        match self {
            Pattern::Cells { .. } => &[],
            Pattern::Blinker { .. } => &[(0, 0), (0, 1), (0, 2)],
            Pattern::Block { .. } => &[(0, 0), (0, 1), (1, 0), (1, 1)],
            Pattern::Glider { .. } => &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
            Pattern::Beacon { .. } => &[
                (0, 0),
                (0, 1),
                (1, 0),
                (1, 1),
                (2, 2),
                (2, 3),
                (3, 2),
                (3, 3),
            ],
        }
    }
}

/// Errors reading a coordinate-list seed.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Error opening board configuration file {}. Please ensure that the file exists", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error reading board configuration: {0}")]
    Read(#[from] io::Error),
    #[error("Board configuration is empty; expected the number of live cells first")]
    MissingCount,
    #[error("Board configuration ends after {found} of {expected} co-ordinates")]
    MissingCoordinate { found: usize, expected: usize },
    #[error("Invalid number '{token}' in board configuration")]
    InvalidNumber { token: String },
}

fn parse_number(token: &str) -> Result<usize, SeedError> {
    token.parse().map_err(|_| SeedError::InvalidNumber {
        token: token.to_string(),
    })
}

impl Seed {
    /// Seed made of explicit live cells.
    pub fn from_cells<I: IntoIterator<Item = Coordinate>>(cells: I) -> Self {
        Self {
            pattern: Pattern::Cells {
                cells: cells.into_iter().map(|c| (c.row, c.column)).collect(),
            },
        }
    }

    /// Live cells of this seed, in pattern order.
    ///
    /// Pattern offsets saturate at `usize::MAX`, so an origin too large for
    /// its shape yields a coordinate that no board contains.
    pub fn cells(&self) -> Vec<Coordinate> {
        match &self.pattern {
            Pattern::Cells { cells } => cells.iter().map(|&rc| Coordinate::from(rc)).collect(),
            Pattern::Blinker { origin }
            | Pattern::Block { origin }
            | Pattern::Glider { origin }
            | Pattern::Beacon { origin } => self
                .pattern
                .shape()
                .iter()
                .map(|&(dr, dc)| {
                    Coordinate::new(origin.0.saturating_add(dr), origin.1.saturating_add(dc))
                })
                .collect(),
        }
    }

    /// Parse the coordinate-list format.
    ///
    /// Only the count and the announced pairs are read; anything after them
    /// is ignored.
    pub fn parse(text: &str) -> Result<Self, SeedError> {
        let mut tokens = text.split_whitespace();
        let expected = parse_number(tokens.next().ok_or(SeedError::MissingCount)?)?;

        let mut cells = Vec::new();
        for found in 0..expected {
            let mut next = || {
                tokens
                    .next()
                    .ok_or(SeedError::MissingCoordinate { found, expected })
                    .and_then(parse_number)
            };
            let row = next()?;
            let column = next()?;
            cells.push(Coordinate::new(row, column));
        }

        Ok(Self::from_cells(cells))
    }

    /// Read the coordinate-list format from any reader.
    pub fn read_from<R: Read>(r: &mut R) -> Result<Self, SeedError> {
        let mut text = String::new();
        r.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    /// Load a coordinate-list file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SeedError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Write the coordinate-list format.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let cells = self.cells();
        writeln!(w, "{}", cells.len())?;
        for cell in cells {
            writeln!(w, "{} {}", cell.row, cell.column)?;
        }
        Ok(())
    }

    /// Save as a coordinate-list file, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()
    }
}
