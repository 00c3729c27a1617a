//! Simulation driver - steps generations and hands out frames.
//!
//! A run is consumed as a lazy iterator of [`Frame`]s: the initial board, then
//! one frame per computed generation. In aging mode the iterator stops right
//! after the first frame that repeats an earlier pattern.

use std::iter::FusedIterator;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::{Coordinate, CycleDetector, GenerationBuffers, Grid, GridError, MAX_AGE, Rule};
use crate::render::render_board;
use crate::schema::{ConfigError, DEFAULT_MAX_PERIOD, Mode, RunConfig, Seed, SeedError};

/// Anything that can stop a run from starting.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Seed(#[from] SeedError),
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Mark every coordinate alive with age 0.
///
/// All coordinates are checked before any cell is touched, so on error the
/// grid is left as it was.
pub fn load_initial_state<'a, I>(grid: &mut Grid, coordinates: I) -> Result<(), GridError>
where
    I: IntoIterator<Item = &'a Coordinate>,
    I::IntoIter: Clone,
{
    let coordinates = coordinates.into_iter();
    if let Some(&bad) = coordinates.clone().find(|&&at| !grid.contains(at)) {
        return Err(GridError::OutOfBounds {
            row: bad.row,
            column: bad.column,
            width: grid.width(),
            height: grid.height(),
        });
    }
    for &at in coordinates {
        grid.set_live(at, 0)?;
    }
    Ok(())
}

/// Start a run over `initial` with the default period bound.
pub fn run(initial: Grid, generation_limit: u64, mode: Mode) -> Result<Frames, GridError> {
    let config = RunConfig {
        width: initial.width(),
        height: initial.height(),
        generations: generation_limit,
        mode,
        max_period: DEFAULT_MAX_PERIOD,
    };
    Simulation::new(initial, &config).map(Simulation::frames)
}

/// One emitted generation.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Generation number, 0 for the initial board.
    pub generation: u64,
    /// Snapshot of the board.
    pub grid: Grid,
    /// Period of the repeat this generation completes, if one was detected.
    pub period: Option<usize>,
    /// Rule the board was produced with (decides how it is rendered).
    pub rule: Rule,
}

impl Frame {
    /// Bordered text rendering of the board.
    pub fn render(&self) -> String {
        render_board(&self.grid, self.rule)
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }
}

/// Single-run simulation state.
pub struct Simulation {
    rule: Rule,
    buffers: GenerationBuffers,
    detector: Option<CycleDetector>,
    generation: u64,
    generation_limit: u64,
}

impl Simulation {
    /// Create a simulation starting from `initial`.
    ///
    /// Every board the run needs is allocated here. The caller is expected to
    /// have validated `config`; `initial` fixes the board dimensions.
    pub fn new(initial: Grid, config: &RunConfig) -> Result<Self, GridError> {
        let buffers = GenerationBuffers::new(initial, config.buffer_capacity())?;
        let detector = config
            .mode
            .detects_cycles()
            .then(|| CycleDetector::new(config.max_period));

        Ok(Self {
            rule: Rule::from(config.mode),
            buffers,
            detector,
            generation: 0,
            generation_limit: config.generations,
        })
    }

    /// Validate `config`, build the initial board from `seed` and create the
    /// simulation.
    pub fn from_seed(seed: &Seed, config: &RunConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        let mut grid = Grid::try_new(config.width, config.height)?;
        load_initial_state(&mut grid, &seed.cells())?;
        Ok(Self::new(grid, config)?)
    }

    /// The most recently completed generation.
    #[inline]
    pub fn current(&self) -> &Grid {
        self.buffers.current()
    }

    /// Number of the current generation.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Period of the current generation, if it repeats. Always `None` in
    /// plain mode.
    pub fn detect_period(&self) -> Option<usize> {
        self.detector.as_ref()?.detect(&self.buffers)
    }

    /// Compute one generation.
    pub fn step(&mut self) {
        self.buffers.advance(self.rule);
        self.generation += 1;
        debug!(
            "generation {}: population {}",
            self.generation,
            self.buffers.current().population()
        );
    }

    /// Run for `steps` generations without emitting frames or checking for
    /// repeats.
    pub fn run(&mut self, steps: u64) {
        for _ in 0..steps {
            self.step();
        }
    }

    /// Consume the simulation as a lazy sequence of frames.
    pub fn frames(self) -> Frames {
        Frames {
            simulation: self,
            finished: false,
        }
    }
}

/// Lazy, finite sequence of frames.
///
/// Yields at most `generation_limit + 1` frames and ends immediately after a
/// frame that carries a detected period.
pub struct Frames {
    simulation: Simulation,
    finished: bool,
}

impl Iterator for Frames {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.finished {
            return None;
        }

        let sim = &mut self.simulation;
        let period = sim.detect_period();
        let frame = Frame {
            generation: sim.generation,
            grid: sim.current().clone(),
            period,
            rule: sim.rule,
        };

        if let Some(period) = period {
            info!("Period {} detected at generation {}", period, sim.generation);
            self.finished = true;
        } else if sim.generation >= sim.generation_limit {
            self.finished = true;
        } else {
            sim.step();
        }

        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        let remaining = self
            .simulation
            .generation_limit
            .saturating_sub(self.simulation.generation)
            .saturating_add(1);
        (1, usize::try_from(remaining).ok())
    }
}

impl FusedIterator for Frames {}

/// Board statistics for monitoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub cells: usize,
    pub population: usize,
    /// Highest age among live cells, `None` on an empty board.
    pub oldest: Option<u8>,
    /// Live cells that have reached the maximum age.
    pub saturated: usize,
}

impl GenerationStats {
    /// Compute statistics from a board.
    pub fn from_grid(grid: &Grid) -> Self {
        let mut population = 0usize;
        let mut oldest = None;
        let mut saturated = 0usize;

        for age in grid.cells().iter().filter_map(|c| c.age()) {
            population += 1;
            oldest = oldest.max(Some(age));
            if age == MAX_AGE {
                saturated += 1;
            }
        }

        Self {
            cells: grid.len(),
            population,
            oldest,
            saturated,
        }
    }
}
