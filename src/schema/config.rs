//! Run configuration: board size, generation limit and mode.

use serde::{Deserialize, Serialize};

/// Widest board that can be printed.
pub const MAX_WIDTH: usize = 78;

/// Tallest board that can be printed.
pub const MAX_HEIGHT: usize = 50;

/// Default bound on the detectable period in aging mode.
pub const DEFAULT_MAX_PERIOD: usize = 4;

/// Largest accepted period bound. Each unit costs one retained board.
pub const MAX_PERIOD_LIMIT: usize = 64;

fn default_max_period() -> usize {
    DEFAULT_MAX_PERIOD
}

/// Which variant of the simulation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Binary cells, runs to the generation limit.
    #[default]
    Plain,
    /// Cells carry an age; stops early when a period is detected.
    Aging,
}

impl Mode {
    /// Whether this mode looks for repeating patterns.
    #[inline]
    pub fn detects_cycles(self) -> bool {
        matches!(self, Mode::Aging)
    }
}

/// Top-level run configuration. Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Board width in cells.
    pub width: usize,
    /// Board height in cells.
    pub height: usize,
    /// Number of generations to compute after the initial one.
    pub generations: u64,
    #[serde(default)]
    pub mode: Mode,
    /// Largest period detected in aging mode.
    #[serde(default = "default_max_period")]
    pub max_period: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            generations: 50,
            mode: Mode::Plain,
            max_period: DEFAULT_MAX_PERIOD,
        }
    }
}

impl RunConfig {
    /// Number of boards the generation pool needs for this run.
    #[inline]
    pub fn buffer_capacity(&self) -> usize {
        match self.mode {
            Mode::Plain => 2,
            Mode::Aging => self.max_period + 1,
        }
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.width > MAX_WIDTH {
            return Err(ConfigError::InvalidWidth {
                width: self.width,
                max: MAX_WIDTH,
            });
        }
        if self.height == 0 || self.height > MAX_HEIGHT {
            return Err(ConfigError::InvalidHeight {
                height: self.height,
                max: MAX_HEIGHT,
            });
        }
        if self.max_period == 0 || self.max_period > MAX_PERIOD_LIMIT {
            return Err(ConfigError::InvalidMaxPeriod {
                period: self.max_period,
                max: MAX_PERIOD_LIMIT,
            });
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "Invalid board width {width}. Board width must be an integer greater than zero and no more than {max}"
    )]
    InvalidWidth { width: usize, max: usize },
    #[error(
        "Invalid board height {height}. Board height must be an integer greater than zero and no more than {max}"
    )]
    InvalidHeight { height: usize, max: usize },
    #[error("Invalid maximum period {period}. It must be between 1 and {max}")]
    InvalidMaxPeriod { period: usize, max: usize },
}
