//! Bounded Life - Conway's Game of Life on a fixed, non-wrapping board.
//!
//! Two modes share one engine:
//!
//! - **Plain**: binary cells, run for a fixed number of generations.
//! - **Aging**: every live cell carries an age (saturating at 9), and the run
//!   stops early once the live/dead pattern repeats with a short period.
//!
//! # Architecture
//!
//! - `schema`: Run configuration, seeds and input formats
//! - `compute`: Grid, neighbor counting, rules, buffer pool, cycle detection
//! - `render`: Bordered text output
//!
//! # Example
//!
//! ```rust
//! use bounded_life::{
//!     compute::Simulation,
//!     schema::{Mode, Pattern, RunConfig, Seed},
//! };
//!
//! let config = RunConfig {
//!     width: 5,
//!     height: 5,
//!     generations: 10,
//!     mode: Mode::Aging,
//!     ..Default::default()
//! };
//! let seed = Seed {
//!     pattern: Pattern::Blinker { origin: (2, 1) },
//! };
//!
//! let simulation = Simulation::from_seed(&seed, &config).unwrap();
//! let last = simulation.frames().last().unwrap();
//! assert_eq!(last.period, Some(2));
//! print!("{}", last.render());
//! ```

pub mod compute;
pub mod render;
pub mod schema;

// Re-export commonly used types
pub use compute::{Frame, Frames, GenerationStats, Grid, Simulation, SimulationError};
pub use schema::{Mode, Pattern, RunConfig, Seed};
