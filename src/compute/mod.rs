//! Compute module - The generation engine.

mod buffers;
mod cycle;
mod grid;
mod neighbors;
mod rule;
mod simulation;

pub use buffers::*;
pub use cycle::*;
pub use grid::*;
pub use neighbors::*;
pub use rule::*;
pub use simulation::*;
