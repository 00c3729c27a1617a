//! Schema module - Configuration, seeding and input formats for a run.

mod config;
mod lexicon;
mod seed;

pub use config::*;
pub use lexicon::*;
pub use seed::*;
