//! Guess ranking and selection
//!
//! Scorers, the candidate pool, the selector and the `Solver` that ties them
//! together under a `Configuration`.

pub mod config;
mod engine;
pub mod entropy;
pub mod frequency;
pub mod pool;
pub mod selector;

pub use config::{ConfigStore, Configuration, Preset};
pub use engine::Solver;
pub use selector::ScoredCandidate;
