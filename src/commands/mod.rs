//! Command implementations
//!
//! Pure functions behind the CLI subcommands; printing lives in `output`.

pub mod analyze;
pub mod benchmark;
pub mod solve;
pub mod suggest;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, GameOutcome, play_game, run_benchmark, sample_targets};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
pub use suggest::{Suggestion, parse_history_entry, suggest};
