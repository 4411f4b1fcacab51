//! Terminal output formatting
//!
//! Everything the binary prints goes through here.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_benchmark_result, print_configuration, print_pattern,
    print_solve_result, print_suggestion,
};
pub use formatters::game_progress_bar;
