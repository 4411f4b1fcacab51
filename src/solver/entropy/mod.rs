//! Entropy scoring
//!
//! Shannon entropy over pattern distributions, the main signal used to rank
//! guesses.

mod calculator;

pub use calculator::{
    GuessMetrics, PatternDistribution, calculate_entropy, calculate_metrics, pattern_distribution,
    shannon_entropy,
};
