//! Benchmark command
//!
//! Plays the engine against a sample of answers and aggregates the results.

use crate::core::{Constraint, MAX_GUESSES, Word};
use crate::solver::Solver;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Outcome of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub target: String,
    pub guesses: Vec<String>,
    pub success: bool,
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    /// Average over solved games only
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Solved games by number of guesses
    pub distribution: BTreeMap<usize, usize>,
    pub failures: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl BenchmarkResult {
    /// Fraction of games solved within the guess limit
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total_words == 0 {
            return 0.0;
        }
        self.solved as f64 / self.total_words as f64
    }
}

/// Pick up to `count` distinct answers, reproducibly for a given seed
#[must_use]
pub fn sample_targets(answers: &[Word], count: usize, seed: u64) -> Vec<&Word> {
    let mut rng = StdRng::seed_from_u64(seed);
    answers.choose_multiple(&mut rng, count).collect()
}

/// Play one game against `target`, up to `MAX_GUESSES`
#[must_use]
pub fn play_game(solver: &Solver<'_>, target: &Word) -> GameOutcome {
    let mut history: Vec<Constraint> = Vec::with_capacity(MAX_GUESSES);
    let mut guesses = Vec::with_capacity(MAX_GUESSES);
    let mut success = false;

    while guesses.len() < MAX_GUESSES {
        let Some(guess) = solver.next_guess(&history) else {
            break;
        };
        guesses.push(guess.text().to_string());

        let constraint = Constraint::observe(guess, target);
        if constraint.pattern().is_perfect() {
            success = true;
            break;
        }
        history.push(constraint);
    }

    GameOutcome {
        target: target.text().to_string(),
        guesses,
        success,
    }
}

/// Run benchmark on a set of target words
///
/// `on_game` is called after every game, e.g. to advance a progress bar.
pub fn run_benchmark<F>(solver: &Solver<'_>, targets: &[&Word], mut on_game: F) -> BenchmarkResult
where
    F: FnMut(&GameOutcome),
{
    let start = Instant::now();
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut failures = Vec::new();
    let mut solved = 0;
    let mut total_guesses = 0;

    for &target in targets {
        let outcome = play_game(solver, target);
        on_game(&outcome);

        if outcome.success {
            solved += 1;
            total_guesses += outcome.guesses.len();
            *distribution.entry(outcome.guesses.len()).or_insert(0) += 1;
        } else {
            failures.push(outcome.target);
        }
    }

    let duration = start.elapsed();
    let average_guesses = if solved == 0 {
        0.0
    } else {
        total_guesses as f64 / solved as f64
    };
    let words_per_second = if duration.is_zero() {
        0.0
    } else {
        targets.len() as f64 / duration.as_secs_f64()
    };

    BenchmarkResult {
        total_words: targets.len(),
        solved,
        average_guesses,
        min_guesses: distribution.keys().next().copied().unwrap_or(0),
        max_guesses: distribution.keys().next_back().copied().unwrap_or(0),
        distribution,
        failures,
        duration,
        words_per_second,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::WordCorpus;
    use crate::solver::Configuration;

    #[test]
    fn sampling_is_reproducible_and_distinct() {
        let corpus = WordCorpus::embedded().unwrap();

        let first = sample_targets(corpus.answers(), 20, 7);
        let second = sample_targets(corpus.answers(), 20, 7);
        assert_eq!(first, second);

        let mut texts: Vec<&str> = first.iter().map(|w| w.text()).collect();
        texts.sort_unstable();
        texts.dedup();
        assert_eq!(texts.len(), 20);
    }

    #[test]
    fn sample_larger_than_list_takes_everything() {
        let corpus = WordCorpus::new(["CRANE", "SLATE"], ["CRANE", "SLATE"]).unwrap();
        assert_eq!(sample_targets(corpus.answers(), 10, 1).len(), 2);
    }

    #[test]
    fn benchmark_runs() {
        let corpus = WordCorpus::embedded().unwrap();
        let solver = Solver::new(&corpus, Configuration::DEFAULT);
        let targets = sample_targets(corpus.answers(), 10, 42);

        let mut games = 0;
        let result = run_benchmark(&solver, &targets, |_| games += 1);

        assert_eq!(games, 10);
        assert_eq!(result.total_words, 10);
        assert_eq!(result.solved, 10);
        assert!(result.failures.is_empty());
        assert!((result.success_rate() - 1.0).abs() < f64::EPSILON);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= MAX_GUESSES);
        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
        assert_eq!(result.distribution.values().sum::<usize>(), 10);
    }

    #[test]
    fn benchmark_empty_target_list() {
        let corpus = WordCorpus::new(["CRANE"], ["CRANE"]).unwrap();
        let solver = Solver::new(&corpus, Configuration::DEFAULT);

        let result = run_benchmark(&solver, &[], |_| {});
        assert_eq!(result.total_words, 0);
        assert_eq!(result.solved, 0);
        assert!(result.success_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn game_against_unknown_word_fails() {
        let corpus = WordCorpus::new(["CRANE", "SLATE"], ["CRANE", "SLATE"]).unwrap();
        let solver = Solver::new(&corpus, Configuration::DEFAULT);

        let outcome = play_game(&solver, &Word::new("CLOUD").unwrap());
        assert!(!outcome.success);
        assert!(outcome.guesses.len() <= MAX_GUESSES);
    }
}
