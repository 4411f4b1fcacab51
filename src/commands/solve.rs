//! Word solving command
//!
//! Plays the engine against a known target and records each step.

use crate::core::{Constraint, MAX_GUESSES, Pattern, parse_word};
use crate::error::InputError;
use crate::solver::Solver;
use crate::solver::entropy::calculate_entropy;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: MAX_GUESSES,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Entropy of the guess over the candidates it was made against
    pub entropy: Option<f64>,
}

/// Solve a specific word
///
/// Stops on a perfect pattern, after `max_guesses`, or when no candidate
/// fits the history (a target outside the answer list).
///
/// # Errors
///
/// Returns `InputError::Word` if the target is not a valid 5-letter word.
pub fn solve_word(config: SolveConfig, solver: &Solver<'_>) -> Result<SolveResult, InputError> {
    let target = parse_word(&config.target)?;

    let mut history: Vec<Constraint> = Vec::new();
    let mut guesses: Vec<GuessStep> = Vec::new();
    let mut success = false;

    for _ in 0..config.max_guesses {
        let candidates = solver.candidates(&history);
        let Some(guess) = solver.next_guess(&history) else {
            break;
        };

        let entropy = (candidates.len() > 1).then(|| calculate_entropy(guess, &candidates));
        let constraint = Constraint::observe(guess, &target);
        let pattern = constraint.pattern();
        history.push(constraint);

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            pattern,
            candidates_before: candidates.len(),
            candidates_after: solver.count_candidates(&history),
            entropy,
        });

        if pattern.is_perfect() {
            success = true;
            break;
        }
    }

    Ok(SolveResult {
        success,
        guesses,
        target: target.text().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::WordCorpus;
    use crate::solver::Configuration;

    #[test]
    fn solves_every_answer_within_limit() {
        let corpus = WordCorpus::embedded().unwrap();
        let solver = Solver::new(&corpus, Configuration::DEFAULT);

        for target in ["CLOUD", "HUMUS", "MUMMY", "CRANE"] {
            let result = solve_word(SolveConfig::new(target.to_string()), &solver).unwrap();
            assert!(result.success, "failed to solve {target}");
            assert!(result.guesses.len() <= MAX_GUESSES);
            assert_eq!(result.guesses.last().map(|s| s.word.as_str()), Some(target));
        }
    }

    #[test]
    fn solve_records_history() {
        let corpus = WordCorpus::embedded().unwrap();
        let solver = Solver::new(&corpus, Configuration::DEFAULT);

        let result = solve_word(SolveConfig::new("cloth".to_string()), &solver).unwrap();

        assert_eq!(result.target, "CLOTH");
        assert_eq!(result.guesses[0].word, corpus.opening_guess().text());
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
    }

    #[test]
    fn invalid_target_is_an_error() {
        let corpus = WordCorpus::embedded().unwrap();
        let solver = Solver::new(&corpus, Configuration::DEFAULT);

        let result = solve_word(SolveConfig::new("zz".to_string()), &solver);
        assert!(matches!(result, Err(InputError::Word { .. })));
    }

    #[test]
    fn unknown_target_stops_when_candidates_run_out() {
        let corpus = WordCorpus::new(["CRANE", "SLATE"], ["CRANE", "SLATE", "TARES"]).unwrap();
        let solver = Solver::new(&corpus, Configuration::DEFAULT);

        let result = solve_word(SolveConfig::new("ZZZZZ".to_string()), &solver).unwrap();
        assert!(!result.success);
        assert!(result.guesses.len() < MAX_GUESSES);
    }

    #[test]
    fn respects_guess_limit() {
        let corpus = WordCorpus::embedded().unwrap();
        let solver = Solver::new(&corpus, Configuration::DEFAULT);
        let mut config = SolveConfig::new("mummy".to_string());
        config.max_guesses = 1;

        let result = solve_word(config, &solver).unwrap();
        assert_eq!(result.guesses.len(), 1);
    }
}
