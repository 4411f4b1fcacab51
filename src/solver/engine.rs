//! Main guess engine

use super::config::Configuration;
use super::frequency::LetterStats;
use super::pool::build_pool;
use super::selector::{self, ScoredCandidate};
use crate::core::{Constraint, Word, filter_words};
use crate::corpus::WordCorpus;

/// Guess selection over a corpus with a fixed configuration
///
/// Borrows the corpus; cheap to create per call.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    corpus: &'a WordCorpus,
    config: Configuration,
}

impl<'a> Solver<'a> {
    #[must_use]
    pub const fn new(corpus: &'a WordCorpus, config: Configuration) -> Self {
        Self { corpus, config }
    }

    #[must_use]
    pub const fn corpus(&self) -> &'a WordCorpus {
        self.corpus
    }

    #[must_use]
    pub const fn config(&self) -> &Configuration {
        &self.config
    }

    /// Guess for an empty history
    #[must_use]
    pub const fn first_guess(&self) -> &'a Word {
        self.corpus.opening_guess()
    }

    /// Answers consistent with every constraint, in corpus order
    #[must_use]
    pub fn candidates(&self, history: &[Constraint]) -> Vec<&'a Word> {
        filter_words(self.corpus.answers(), history)
    }

    #[must_use]
    pub fn count_candidates(&self, history: &[Constraint]) -> usize {
        self.corpus
            .answers()
            .iter()
            .filter(|w| history.iter().all(|c| c.is_satisfied_by(w)))
            .count()
    }

    /// Best next guess, or `None` when no answer fits the history
    ///
    /// An empty history gets the opening guess; a single remaining answer is
    /// returned without scoring.
    #[must_use]
    pub fn next_guess(&self, history: &[Constraint]) -> Option<&'a Word> {
        if history.is_empty() {
            return Some(self.first_guess());
        }

        let remaining = self.candidates(history);
        match remaining.as_slice() {
            [] => None,
            [only] => Some(*only),
            _ => self.best_of(&remaining).map(|c| c.word),
        }
    }

    /// Score the candidate pool for `history`, best first
    ///
    /// Only candidates actually evaluated are returned, so with early
    /// termination this may be a prefix of the pool.
    #[must_use]
    pub fn rank(&self, history: &[Constraint]) -> Vec<ScoredCandidate<'a>> {
        let remaining = self.candidates(history);
        let mut scored = self.score(&remaining);
        selector::rank(&mut scored);
        scored
    }

    /// Score the pool built from an explicit remaining set and pick the best
    #[must_use]
    pub fn best_of(&self, remaining: &[&'a Word]) -> Option<ScoredCandidate<'a>> {
        selector::select_best(&self.score(remaining))
    }

    fn score(&self, remaining: &[&'a Word]) -> Vec<ScoredCandidate<'a>> {
        if remaining.is_empty() {
            return Vec::new();
        }
        let stats = LetterStats::from_words(remaining);
        let pool = build_pool(remaining, self.corpus, &stats, &self.config);
        selector::score_pool(&pool, remaining, &self.config)
    }
}
