//! Candidate scoring and best-guess selection
//!
//! Combines entropy with letter frequency, favours words that can still win
//! outright, and optionally stops early once a candidate is good enough.

use super::config::Configuration;
use super::entropy::calculate_entropy;
use super::pool::PoolEntry;
use crate::core::Word;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Weight of entropy in the combined score
pub const ENTROPY_WEIGHT: f64 = 1.0;
/// Weight of the letter frequency score in the combined score
pub const STATISTICAL_WEIGHT: f64 = 0.2;
/// Bonus for guesses that could be the answer
pub const PRIME_SUSPECT_BONUS: f64 = 0.1;

/// A pool word with its scores
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub word: &'a Word,
    pub entropy: f64,
    pub frequency: f64,
    pub combined: f64,
    pub is_remaining: bool,
}

impl<'a> ScoredCandidate<'a> {
    /// Score one pool entry against the remaining set
    #[must_use]
    pub fn evaluate(entry: &PoolEntry<'a>, remaining: &[&Word], config: &Configuration) -> Self {
        let entropy = calculate_entropy(entry.word, remaining);
        let mut combined = if config.entropy_only_scoring {
            entropy
        } else {
            ENTROPY_WEIGHT * entropy + STATISTICAL_WEIGHT * entry.frequency
        };
        if entry.is_remaining {
            combined += PRIME_SUSPECT_BONUS;
        }

        Self {
            word: entry.word,
            entropy,
            frequency: entry.frequency,
            combined,
            is_remaining: entry.is_remaining,
        }
    }
}

/// Ranking order: higher combined score wins, then remaining words, then
/// alphabetical order. `Greater` means `a` is the better guess.
#[must_use]
pub fn compare(a: &ScoredCandidate<'_>, b: &ScoredCandidate<'_>) -> Ordering {
    a.combined
        .total_cmp(&b.combined)
        .then_with(|| a.is_remaining.cmp(&b.is_remaining))
        .then_with(|| b.word.cmp(a.word))
}

/// Score the pool, honouring early termination
///
/// With early termination enabled the pool is scored in order, one parallel
/// batch at a time, and scoring stops right after the first candidate whose
/// entropy reaches the threshold. Results keep pool order.
#[must_use]
pub fn score_pool<'a>(
    pool: &[PoolEntry<'a>],
    remaining: &[&Word],
    config: &Configuration,
) -> Vec<ScoredCandidate<'a>> {
    if !config.early_termination_enabled {
        return pool
            .par_iter()
            .map(|entry| ScoredCandidate::evaluate(entry, remaining, config))
            .collect();
    }

    let batch_size = rayon::current_num_threads().max(1);
    let mut scored = Vec::with_capacity(pool.len().min(batch_size));

    for batch in pool.chunks(batch_size) {
        let results: Vec<ScoredCandidate<'a>> = batch
            .par_iter()
            .map(|entry| ScoredCandidate::evaluate(entry, remaining, config))
            .collect();

        for candidate in results {
            let good_enough = candidate.entropy >= config.early_termination_threshold;
            scored.push(candidate);
            if good_enough {
                return scored;
            }
        }
    }
    scored
}

/// Best scored candidate, if any
#[must_use]
pub fn select_best<'a>(scored: &[ScoredCandidate<'a>]) -> Option<ScoredCandidate<'a>> {
    scored.iter().copied().max_by(compare)
}

/// Sort scored candidates best first
pub fn rank(scored: &mut [ScoredCandidate<'_>]) {
    scored.sort_by(|a, b| compare(b, a));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn scored<'a>(word: &'a Word, combined: f64, is_remaining: bool) -> ScoredCandidate<'a> {
        ScoredCandidate {
            word,
            entropy: combined,
            frequency: 0.0,
            combined,
            is_remaining,
        }
    }

    #[test]
    fn combined_score_uses_weights_and_bonus() {
        let crane = word("crane");
        let slate = word("slate");
        let remaining = [&crane, &slate];
        let entry = PoolEntry {
            word: &crane,
            frequency: 0.5,
            is_remaining: true,
        };

        let combined = ScoredCandidate::evaluate(&entry, &remaining, &Configuration::DEFAULT);
        assert!((combined.entropy - 1.0).abs() < 1e-9);
        assert!((combined.combined - (1.0 + 0.2 * 0.5 + 0.1)).abs() < 1e-9);

        let config = Configuration {
            entropy_only_scoring: true,
            ..Configuration::DEFAULT
        };
        let entropy_only = ScoredCandidate::evaluate(&entry, &remaining, &config);
        assert!((entropy_only.combined - 1.1).abs() < 1e-9);
    }

    #[test]
    fn ties_prefer_remaining_then_alphabetical() {
        let (a, b, c) = (word("aback"), word("baker"), word("cacao"));
        let candidates = [
            scored(&a, 1.0, false),
            scored(&c, 1.0, true),
            scored(&b, 1.0, true),
        ];

        let best = select_best(&candidates).unwrap();
        assert_eq!(best.word.text(), "BAKER");

        let mut ranked = candidates;
        rank(&mut ranked);
        let order: Vec<&str> = ranked.iter().map(|c| c.word.text()).collect();
        assert_eq!(order, ["BAKER", "CACAO", "ABACK"]);
    }

    #[test]
    fn higher_score_beats_remaining_bonus_order() {
        let (a, b) = (word("aback"), word("baker"));
        let candidates = [scored(&a, 2.0, false), scored(&b, 1.5, true)];
        assert_eq!(select_best(&candidates).unwrap().word.text(), "ABACK");
    }

    #[test]
    fn early_termination_stops_after_threshold() {
        let slate = word("slate");
        let crony = word("crony");
        let zzzzz = word("zzzzz");
        let remaining = [&slate, &crony];
        let pool = [
            PoolEntry {
                word: &zzzzz,
                frequency: 0.0,
                is_remaining: false,
            },
            PoolEntry {
                word: &slate,
                frequency: 0.0,
                is_remaining: true,
            },
            PoolEntry {
                word: &crony,
                frequency: 0.0,
                is_remaining: true,
            },
        ];
        let config = Configuration {
            early_termination_threshold: 1.0,
            ..Configuration::DEFAULT
        };

        let results = score_pool(&pool, &remaining, &config);
        let evaluated: Vec<&str> = results.iter().map(|c| c.word.text()).collect();
        assert_eq!(evaluated, ["ZZZZZ", "SLATE"]);

        let exhaustive = Configuration {
            early_termination_enabled: false,
            ..config
        };
        assert_eq!(score_pool(&pool, &remaining, &exhaustive).len(), 3);
    }

    #[test]
    fn empty_pool_selects_nothing() {
        let scored = score_pool(&[], &[], &Configuration::DEFAULT);
        assert!(scored.is_empty());
        assert!(select_best(&scored).is_none());
    }
}
