//! Candidate pool construction
//!
//! Decides which words are scored as the next guess: the remaining answers,
//! optionally joined by a fixed list of probe words, in a deterministic order
//! and capped in size.

use super::config::Configuration;
use super::frequency::LetterStats;
use crate::core::Word;
use crate::corpus::WordCorpus;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// Guesses known to split the answer list well, evaluated for their
/// information value rather than as possible answers
///
/// Only entries present in the guessable list are used.
pub const PROBE_WORDS: [&str; 23] = [
    "SLATE", "CRANE", "TRACE", "SLANT", "CRATE", "CARTE", "LEAST", "STARE", "TARES", "RAISE",
    "ARISE", "SOARE", "ADIEU", "AUDIO", "ROATE", "OUIJA", "AUREI", "OURIE", "PSYCH", "GLYPH",
    "VOMIT", "JUMBO", "ZEBRA",
];

/// A word in the candidate pool
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolEntry<'a> {
    pub word: &'a Word,
    /// Letter frequency score against the remaining set
    pub frequency: f64,
    /// Whether the word is itself still a possible answer
    pub is_remaining: bool,
}

/// Assemble the words to score for the next guess
///
/// Ordered by frequency score (descending), then remaining words first, then
/// alphabetically, and truncated to `config.candidate_cap`. Never empty when
/// `remaining` is non-empty.
#[must_use]
pub fn build_pool<'a>(
    remaining: &[&'a Word],
    corpus: &'a WordCorpus,
    stats: &LetterStats,
    config: &Configuration,
) -> Vec<PoolEntry<'a>> {
    let mut pool: Vec<PoolEntry<'a>> = remaining
        .iter()
        .map(|&word| PoolEntry {
            word,
            frequency: stats.score(word),
            is_remaining: true,
        })
        .collect();

    if config.include_probe_words {
        let mut in_pool: FxHashSet<&str> = remaining.iter().map(|w| w.text()).collect();
        for word in PROBE_WORDS.iter().filter_map(|probe| corpus.lookup(probe)) {
            if in_pool.insert(word.text()) {
                pool.push(PoolEntry {
                    word,
                    frequency: stats.score(word),
                    is_remaining: false,
                });
            }
        }
    }

    pool.sort_by(pool_order);
    pool.truncate(config.candidate_cap);
    pool
}

fn pool_order(a: &PoolEntry<'_>, b: &PoolEntry<'_>) -> Ordering {
    b.frequency
        .total_cmp(&a.frequency)
        .then_with(|| b.is_remaining.cmp(&a.is_remaining))
        .then_with(|| a.word.cmp(b.word))
}
