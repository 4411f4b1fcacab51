//! Letter frequency scoring
//!
//! Rewards guesses built from letters common among the remaining candidates,
//! both anywhere in the word and at specific positions.

use crate::core::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_index};

/// Share of the score taken by overall letter presence
pub const PRESENCE_WEIGHT: f64 = 0.6;
/// Share of the score taken by per-position letter frequency
pub const POSITIONAL_WEIGHT: f64 = 0.4;

/// Letter statistics over a set of candidate words
#[derive(Debug, Clone, PartialEq)]
pub struct LetterStats {
    /// Fraction of words containing each letter at least once
    presence: [f64; ALPHABET_SIZE],
    /// Fraction of words with each letter at each position
    positional: [[f64; ALPHABET_SIZE]; WORD_LENGTH],
}

impl LetterStats {
    /// Tally letter presence and positions over `words`
    ///
    /// An empty slice gives all-zero statistics.
    #[must_use]
    pub fn from_words(words: &[&Word]) -> Self {
        let mut presence = [0u32; ALPHABET_SIZE];
        let mut positional = [[0u32; ALPHABET_SIZE]; WORD_LENGTH];

        for word in words {
            let mut seen = [false; ALPHABET_SIZE];
            for (pos, &letter) in word.letters().iter().enumerate() {
                let idx = letter_index(letter);
                positional[pos][idx] += 1;
                if !seen[idx] {
                    seen[idx] = true;
                    presence[idx] += 1;
                }
            }
        }

        let total = words.len().max(1) as f64;
        Self {
            presence: presence.map(|c| f64::from(c) / total),
            positional: positional.map(|row| row.map(|c| f64::from(c) / total)),
        }
    }

    /// Fraction of words containing `letter`
    #[must_use]
    pub fn presence(&self, letter: u8) -> f64 {
        self.presence[letter_index(letter)]
    }

    /// Fraction of words with `letter` at `position`
    #[must_use]
    pub fn positional(&self, position: usize, letter: u8) -> f64 {
        self.positional[position][letter_index(letter)]
    }

    /// Frequency score of a guess, in `[0, 1]`
    ///
    /// Repeated letters count once toward presence, so words with five
    /// distinct common letters score highest.
    #[must_use]
    pub fn score(&self, word: &Word) -> f64 {
        let mut seen = [false; ALPHABET_SIZE];
        let mut presence = 0.0;
        let mut positional = 0.0;

        for (pos, &letter) in word.letters().iter().enumerate() {
            let idx = letter_index(letter);
            positional += self.positional[pos][idx];
            if !seen[idx] {
                seen[idx] = true;
                presence += self.presence[idx];
            }
        }

        let len = WORD_LENGTH as f64;
        PRESENCE_WEIGHT * presence / len + POSITIONAL_WEIGHT * positional / len
    }
}

/// Frequency score of `guess` against `remaining` in one call
///
/// # Examples
/// ```
/// use wordle_helper::core::Word;
/// use wordle_helper::solver::frequency::frequency_score;
///
/// let remaining = [Word::new("crane").unwrap()];
/// let refs: Vec<&Word> = remaining.iter().collect();
///
/// let score = frequency_score(&Word::new("crane").unwrap(), &refs);
/// assert!((score - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn frequency_score(guess: &Word, remaining: &[&Word]) -> f64 {
    LetterStats::from_words(remaining).score(guess)
}
