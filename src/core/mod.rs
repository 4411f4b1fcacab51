//! Core domain types for Wordle
//!
//! Words, feedback patterns and guess constraints. Everything here is a pure
//! function of its inputs.

mod constraint;
mod pattern;
mod word;

pub use constraint::{Constraint, filter_words, parse_word};
pub use pattern::{LetterState, Pattern};
pub use word::{ALPHABET_SIZE, WORD_LENGTH, Word, WordError, letter_index};

/// Maximum number of guesses in a game (standard Wordle rules)
pub const MAX_GUESSES: usize = 6;
