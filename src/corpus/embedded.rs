//! Embedded word lists
//!
//! The default word list asset, compiled into the binary.

/// Default word lists (`answer_words` and `guess_words`) as JSON
pub const WORD_LISTS_JSON: &str = include_str!("../../data/word_lists.json");
