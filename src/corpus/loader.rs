//! Word list loading utilities
//!
//! Word lists are stored as a JSON document with two top-level arrays,
//! `answer_words` and `guess_words`, each holding uppercase 5-letter strings.

use crate::error::InitError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Raw contents of a word list file, before validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordListFile {
    pub answer_words: Vec<String>,
    pub guess_words: Vec<String>,
}

/// Parse a word list document
///
/// # Errors
///
/// Returns `InitError::Json` if the document is not valid JSON or either array
/// is missing.
///
/// # Examples
/// ```
/// use wordle_helper::corpus::loader::parse_word_lists;
///
/// let lists = parse_word_lists(r#"{"answer_words": ["CRANE"], "guess_words": ["CRANE", "SLATE"]}"#).unwrap();
/// assert_eq!(lists.answer_words, ["CRANE"]);
/// assert_eq!(lists.guess_words.len(), 2);
/// ```
pub fn parse_word_lists(json: &str) -> Result<WordListFile, InitError> {
    Ok(serde_json::from_str(json)?)
}

/// Load and parse a word list file
///
/// # Errors
///
/// Returns `InitError::Io` if the file cannot be read, or `InitError::Json`
/// if its contents are malformed.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordListFile, InitError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| InitError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_word_lists(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_arrays() {
        let lists = parse_word_lists(
            r#"{"answer_words": ["CRANE", "SLATE"], "guess_words": ["CRANE", "SLATE", "TARES"]}"#,
        )
        .unwrap();

        assert_eq!(lists.answer_words, ["CRANE", "SLATE"]);
        assert_eq!(lists.guess_words, ["CRANE", "SLATE", "TARES"]);
    }

    #[test]
    fn missing_array_is_an_error() {
        let result = parse_word_lists(r#"{"answer_words": ["CRANE"]}"#);
        assert!(matches!(result, Err(InitError::Json(_))));
    }

    #[test]
    fn non_string_entries_are_an_error() {
        let result = parse_word_lists(r#"{"answer_words": [1, 2], "guess_words": []}"#);
        assert!(matches!(result, Err(InitError::Json(_))));
    }

    #[test]
    fn missing_file_reports_path() {
        let result = load_from_file("does/not/exist.json");
        match result {
            Err(InitError::Io { path, .. }) => assert_eq!(path, Path::new("does/not/exist.json")),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
