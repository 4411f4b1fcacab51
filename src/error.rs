//! Error types for the guess engine
//!
//! `InitError` covers corpus loading, `InputError` covers malformed input
//! rejected at the boundary, and `EngineError` is what the `api` layer returns.

use crate::core::WordError;
use std::path::PathBuf;
use thiserror::Error;

/// Malformed input rejected before it reaches the algorithms
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("invalid word {word:?}: {source}")]
    Word {
        word: String,
        #[source]
        source: WordError,
    },
    #[error("pattern must have 5 marks, got {0}")]
    PatternLength(usize),
    #[error("invalid pattern mark {0:?}, expected G, Y or X")]
    PatternMark(String),
    #[error("invalid configuration: {0}")]
    Configuration(String),
    #[error("expected GUESS:PATTERN, got {0:?}")]
    HistoryEntry(String),
}

/// Failure to build the word corpus
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to read word lists from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed word list JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0} word list is empty")]
    EmptyList(&'static str),
    #[error("invalid entry {word:?} in {list} word list: {source}")]
    InvalidWord {
        list: &'static str,
        word: String,
        #[source]
        source: WordError,
    },
    #[error("answer word {0} is not in the guessable word list")]
    AnswerNotGuessable(String),
    #[error("word lists are already initialized")]
    AlreadyInitialized,
}

/// Errors surfaced by `WordleHelper`
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Init(#[from] InitError),
    #[error("word lists have not been initialized")]
    NotInitialized,
    #[error(transparent)]
    InvalidInput(#[from] InputError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_error_messages() {
        let err = InputError::Word {
            word: "abc".to_string(),
            source: WordError::InvalidLength(3),
        };
        assert_eq!(
            err.to_string(),
            "invalid word \"abc\": word must be exactly 5 letters, got 3"
        );
        assert_eq!(
            InputError::PatternMark("Q".to_string()).to_string(),
            "invalid pattern mark \"Q\", expected G, Y or X"
        );
    }

    #[test]
    fn engine_error_wraps_sources() {
        let err: EngineError = InputError::PatternLength(4).into();
        assert!(matches!(
            err,
            EngineError::InvalidInput(InputError::PatternLength(4))
        ));

        let err: EngineError = InitError::AnswerNotGuessable("CRANE".to_string()).into();
        assert_eq!(
            err.to_string(),
            "answer word CRANE is not in the guessable word list"
        );
    }
}
