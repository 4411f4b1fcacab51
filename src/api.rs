//! String-level interface to the engine
//!
//! `WordleHelper` owns the corpus (set once) and the active configuration,
//! validates every string it receives, and returns plain strings. It is the
//! surface a host application or a foreign-language binding wraps.

use crate::core::{Constraint, Pattern, Word, filter_words, parse_word};
use crate::corpus::WordCorpus;
use crate::error::{EngineError, InitError, InputError};
use crate::solver::entropy::calculate_entropy;
use crate::solver::{ConfigStore, Configuration, Preset, Solver};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// One past guess as received from a caller
///
/// `pattern` holds one mark per letter: `G`, `Y` or `X` (case-insensitive,
/// colour names also accepted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintInput {
    pub word: String,
    pub pattern: Vec<String>,
}

impl ConstraintInput {
    pub fn new<S: AsRef<str>>(word: impl Into<String>, marks: &[S]) -> Self {
        Self {
            word: word.into(),
            pattern: marks.iter().map(|m| m.as_ref().to_string()).collect(),
        }
    }

    /// Validate and compile into a `Constraint`
    ///
    /// # Errors
    /// Returns `InputError` for a malformed word or pattern.
    pub fn to_constraint(&self) -> Result<Constraint, InputError> {
        Constraint::parse(&self.word, &self.pattern)
    }
}

fn parse_constraints(constraints: &[ConstraintInput]) -> Result<Vec<Constraint>, InputError> {
    constraints.iter().map(ConstraintInput::to_constraint).collect()
}

fn parse_words<S: AsRef<str>>(words: &[S]) -> Result<Vec<Word>, InputError> {
    words.iter().map(|w| parse_word(w.as_ref())).collect()
}

fn texts<'a>(words: impl IntoIterator<Item = &'a Word>) -> Vec<String> {
    words.into_iter().map(|w| w.text().to_string()).collect()
}

/// Engine context: a corpus that is initialized once plus a replaceable
/// configuration
///
/// Every word-level call fails with `EngineError::NotInitialized` until one
/// of the `initialize*` methods succeeds. Configuration calls work at any
/// time.
///
/// # Examples
/// ```
/// use wordle_helper::api::{ConstraintInput, WordleHelper};
///
/// let helper = WordleHelper::new();
/// helper.initialize(["CRANE", "SLATE"], ["CRANE", "SLATE", "TARES"]).unwrap();
///
/// assert_eq!(helper.simulate_pattern("CRANE", "SLATE").unwrap(), "XXGXG");
///
/// let history = [ConstraintInput::new("TARES", &["Y", "Y", "X", "Y", "Y"])];
/// assert_eq!(helper.get_best_guess(&history).unwrap().as_deref(), Some("SLATE"));
/// ```
#[derive(Debug, Default)]
pub struct WordleHelper {
    corpus: OnceLock<Arc<WordCorpus>>,
    config: ConfigStore,
}

impl WordleHelper {
    /// Uninitialized helper with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uninitialized helper with a custom starting configuration
    ///
    /// # Errors
    /// Returns `InputError::Configuration` if the configuration is invalid.
    pub fn with_configuration(config: Configuration) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            corpus: OnceLock::new(),
            config: ConfigStore::new(config),
        })
    }

    /// Load the corpus from raw word lists
    ///
    /// # Errors
    /// Returns `EngineError::Init` if the lists are invalid or the helper is
    /// already initialized.
    pub fn initialize<A, G>(&self, answers: A, guessable: G) -> Result<(), EngineError>
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        G: IntoIterator,
        G::Item: AsRef<str>,
    {
        self.ensure_uninitialized()?;
        self.install(WordCorpus::new(answers, guessable)?)
    }

    /// Load the corpus from the word lists compiled into the crate
    ///
    /// # Errors
    /// Returns `EngineError::Init` if the helper is already initialized.
    pub fn initialize_embedded(&self) -> Result<(), EngineError> {
        self.ensure_uninitialized()?;
        self.install(WordCorpus::embedded()?)
    }

    /// Load the corpus from a JSON word list file
    ///
    /// # Errors
    /// Returns `EngineError::Init` if the file cannot be read or parsed, the
    /// lists are invalid, or the helper is already initialized.
    pub fn initialize_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), EngineError> {
        self.ensure_uninitialized()?;
        self.install(WordCorpus::from_file(path)?)
    }

    /// Install an already built corpus
    ///
    /// # Errors
    /// Returns `InitError::AlreadyInitialized` if a corpus is already set.
    pub fn install(&self, corpus: WordCorpus) -> Result<(), EngineError> {
        self.corpus
            .set(Arc::new(corpus))
            .map_err(|_| InitError::AlreadyInitialized.into())
    }

    fn ensure_uninitialized(&self) -> Result<(), InitError> {
        if self.corpus.get().is_some() {
            return Err(InitError::AlreadyInitialized);
        }
        Ok(())
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.corpus.get().is_some()
    }

    /// The loaded corpus
    ///
    /// # Errors
    /// Returns `EngineError::NotInitialized` before initialization.
    pub fn corpus(&self) -> Result<&WordCorpus, EngineError> {
        self.corpus
            .get()
            .map(Arc::as_ref)
            .ok_or(EngineError::NotInitialized)
    }

    /// Shared handle to the loaded corpus
    ///
    /// # Errors
    /// Returns `EngineError::NotInitialized` before initialization.
    pub fn shared_corpus(&self) -> Result<Arc<WordCorpus>, EngineError> {
        self.corpus.get().cloned().ok_or(EngineError::NotInitialized)
    }

    /// A solver over the corpus using the current configuration
    ///
    /// # Errors
    /// Returns `EngineError::NotInitialized` before initialization.
    pub fn solver(&self) -> Result<Solver<'_>, EngineError> {
        Ok(Solver::new(self.corpus()?, self.config.get()))
    }

    /// Feedback `guess` would receive if `target` were the answer, as a
    /// `G`/`Y`/`X` string
    ///
    /// # Errors
    /// `NotInitialized`, or `InvalidInput` for a malformed word.
    pub fn simulate_pattern(&self, guess: &str, target: &str) -> Result<String, EngineError> {
        self.corpus()?;
        let guess = parse_word(guess)?;
        let target = parse_word(target)?;
        Ok(Pattern::calculate(&guess, &target).to_string())
    }

    /// Keep the candidates consistent with every constraint, in input order
    ///
    /// Candidates are normalized to uppercase; they need not be in the
    /// corpus.
    ///
    /// # Errors
    /// `NotInitialized`, or `InvalidInput` for a malformed word or pattern.
    pub fn filter_words<S: AsRef<str>>(
        &self,
        candidates: &[S],
        constraints: &[ConstraintInput],
    ) -> Result<Vec<String>, EngineError> {
        self.corpus()?;
        let candidates = parse_words(candidates)?;
        let constraints = parse_constraints(constraints)?;
        Ok(texts(filter_words(&candidates, &constraints)))
    }

    /// Expected information (bits) from guessing `candidate` when `remaining`
    /// are the equally likely answers
    ///
    /// # Errors
    /// `NotInitialized`, or `InvalidInput` for a malformed word.
    pub fn calculate_entropy<S: AsRef<str>>(
        &self,
        candidate: &str,
        remaining: &[S],
    ) -> Result<f64, EngineError> {
        self.corpus()?;
        let candidate = parse_word(candidate)?;
        let remaining = parse_words(remaining)?;
        let refs: Vec<&Word> = remaining.iter().collect();
        Ok(calculate_entropy(&candidate, &refs))
    }

    /// Best next guess under the current configuration
    ///
    /// `Ok(None)` when no answer is consistent with the constraints.
    ///
    /// # Errors
    /// `NotInitialized`, or `InvalidInput` for a malformed constraint.
    pub fn get_best_guess(
        &self,
        constraints: &[ConstraintInput],
    ) -> Result<Option<String>, EngineError> {
        let solver = self.solver()?;
        let constraints = parse_constraints(constraints)?;
        Ok(solver
            .next_guess(&constraints)
            .map(|w| w.text().to_string()))
    }

    /// Guess to open a game with
    ///
    /// # Errors
    /// `NotInitialized`.
    pub fn get_optimal_first_guess(&self) -> Result<String, EngineError> {
        Ok(self.corpus()?.opening_guess().text().to_string())
    }

    /// Whether `word` is accepted as a guess; malformed text is simply not valid
    ///
    /// # Errors
    /// `NotInitialized`.
    pub fn is_valid_word(&self, word: &str) -> Result<bool, EngineError> {
        let corpus = self.corpus()?;
        Ok(Word::new(word).is_ok_and(|w| corpus.is_guessable(&w)))
    }

    /// # Errors
    /// `NotInitialized`.
    pub fn answer_words(&self) -> Result<Vec<String>, EngineError> {
        Ok(texts(self.corpus()?.answers()))
    }

    /// # Errors
    /// `NotInitialized`.
    pub fn guess_words(&self) -> Result<Vec<String>, EngineError> {
        Ok(texts(self.corpus()?.guessable()))
    }

    /// Answers still consistent with the constraints, in corpus order
    ///
    /// # Errors
    /// `NotInitialized`, or `InvalidInput` for a malformed constraint.
    pub fn remaining_words(
        &self,
        constraints: &[ConstraintInput],
    ) -> Result<Vec<String>, EngineError> {
        let solver = self.solver()?;
        let constraints = parse_constraints(constraints)?;
        Ok(texts(solver.candidates(&constraints)))
    }

    #[must_use]
    pub fn configuration(&self) -> Configuration {
        self.config.get()
    }

    /// Replace the configuration
    ///
    /// # Errors
    /// Returns `InvalidInput` (and keeps the old value) for a zero cap or a
    /// negative or non-finite threshold.
    pub fn set_configuration(&self, config: Configuration) -> Result<(), EngineError> {
        Ok(self.config.set(config)?)
    }

    pub fn apply_reference_mode_preset(&self) {
        self.config.apply_reference_preset();
    }

    pub fn reset_to_default_configuration(&self) {
        self.config.reset();
    }

    #[must_use]
    pub fn preset(&self) -> Preset {
        self.config.get().preset()
    }
}
