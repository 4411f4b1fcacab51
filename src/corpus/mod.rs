//! Word corpus
//!
//! The answer list and the guessable list, validated once and shared
//! read-only by everything else. Every answer must also be guessable.

mod embedded;
pub mod loader;

pub use embedded::WORD_LISTS_JSON;

use crate::core::Word;
use crate::error::InitError;
use crate::solver::entropy::calculate_entropy;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::Path;

/// Preferred opening guesses, tried in order
pub const OPENING_GUESSES: [&str; 5] = ["TARES", "SLATE", "CRANE", "CRATE", "SLANT"];

/// Validated answer and guessable word lists
#[derive(Debug, Clone)]
pub struct WordCorpus {
    answers: Vec<Word>,
    guessable: Vec<Word>,
    index: FxHashMap<String, usize>,
    answer_set: FxHashSet<String>,
    opening_guess: Word,
}

impl WordCorpus {
    /// Build a corpus from raw word lists
    ///
    /// Words are normalized to uppercase and duplicates are dropped, keeping
    /// the first occurrence.
    ///
    /// # Errors
    /// - `InitError::InvalidWord` for any entry that is not 5 ASCII letters
    /// - `InitError::EmptyList` if either list is empty
    /// - `InitError::AnswerNotGuessable` if an answer is missing from the
    ///   guessable list
    pub fn new<A, G>(answers: A, guessable: G) -> Result<Self, InitError>
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        G: IntoIterator,
        G::Item: AsRef<str>,
    {
        let answers = parse_list("answer", answers)?;
        let guessable = parse_list("guess", guessable)?;

        let index: FxHashMap<String, usize> = guessable
            .iter()
            .enumerate()
            .map(|(i, w)| (w.text().to_string(), i))
            .collect();

        if let Some(missing) = answers.iter().find(|w| !index.contains_key(w.text())) {
            return Err(InitError::AnswerNotGuessable(missing.text().to_string()));
        }

        let opening_guess = choose_opening_guess(&answers, &guessable, &index)
            .ok_or(InitError::EmptyList("guess"))?;
        let answer_set = answers.iter().map(|w| w.text().to_string()).collect();

        Ok(Self {
            answers,
            guessable,
            index,
            answer_set,
            opening_guess,
        })
    }

    /// Build the corpus from the word lists compiled into the binary
    ///
    /// # Errors
    /// Returns `InitError` if the embedded asset fails validation.
    pub fn embedded() -> Result<Self, InitError> {
        Self::from_json_str(WORD_LISTS_JSON)
    }

    /// Build the corpus from a JSON document
    ///
    /// # Errors
    /// Returns `InitError` if the JSON is malformed or the lists are invalid.
    pub fn from_json_str(json: &str) -> Result<Self, InitError> {
        let lists = loader::parse_word_lists(json)?;
        Self::new(lists.answer_words, lists.guess_words)
    }

    /// Build the corpus from a JSON file on disk
    ///
    /// # Errors
    /// Returns `InitError` if the file cannot be read or fails validation.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, InitError> {
        let lists = loader::load_from_file(path)?;
        Self::new(lists.answer_words, lists.guess_words)
    }

    /// Words that may be the hidden answer
    #[inline]
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Words accepted as guesses (a superset of the answers)
    #[inline]
    #[must_use]
    pub fn guessable(&self) -> &[Word] {
        &self.guessable
    }

    /// Guess used when there is no history yet
    #[inline]
    #[must_use]
    pub const fn opening_guess(&self) -> &Word {
        &self.opening_guess
    }

    /// Look up a guessable word by its (uppercase) text
    #[must_use]
    pub fn lookup(&self, text: &str) -> Option<&Word> {
        self.index.get(text).map(|&i| &self.guessable[i])
    }

    #[must_use]
    pub fn is_guessable(&self, word: &Word) -> bool {
        self.index.contains_key(word.text())
    }

    #[must_use]
    pub fn is_answer(&self, word: &Word) -> bool {
        self.answer_set.contains(word.text())
    }
}

fn parse_list<I>(list: &'static str, raw: I) -> Result<Vec<Word>, InitError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut seen = FxHashSet::default();
    let mut words = Vec::new();

    for entry in raw {
        let entry = entry.as_ref();
        let word = Word::new(entry).map_err(|source| InitError::InvalidWord {
            list,
            word: entry.to_string(),
            source,
        })?;
        if seen.insert(word.text().to_string()) {
            words.push(word);
        }
    }

    if words.is_empty() {
        return Err(InitError::EmptyList(list));
    }
    Ok(words)
}

/// First preferred opening that is guessable, else the guessable word with
/// the highest entropy over all answers (alphabetical on ties)
fn choose_opening_guess(
    answers: &[Word],
    guessable: &[Word],
    index: &FxHashMap<String, usize>,
) -> Option<Word> {
    if let Some(&i) = OPENING_GUESSES.iter().find_map(|w| index.get(*w)) {
        return Some(guessable[i].clone());
    }

    let answer_refs: Vec<&Word> = answers.iter().collect();
    guessable
        .par_iter()
        .map(|guess| (guess, calculate_entropy(guess, &answer_refs)))
        .max_by(|(w1, e1), (w2, e2)| e1.total_cmp(e2).then_with(|| w2.cmp(w1)))
        .map(|(word, _)| word.clone())
}
