//! Guess constraints and candidate filtering
//!
//! A `Constraint` is one past guess together with the feedback it produced.
//! A word stays a candidate only while it would have produced exactly that
//! feedback for every constraint in the history.

use super::pattern::{LetterState, Pattern};
use super::word::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_index};
use crate::error::InputError;

/// One past guess and the pattern it produced
///
/// The pattern is compiled into direct letter checks on construction, so
/// filtering never has to re-simulate the guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    guess: Word,
    pattern: Pattern,
    states: [LetterState; WORD_LENGTH],
    counts: Vec<LetterCount>,
    producible: bool,
}

/// Required number of copies of one guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LetterCount {
    letter: u8,
    /// Green plus yellow marks for this letter
    min: u8,
    /// A gray mark caps the count at `min`
    exact: bool,
}

impl Constraint {
    /// Compile a constraint from a guess and its feedback
    #[must_use]
    pub fn new(guess: Word, pattern: Pattern) -> Self {
        let states = pattern.states();
        let mut counts: Vec<LetterCount> = Vec::with_capacity(WORD_LENGTH);
        let mut gray_seen = [false; ALPHABET_SIZE];
        let mut producible = true;

        for (&letter, &state) in guess.letters().iter().zip(&states) {
            let slot = if let Some(pos) = counts.iter().position(|c| c.letter == letter) {
                pos
            } else {
                counts.push(LetterCount {
                    letter,
                    min: 0,
                    exact: false,
                });
                counts.len() - 1
            };
            let count = &mut counts[slot];

            match state {
                LetterState::Green => count.min += 1,
                LetterState::Yellow => {
                    // Yellows are handed out left to right, so a yellow after
                    // a gray of the same letter is never produced
                    if gray_seen[letter_index(letter)] {
                        producible = false;
                    }
                    count.min += 1;
                }
                LetterState::Gray => {
                    count.exact = true;
                    gray_seen[letter_index(letter)] = true;
                }
            }
        }

        Self {
            guess,
            pattern,
            states,
            counts,
            producible,
        }
    }

    /// Parse a constraint from boundary strings
    ///
    /// # Errors
    /// Returns `InputError` if the word or any pattern mark is malformed.
    pub fn parse<S: AsRef<str>>(guess: &str, marks: &[S]) -> Result<Self, InputError> {
        let guess = parse_word(guess)?;
        let pattern = Pattern::from_marks(marks)?;
        Ok(Self::new(guess, pattern))
    }

    /// Build the constraint that `guess` would receive against `target`
    #[must_use]
    pub fn observe(guess: &Word, target: &Word) -> Self {
        Self::new(guess.clone(), Pattern::calculate(guess, target))
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn pattern(&self) -> Pattern {
        self.pattern
    }

    /// Check whether `word` would have produced this constraint's pattern
    ///
    /// Equivalent to `Pattern::calculate(guess, word) == pattern`:
    /// - green positions must hold the guessed letter, every other position
    ///   must not (it would have been green)
    /// - each guessed letter needs at least its green+yellow count, and exactly
    ///   that count once one of its copies came back gray
    #[must_use]
    pub fn is_satisfied_by(&self, word: &Word) -> bool {
        if !self.producible {
            return false;
        }

        let guess_letters = self.guess.letters();
        let letters = word.letters();
        for (i, state) in self.states.iter().enumerate() {
            let same = letters[i] == guess_letters[i];
            if same != (*state == LetterState::Green) {
                return false;
            }
        }

        let word_counts = word.letter_counts();
        self.counts.iter().all(|c| {
            let present = word_counts[letter_index(c.letter)];
            if c.exact {
                present == c.min
            } else {
                present >= c.min
            }
        })
    }
}

/// Parse a boundary word, attaching the offending text to the error
///
/// # Errors
/// Returns `InputError::Word` if the text is not a valid 5-letter word.
pub fn parse_word(text: &str) -> Result<Word, InputError> {
    Word::new(text).map_err(|source| InputError::Word {
        word: text.to_string(),
        source,
    })
}

/// Keep only the candidates consistent with every constraint
///
/// Input order is preserved. An empty constraint list keeps everything.
///
/// # Examples
/// ```
/// use wordle_helper::core::{Constraint, Word, filter_words};
///
/// let words: Vec<Word> = ["CRANE", "SLATE"].iter().map(|w| Word::new(w).unwrap()).collect();
/// let constraints = [Constraint::parse("CRANE", &["G", "G", "G", "G", "G"]).unwrap()];
///
/// let remaining = filter_words(&words, &constraints);
/// assert_eq!(remaining.len(), 1);
/// assert_eq!(remaining[0].text(), "CRANE");
/// ```
pub fn filter_words<'a, I>(candidates: I, constraints: &[Constraint]) -> Vec<&'a Word>
where
    I: IntoIterator<Item = &'a Word>,
{
    candidates
        .into_iter()
        .filter(|&word| constraints.iter().all(|c| c.is_satisfied_by(word)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn texts(filtered: &[&Word]) -> Vec<String> {
        filtered.iter().map(|w| w.text().to_string()).collect()
    }

    const SAMPLE: &[&str] = &[
        "crane", "slate", "crate", "chase", "cloth", "cloud", "mummy", "humus", "maxim", "amber",
        "speed", "erase", "robot", "floor", "eerie", "geese", "abbey", "aback", "llama", "hello",
    ];

    #[test]
    fn all_green_keeps_only_the_guess() {
        let candidates = words(&["CRANE", "SLATE"]);
        let constraint = Constraint::parse("CRANE", &["G", "G", "G", "G", "G"]).unwrap();

        let remaining = filter_words(&candidates, &[constraint]);
        assert_eq!(texts(&remaining), ["CRANE"]);
    }

    #[test]
    fn green_first_letter_with_grays() {
        let candidates = words(&["CRANE", "SLATE", "CRATE", "CHASE", "CLOTH", "CLOUD"]);
        let constraint = Constraint::parse("CRANE", &["G", "X", "X", "X", "X"]).unwrap();

        let remaining = filter_words(&candidates, &[constraint]);
        assert_eq!(texts(&remaining), ["CLOTH", "CLOUD"]);
    }

    #[test]
    fn gray_duplicate_does_not_exclude_letter_marked_elsewhere() {
        // MUMMY vs HUMUS: XGGXX. The gray Ms cap M at exactly one copy.
        let candidates = words(&["HUMUS", "MUMMY", "DUMPS", "LUMEN"]);
        let constraint = Constraint::observe(
            &Word::new("mummy").unwrap(),
            &Word::new("humus").unwrap(),
        );

        let remaining = filter_words(&candidates, &[constraint]);
        assert_eq!(texts(&remaining), ["HUMUS", "DUMPS", "LUMEN"]);
    }

    #[test]
    fn yellow_after_gray_of_same_letter_matches_nothing() {
        // The simulator gives yellows to the leftmost copies first
        let constraint = Constraint::parse("SPEED", &["X", "X", "X", "Y", "X"]).unwrap();
        let candidates = words(SAMPLE);
        assert!(filter_words(&candidates, &[constraint]).is_empty());
    }

    #[test]
    fn fast_check_agrees_with_simulation_for_every_pattern() {
        let candidates = words(SAMPLE);
        for guess in &candidates {
            for value in 0..Pattern::COUNT {
                let pattern = Pattern::new(value as u8);
                let constraint = Constraint::new(guess.clone(), pattern);
                for word in &candidates {
                    let expected = Pattern::calculate(guess, word) == pattern;
                    assert_eq!(
                        constraint.is_satisfied_by(word),
                        expected,
                        "guess {guess}, pattern {pattern}, word {word}"
                    );
                }
            }
        }
    }

    #[test]
    fn soundness_word_survives_its_own_feedback() {
        let candidates = words(SAMPLE);
        for guess in &candidates {
            for target in &candidates {
                let constraint = Constraint::observe(guess, target);
                let remaining = filter_words(std::iter::once(target), &[constraint]);
                assert_eq!(remaining, vec![target], "{guess} vs {target}");
            }
        }
    }

    #[test]
    fn monotonic_as_constraints_accumulate() {
        let candidates = words(SAMPLE);
        let target = Word::new("cloud").unwrap();
        let mut history = Vec::new();
        let mut previous = candidates.len();

        for guess in ["crane", "slate", "robot", "cloth"] {
            history.push(Constraint::observe(&Word::new(guess).unwrap(), &target));
            let remaining = filter_words(&candidates, &history);
            assert!(remaining.len() <= previous);
            assert!(remaining.contains(&&target));
            previous = remaining.len();
        }
    }

    #[test]
    fn empty_history_keeps_everything() {
        let candidates = words(SAMPLE);
        assert_eq!(filter_words(&candidates, &[]).len(), candidates.len());
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(matches!(
            Constraint::parse("CRAN", &["G", "G", "G", "G", "G"]),
            Err(InputError::Word { .. })
        ));
        assert_eq!(
            Constraint::parse("CRANE", &["G", "G", "G"]),
            Err(InputError::PatternLength(3))
        );
        assert_eq!(
            Constraint::parse("CRANE", &["G", "G", "G", "G", "Z"]),
            Err(InputError::PatternMark("Z".to_string()))
        );
    }
}
