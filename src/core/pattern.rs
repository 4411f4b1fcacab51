//! Wordle feedback pattern calculation and representation
//!
//! A pattern holds one `LetterState` per position of a guess. Internally it is
//! encoded base-3 in a single byte:
//! - 0 = Gray (letter absent, or its occurrence budget is used up)
//! - 1 = Yellow (letter present elsewhere)
//! - 2 = Green (letter in correct position)
//!
//! Position 0 is the least significant digit, so values range over 0-242.

use super::word::{WORD_LENGTH, Word, letter_index};
use crate::error::InputError;
use std::fmt;

/// Feedback for a single position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterState {
    Gray,
    Yellow,
    Green,
}

impl LetterState {
    const ALL: [Self; 3] = [Self::Gray, Self::Yellow, Self::Green];

    /// Base-3 digit used in the pattern encoding
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::Gray => 0,
            Self::Yellow => 1,
            Self::Green => 2,
        }
    }

    /// Boundary symbol: `G`, `Y` or `X`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Gray => 'X',
            Self::Yellow => 'Y',
            Self::Green => 'G',
        }
    }

    /// Parse a single boundary mark
    ///
    /// Accepts `G`/`Y`/`X` and the color names (`GREEN`, `YELLOW`, `GRAY`,
    /// `GREY`), case-insensitively.
    ///
    /// # Errors
    /// Returns `InputError::PatternMark` for anything else.
    pub fn from_mark(mark: &str) -> Result<Self, InputError> {
        match mark.trim().to_ascii_uppercase().as_str() {
            "G" | "GREEN" => Ok(Self::Green),
            "Y" | "YELLOW" => Ok(Self::Yellow),
            "X" | "GRAY" | "GREY" => Ok(Self::Gray),
            _ => Err(InputError::PatternMark(mark.to_string())),
        }
    }

    const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            'X' | 'x' | '-' | '_' | '⬜' | '⬛' => Some(Self::Gray),
            _ => None,
        }
    }
}

/// Feedback pattern for a Wordle guess
///
/// Value range: 0-242 (3^5 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Number of distinct patterns
    pub const COUNT: usize = 243;

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Index into a `Pattern::COUNT`-sized table
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Build a pattern from per-position states
    #[must_use]
    pub fn from_states(states: [LetterState; WORD_LENGTH]) -> Self {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for state in states {
            value += state.digit() * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(value)
    }

    /// Decode the per-position states
    #[must_use]
    pub fn states(self) -> [LetterState; WORD_LENGTH] {
        let mut states = [LetterState::Gray; WORD_LENGTH];
        let mut val = self.0;
        for state in &mut states {
            *state = LetterState::ALL[usize::from(val % 3)];
            val /= 3;
        }
        states
    }

    /// Calculate the pattern produced when `guess` is played against `target`
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches (greens) and remove them from the pool
    ///    of available target letters
    /// 2. Second pass: mark present-but-wrong-position letters (yellows) while
    ///    unconsumed copies remain in the pool; everything else is gray
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::{Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    ///
    /// // C, R and N are absent; A and E are in place
    /// assert_eq!(Pattern::calculate(&guess, &target).to_string(), "XXGXG");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut states = [LetterState::Gray; WORD_LENGTH];
        let mut available = target.letter_counts();
        let guess_letters = guess.letters();
        let target_letters = target.letters();

        // First pass: greens consume their target letter
        for (i, state) in states.iter_mut().enumerate() {
            if guess_letters[i] == target_letters[i] {
                *state = LetterState::Green;
                available[letter_index(guess_letters[i])] -= 1;
            }
        }

        // Second pass: yellows draw from what the greens left over
        for (i, state) in states.iter_mut().enumerate() {
            if *state == LetterState::Gray {
                let remaining = &mut available[letter_index(guess_letters[i])];
                if *remaining > 0 {
                    *state = LetterState::Yellow;
                    *remaining -= 1;
                }
            }
        }

        Self::from_states(states)
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_greens(self) -> usize {
        self.states()
            .iter()
            .filter(|&&s| s == LetterState::Green)
            .count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_yellows(self) -> usize {
        self.states()
            .iter()
            .filter(|&&s| s == LetterState::Yellow)
            .count()
    }

    /// Parse a pattern from a list of boundary marks such as `["G", "Y", "X", "X", "G"]`
    ///
    /// # Errors
    /// Returns `InputError::PatternLength` unless exactly five marks are given,
    /// or `InputError::PatternMark` for an unknown mark.
    pub fn from_marks<S: AsRef<str>>(marks: &[S]) -> Result<Self, InputError> {
        if marks.len() != WORD_LENGTH {
            return Err(InputError::PatternLength(marks.len()));
        }

        let mut states = [LetterState::Gray; WORD_LENGTH];
        for (state, mark) in states.iter_mut().zip(marks) {
            *state = LetterState::from_mark(mark.as_ref())?;
        }

        Ok(Self::from_states(states))
    }

    /// Convert pattern to emoji string, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.states()
            .iter()
            .map(|state| match state {
                LetterState::Green => '🟩',
                LetterState::Yellow => '🟨',
                LetterState::Gray => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Pattern {
    /// Formats as the 5-character `G`/`Y`/`X` string
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for state in self.states() {
            write!(f, "{}", state.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = InputError;

    /// Parse a pattern string like "GYXXG", "gy-_g" or "🟩🟨⬜⬜🟩"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(InputError::PatternLength(chars.len()));
        }

        let mut states = [LetterState::Gray; WORD_LENGTH];
        for (state, ch) in states.iter_mut().zip(chars) {
            *state =
                LetterState::from_char(ch).ok_or_else(|| InputError::PatternMark(ch.to_string()))?;
        }

        Ok(Self::from_states(states))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(guess: &str, target: &str) -> String {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        Pattern::calculate(&guess, &target).to_string()
    }

    #[test]
    fn pattern_perfect_constant() {
        assert_eq!(Pattern::PERFECT.value(), 242);
        assert!(Pattern::PERFECT.is_perfect());
        assert_eq!(Pattern::PERFECT.count_greens(), 5);
        assert_eq!(Pattern::PERFECT.count_yellows(), 0);
        assert_eq!(Pattern::PERFECT.to_string(), "GGGGG");
    }

    #[test]
    fn pattern_all_gray() {
        assert_eq!(pattern("abcde", "fghij"), "XXXXX");
    }

    #[test]
    fn pattern_all_green() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            let w = Word::new(word).unwrap();
            assert_eq!(Pattern::calculate(&w, &w), Pattern::PERFECT);
        }
    }

    #[test]
    fn pattern_crane_vs_slate() {
        // A and E in place; C, R, N absent from SLATE
        assert_eq!(pattern("crane", "slate"), "XXGXG");
    }

    #[test]
    fn pattern_mummy_vs_humus_budgets_repeated_letters() {
        // HUMUS has a single M, already claimed by the green at position 2
        assert_eq!(pattern("mummy", "humus"), "XGGXX");
    }

    #[test]
    fn pattern_mummy_budget_never_exceeds_target_count() {
        // MAXIM has two Ms: one green, one yellow, the third M is gray
        assert_eq!(pattern("mummy", "maxim"), "GXYXX");
        // One M in the wrong place: only the first M is yellow
        assert_eq!(pattern("mummy", "amber"), "YXXXX");
    }

    #[test]
    fn pattern_duplicate_letters_green_takes_priority() {
        // SPEED vs ERASE: S yellow, P gray, both Es yellow, D gray
        assert_eq!(pattern("speed", "erase"), "YXYYX");
        // ROBOT vs FLOOR: first O yellow, second O green
        assert_eq!(pattern("robot", "floor"), "YYXGX");
    }

    #[test]
    fn green_plus_yellow_bounded_by_target_count() {
        let words = ["mummy", "humus", "speed", "erase", "robot", "floor", "eerie", "geese"];
        for guess in words {
            for target in words {
                let g = Word::new(guess).unwrap();
                let t = Word::new(target).unwrap();
                let states = Pattern::calculate(&g, &t).states();
                let target_counts = t.letter_counts();
                let mut marked = [0u8; 26];
                for (i, state) in states.iter().enumerate() {
                    if *state != LetterState::Gray {
                        marked[letter_index(g.letter_at(i))] += 1;
                    }
                }
                for letter in 0..26 {
                    assert!(marked[letter] <= target_counts[letter], "{guess} vs {target}");
                }
            }
        }
    }

    #[test]
    fn states_round_trip_through_encoding() {
        let states = [
            LetterState::Yellow,
            LetterState::Green,
            LetterState::Green,
            LetterState::Yellow,
            LetterState::Gray,
        ];
        let p = Pattern::from_states(states);
        assert_eq!(p.value(), 1 + 2 * 3 + 2 * 9 + 27);
        assert_eq!(p.states(), states);
        assert_eq!(p.count_greens(), 2);
        assert_eq!(p.count_yellows(), 2);
    }

    #[test]
    fn pattern_from_str_valid() {
        let p1: Pattern = "GYGXX".parse().unwrap();
        let p2: Pattern = "🟩🟨🟩⬜⬜".parse().unwrap();
        let p3: Pattern = "gyg-_".parse().unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.value(), 23);
    }

    #[test]
    fn pattern_from_str_invalid() {
        assert_eq!(
            "GYGGYX".parse::<Pattern>(),
            Err(InputError::PatternLength(6))
        );
        assert_eq!("GYG".parse::<Pattern>(), Err(InputError::PatternLength(3)));
        assert_eq!(
            "GQGGY".parse::<Pattern>(),
            Err(InputError::PatternMark("Q".to_string()))
        );
    }

    #[test]
    fn pattern_from_marks() {
        let p = Pattern::from_marks(&["G", "y", "X", "GREY", "green"]).unwrap();
        assert_eq!(p.to_string(), "GYXXG");

        assert_eq!(
            Pattern::from_marks(&["G", "G", "G", "G"]),
            Err(InputError::PatternLength(4))
        );
        assert_eq!(
            Pattern::from_marks(&["G", "G", "B", "G", "G"]),
            Err(InputError::PatternMark("B".to_string()))
        );
    }

    #[test]
    fn pattern_to_emoji() {
        let p: Pattern = "GYXXG".parse().unwrap();
        assert_eq!(p.to_emoji(), "🟩🟨⬜⬜🟩");
    }
}
