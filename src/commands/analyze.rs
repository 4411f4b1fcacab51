//! Word analysis command
//!
//! How well a single guess splits the full answer list.

use crate::core::{Word, parse_word};
use crate::corpus::WordCorpus;
use crate::error::InputError;
use crate::solver::entropy::calculate_metrics;
use crate::solver::frequency::frequency_score;

/// Result of analyzing a word
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub word: String,
    pub entropy: f64,
    /// `2^entropy`, the effective reduction factor
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    /// Largest group of answers sharing one pattern
    pub worst_case: usize,
    pub distinct_patterns: usize,
    pub frequency: f64,
    pub total_candidates: usize,
    pub is_answer: bool,
    pub is_guessable: bool,
}

/// Analyze a word against every answer in the corpus
///
/// The word does not need to be guessable; the result says whether it is.
///
/// # Errors
///
/// Returns `InputError::Word` if the word is not 5 ASCII letters.
pub fn analyze_word(word: &str, corpus: &WordCorpus) -> Result<AnalysisResult, InputError> {
    let word = parse_word(word)?;
    let answers: Vec<&Word> = corpus.answers().iter().collect();
    let metrics = calculate_metrics(&word, &answers);

    Ok(AnalysisResult {
        word: word.text().to_string(),
        entropy: metrics.entropy,
        expected_reduction: metrics.entropy.exp2(),
        expected_remaining: metrics.expected_remaining,
        worst_case: metrics.max_partition,
        distinct_patterns: metrics.distinct_patterns,
        frequency: frequency_score(&word, &answers),
        total_candidates: answers.len(),
        is_answer: corpus.is_answer(&word),
        is_guessable: corpus.is_guessable(&word),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_opening_word() {
        let corpus = WordCorpus::embedded().unwrap();
        let result = analyze_word("tares", &corpus).unwrap();

        assert_eq!(result.word, "TARES");
        assert!(result.entropy > 4.0);
        assert!(result.expected_reduction >= 1.0);
        assert!(result.is_guessable);
        assert_eq!(result.total_candidates, corpus.answers().len());
    }

    #[test]
    fn entropy_properties() {
        let corpus = WordCorpus::embedded().unwrap();
        let result = analyze_word("mummy", &corpus).unwrap();

        let total = result.total_candidates as f64;
        assert!(result.entropy >= 0.0);
        assert!(result.entropy <= total.log2());
        assert!(result.expected_remaining >= 1.0);
        assert!(result.expected_remaining <= total);
        assert!(result.worst_case <= result.total_candidates);
    }

    #[test]
    fn unknown_words_are_analyzed_but_flagged() {
        let corpus = WordCorpus::embedded().unwrap();
        let result = analyze_word("zzzzz", &corpus).unwrap();

        assert!(!result.is_guessable);
        assert!(!result.is_answer);
        assert!(result.entropy < 1.0);
    }

    #[test]
    fn malformed_word_is_an_error() {
        let corpus = WordCorpus::embedded().unwrap();
        assert!(matches!(
            analyze_word("abc", &corpus),
            Err(InputError::Word { .. })
        ));
    }
}
