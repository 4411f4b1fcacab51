//! Shannon entropy of a guess over the remaining candidates
//!
//! Every candidate is treated as equally likely to be the answer. A guess
//! splits the candidates into buckets by the pattern it would produce; the
//! entropy of that bucket distribution is the expected information gain.

use crate::core::{Pattern, Word};

/// Number of candidates producing each of the 243 patterns
pub type PatternDistribution = [u32; Pattern::COUNT];

/// Summary of how a guess partitions the candidates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Expected information gain in bits
    pub entropy: f64,
    /// Expected number of candidates left after the guess
    pub expected_remaining: f64,
    /// Size of the largest bucket (worst case)
    pub max_partition: usize,
    /// Number of distinct patterns the guess can produce
    pub distinct_patterns: usize,
}

/// Bucket candidates by the pattern `guess` would produce against each one
#[must_use]
pub fn pattern_distribution(guess: &Word, candidates: &[&Word]) -> PatternDistribution {
    let mut counts = [0u32; Pattern::COUNT];
    for &candidate in candidates {
        counts[Pattern::calculate(guess, candidate).index()] += 1;
    }
    counts
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns 0.0 when there are fewer than two candidates. The guess does not
/// need to be a candidate itself.
///
/// # Formula
/// H = -Σ p(x) * log₂(p(x)), where p(x) is the share of candidates producing
/// pattern x.
///
/// # Examples
/// ```
/// use wordle_helper::core::Word;
/// use wordle_helper::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("slate").unwrap();
/// let candidates = [Word::new("slate").unwrap(), Word::new("crony").unwrap()];
/// let refs: Vec<&Word> = candidates.iter().collect();
///
/// assert!((calculate_entropy(&guess, &refs) - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[&Word]) -> f64 {
    if candidates.len() <= 1 {
        return 0.0;
    }
    shannon_entropy(&pattern_distribution(guess, candidates))
}

/// Shannon entropy of a bucket distribution
///
/// Zero for a single non-empty bucket, `log₂(k)` for `k` equal buckets.
#[must_use]
pub fn shannon_entropy(counts: &[u32]) -> f64 {
    let total: u64 = counts.iter().map(|&c| u64::from(c)).sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;

    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = f64::from(count) / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate entropy together with partition statistics
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[&Word]) -> GuessMetrics {
    let counts = pattern_distribution(guess, candidates);
    let entropy = if candidates.len() <= 1 {
        0.0
    } else {
        shannon_entropy(&counts)
    };

    let total = candidates.len() as f64;
    let expected_remaining = if candidates.is_empty() {
        0.0
    } else {
        counts
            .iter()
            .map(|&c| f64::from(c) * f64::from(c) / total)
            .sum()
    };

    GuessMetrics {
        entropy,
        expected_remaining,
        max_partition: counts.iter().max().map_or(0, |&c| c as usize),
        distinct_patterns: counts.iter().filter(|&&c| c > 0).count(),
    }
}
