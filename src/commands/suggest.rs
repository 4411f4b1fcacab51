//! Suggestion command
//!
//! Best next guess for a game in progress, with its scores and the runners-up.

use crate::core::{Constraint, Pattern, Word, parse_word};
use crate::error::InputError;
use crate::solver::frequency::LetterStats;
use crate::solver::pool::PoolEntry;
use crate::solver::{ScoredCandidate, Solver};

/// Engine output for one turn
#[derive(Debug, Clone)]
pub struct Suggestion<'a> {
    /// Answers still consistent with the history
    pub remaining: Vec<&'a Word>,
    /// Chosen guess, `None` when nothing fits the history
    pub best: Option<ScoredCandidate<'a>>,
    /// Next best evaluated candidates, best first
    pub alternatives: Vec<ScoredCandidate<'a>>,
}

/// Parse a history entry such as `CRANE:GXXYX` or `crane=gxxyx`
///
/// # Errors
/// Returns `InputError` if the separator is missing or either half is
/// malformed.
pub fn parse_history_entry(entry: &str) -> Result<Constraint, InputError> {
    let (guess, pattern) = entry
        .split_once([':', '='])
        .ok_or_else(|| InputError::HistoryEntry(entry.to_string()))?;
    let guess = parse_word(guess.trim())?;
    let pattern: Pattern = pattern.parse()?;
    Ok(Constraint::new(guess, pattern))
}

/// Suggest the next guess with up to `alternatives` runners-up
///
/// The chosen word is always the one `Solver::next_guess` returns.
#[must_use]
pub fn suggest<'a>(solver: &Solver<'a>, history: &[Constraint], alternatives: usize) -> Suggestion<'a> {
    let remaining = solver.candidates(history);

    if history.is_empty() || remaining.len() == 1 {
        let best = solver
            .next_guess(history)
            .map(|word| evaluate_single(solver, word, &remaining));
        return Suggestion {
            remaining,
            best,
            alternatives: Vec::new(),
        };
    }

    let mut ranked = solver.rank(history).into_iter();
    let best = ranked.next();
    Suggestion {
        remaining,
        best,
        alternatives: ranked.take(alternatives).collect(),
    }
}

fn evaluate_single<'a>(solver: &Solver<'a>, word: &'a Word, remaining: &[&'a Word]) -> ScoredCandidate<'a> {
    let stats = LetterStats::from_words(remaining);
    let entry = PoolEntry {
        word,
        frequency: stats.score(word),
        is_remaining: remaining.contains(&word),
    };
    ScoredCandidate::evaluate(&entry, remaining, solver.config())
}
