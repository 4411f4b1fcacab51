//! Formatting utilities for terminal output

use crate::core::{LetterState, Pattern, Word};
use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};

/// Render a guess as coloured tiles, one per letter
#[must_use]
pub fn colored_guess(word: &Word, pattern: Pattern) -> String {
    word.text()
        .chars()
        .zip(pattern.states())
        .map(|(letter, state)| tile(letter, state).to_string())
        .collect()
}

fn tile(letter: char, state: LetterState) -> ColoredString {
    let text = format!(" {letter} ").black().bold();
    match state {
        LetterState::Green => text.on_green(),
        LetterState::Yellow => text.on_yellow(),
        LetterState::Gray => text.on_bright_black(),
    }
}

/// Create a text bar of `width` cells filled in proportion to `value / max`
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    // Cast is safe: ratio is clamped to [0, 1]
    let filled = ((ratio * width as f64).round() as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to `max_bits`
#[must_use]
pub fn entropy_bar(entropy: f64, max_bits: f64, width: usize) -> String {
    create_progress_bar(entropy, max_bits, width)
}

/// Progress bar for long runs such as the benchmark
#[must_use]
pub fn game_progress_bar(len: u64) -> ProgressBar {
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    )
    .map_or_else(|_| ProgressStyle::default_bar(), |s| s.progress_chars("█▓▒░"));

    let bar = ProgressBar::new(len);
    bar.set_style(style);
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░".repeat(10));
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "█".repeat(10));
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_clamps_out_of_range() {
        assert_eq!(create_progress_bar(250.0, 100.0, 4), "████");
        assert_eq!(create_progress_bar(-1.0, 100.0, 4), "░░░░");
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn colored_guess_keeps_letters() {
        colored::control::set_override(false);
        let word = Word::new("crane").unwrap();
        let rendered = colored_guess(&word, "GYXXG".parse().unwrap());
        assert_eq!(rendered, " C  R  A  N  E ");
    }
}
