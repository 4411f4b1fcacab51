//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, entropy_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult, Suggestion};
use crate::core::{MAX_GUESSES, Pattern, Word};
use crate::solver::{Configuration, ScoredCandidate};
use colored::Colorize;

const RULE_WIDTH: usize = 60;
/// Remaining words listed before truncating
const REMAINING_SHOWN: usize = 40;

fn heading(title: &str, subject: &str) {
    println!("\n{}", "═".repeat(RULE_WIDTH).cyan());
    println!(
        " {} {} ",
        title.bright_cyan().bold(),
        subject.bright_yellow().bold()
    );
    println!("{}", "═".repeat(RULE_WIDTH).cyan());
}

/// Print a simulated pattern
pub fn print_pattern(guess: &Word, target: &Word, pattern: Pattern) {
    println!(
        "{}  {}  {}",
        colored_guess(guess, pattern),
        pattern.to_string().bold(),
        format!("({guess} vs {target})").bright_black()
    );
}

fn print_scores(label: &str, candidate: &ScoredCandidate<'_>) {
    let marker = if candidate.is_remaining {
        "possible answer".green()
    } else {
        "probe".yellow()
    };
    println!(
        "   {label} {}  entropy {:.3}  freq {:.3}  score {:.3}  ({marker})",
        candidate.word.text().bright_yellow().bold(),
        candidate.entropy,
        candidate.frequency,
        candidate.combined,
    );
}

/// Print the engine's suggestion for the next turn
pub fn print_suggestion(suggestion: &Suggestion<'_>, show_remaining: bool) {
    println!(
        "\n{} {}",
        "Remaining answers:".bright_cyan().bold(),
        suggestion.remaining.len()
    );

    let Some(best) = &suggestion.best else {
        println!(
            "{}",
            "No answer is consistent with this feedback.".red().bold()
        );
        return;
    };

    print_scores("Best guess:  ", best);
    for (i, alt) in suggestion.alternatives.iter().enumerate() {
        print_scores(&format!("#{:<2}         ", i + 2), alt);
    }

    if show_remaining {
        let shown: Vec<&str> = suggestion
            .remaining
            .iter()
            .take(REMAINING_SHOWN)
            .map(|w| w.text())
            .collect();
        println!("\n   {}", shown.join(" "));
        if suggestion.remaining.len() > REMAINING_SHOWN {
            println!(
                "   {}",
                format!("... and {} more", suggestion.remaining.len() - REMAINING_SHOWN)
                    .bright_black()
            );
        }
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    heading("SOLVING:", &result.target);

    for (i, step) in result.guesses.iter().enumerate() {
        let word = step.word.parse::<Word>();
        let tiles = word.map_or_else(|_| step.word.clone(), |w| colored_guess(&w, step.pattern));
        println!("\nTurn {}: {tiles}  {}", i + 1, step.pattern.to_emoji());

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");
                if step.candidates_after > 0 {
                    let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                        reduction.log2()
                    );
                }
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    heading("ENTROPY ANALYSIS:", &result.word);

    let max_bits = (result.total_candidates.max(2) as f64).log2();
    let bar = entropy_bar(result.entropy, max_bits, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!("   Info gain:   {:.1}x reduction", result.expected_reduction);
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!("   Worst case:  {} candidates", result.worst_case);
    println!("   Patterns:    {}", result.distinct_patterns);
    println!("   Frequency:   {:.3}", result.frequency);

    let status = match (result.is_answer, result.is_guessable) {
        (true, _) => "possible answer".green(),
        (false, true) => "guessable, never the answer".yellow(),
        (false, false) => "not in the word list".red(),
    };
    println!("   Status:      {status}");
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    heading("BENCHMARK RESULTS", "");

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Success rate:     {}",
        format!("{:.1}%", result.success_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_guesses.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let total = result.total_words.max(1) as f64;
    for guess_count in 1..=MAX_GUESSES {
        let count = result.distribution.get(&guess_count).copied().unwrap_or(0);
        let pct = count as f64 / total * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.failures.is_empty() {
        println!(
            "\n{} {}",
            "Failed:".red().bold(),
            result.failures.join(" ")
        );
    }
}

/// Print the active configuration as JSON with its preset name
///
/// # Errors
/// Returns an error if the configuration cannot be serialized.
pub fn print_configuration(config: &Configuration) -> serde_json::Result<()> {
    println!(
        "{} {}",
        "Preset:".bright_cyan().bold(),
        config.preset().to_string().bright_yellow()
    );
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
