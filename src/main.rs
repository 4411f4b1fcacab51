//! Wordle Helper - CLI
//!
//! Suggests guesses, analyzes words, and plays or benchmarks the engine from
//! the command line.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use wordle_helper::{
    WordleHelper,
    commands::{
        SolveConfig, analyze_word, parse_history_entry, run_benchmark, sample_targets, solve_word,
        suggest,
    },
    core::{Pattern, parse_word},
    output::{
        game_progress_bar, print_analysis_result, print_benchmark_result, print_configuration,
        print_pattern, print_solve_result, print_suggestion,
    },
    solver::Configuration,
};

#[derive(Parser)]
#[command(
    name = "wordle_helper",
    about = "Wordle guess engine: constraint filtering and entropy ranking",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list JSON with `answer_words` and `guess_words` (default: embedded lists)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    #[command(flatten)]
    tuning: TuningArgs,
}

/// Engine configuration flags, applied in order: file, preset, overrides
#[derive(Args)]
struct TuningArgs {
    /// Configuration JSON file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Use the exhaustive reference preset
    #[arg(long, global = true)]
    reference: bool,

    /// Maximum number of candidates scored per guess
    #[arg(long, global = true)]
    cap: Option<usize>,

    /// Entropy (bits) that ends scoring early
    #[arg(long, global = true)]
    threshold: Option<f64>,

    /// Score the whole candidate pool
    #[arg(long, global = true)]
    no_early_exit: bool,

    /// Add probe words to the candidate pool
    #[arg(long, global = true)]
    probes: bool,

    /// Rank by entropy alone
    #[arg(long, global = true)]
    entropy_only: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest the next guess (default)
    Suggest {
        /// Previous turns as GUESS:PATTERN, e.g. TARES:XXYXG
        history: Vec<String>,

        /// List the remaining answers
        #[arg(short = 'r', long)]
        show_remaining: bool,

        /// Number of runner-up guesses to show
        #[arg(short, long, default_value = "5")]
        top: usize,
    },

    /// Show the pattern a guess gets against a target
    Simulate { guess: String, target: String },

    /// Analyze the entropy of a specific word
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark solver performance on random answers
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for the random sample
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },

    /// Print the active configuration
    Config,
}

impl TuningArgs {
    fn resolve(&self) -> Result<Configuration> {
        let mut config = match &self.config {
            Some(path) => load_configuration(path)?,
            None => Configuration::DEFAULT,
        };

        if self.reference {
            config = Configuration::REFERENCE;
        }
        if let Some(cap) = self.cap {
            config.candidate_cap = cap;
        }
        if let Some(threshold) = self.threshold {
            config.early_termination_threshold = threshold;
        }
        if self.no_early_exit {
            config.early_termination_enabled = false;
        }
        if self.probes {
            config.include_probe_words = true;
        }
        if self.entropy_only {
            config.entropy_only_scoring = true;
        }
        Ok(config)
    }
}

fn load_configuration(path: &Path) -> Result<Configuration> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read configuration {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("malformed configuration {}", path.display()))
}

fn build_helper(cli: &Cli) -> Result<WordleHelper> {
    let config = cli.tuning.resolve()?;
    let helper = WordleHelper::with_configuration(config)?;

    match &cli.wordlist {
        Some(path) => helper
            .initialize_from_file(path)
            .with_context(|| format!("failed to load word lists from {}", path.display()))?,
        None => helper
            .initialize_embedded()
            .context("failed to load embedded word lists")?,
    }
    Ok(helper)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let helper = build_helper(&cli)?;

    let command = cli.command.unwrap_or(Commands::Suggest {
        history: Vec::new(),
        show_remaining: false,
        top: 5,
    });

    match command {
        Commands::Suggest {
            history,
            show_remaining,
            top,
        } => run_suggest_command(&helper, &history, show_remaining, top),
        Commands::Simulate { guess, target } => run_simulate_command(&guess, &target),
        Commands::Analyze { word } => {
            let result = analyze_word(&word, helper.corpus()?)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Solve { word, verbose } => {
            let result = solve_word(SolveConfig::new(word), &helper.solver()?)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Benchmark { count, seed } => run_benchmark_command(&helper, count, seed),
        Commands::Config => {
            print_configuration(&helper.configuration())?;
            Ok(())
        }
    }
}

fn run_suggest_command(
    helper: &WordleHelper,
    entries: &[String],
    show_remaining: bool,
    top: usize,
) -> Result<()> {
    let history = entries
        .iter()
        .map(|entry| parse_history_entry(entry))
        .collect::<Result<Vec<_>, _>>()?;

    let solver = helper.solver()?;
    let suggestion = suggest(&solver, &history, top);
    print_suggestion(&suggestion, show_remaining);
    Ok(())
}

fn run_simulate_command(guess: &str, target: &str) -> Result<()> {
    let guess = parse_word(guess)?;
    let target = parse_word(target)?;
    print_pattern(&guess, &target, Pattern::calculate(&guess, &target));
    Ok(())
}

fn run_benchmark_command(helper: &WordleHelper, count: usize, seed: u64) -> Result<()> {
    let solver = helper.solver()?;
    let targets = sample_targets(helper.corpus()?.answers(), count, seed);

    println!(
        "Running benchmark on {} random words ({} preset)...",
        targets.len(),
        solver.config().preset()
    );

    let progress = game_progress_bar(targets.len() as u64);
    let result = run_benchmark(&solver, &targets, |outcome| {
        progress.set_message(outcome.target.clone());
        progress.inc(1);
    });
    progress.finish_with_message("Complete!");

    print_benchmark_result(&result);
    Ok(())
}
