//! Word Game Engines - CLI
//!
//! Anagram pool sampling, pair validation, and session scoring on one side;
//! feedback-driven candidate narrowing and entropy guess ranking on the
//! other.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use wordgames::{
    anagram::{AnagramIndex, DEFAULT_MAX_ATTEMPTS, Distribution},
    commands::{run_analyze, run_families, run_narrow, run_rank, run_sample, run_stats},
    corpus::{ANAGRAM_WORDS, loader},
    output::{
        print_analysis_report, print_families_report, print_narrow_report, print_rank_report,
        print_sample_report, print_session_stats,
    },
    wordle::FeedbackIndex,
};

#[derive(Parser)]
#[command(
    name = "wordgames",
    about = "Anagram and Wordle engines using prime fingerprints and information theory",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Corpus for anagram commands: path to a word list, or embedded default
    #[arg(short = 'c', long, global = true)]
    corpus: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample a 7-letter pool supporting enough anagram words
    Sample {
        /// Minimum number of anagram-eligible words the pool must support
        #[arg(short = 'n', long, default_value = "20")]
        min_words: usize,

        /// Distribution: uniform (with replacement) or scrabble (tile bag)
        #[arg(short, long, default_value = "scrabble")]
        distribution: String,

        /// Retry budget before giving up
        #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
        max_attempts: usize,
    },

    /// Explore the anagram families reachable from a pool
    Families {
        /// The 7 pool letters, e.g. "potsria" or "p,o,t,s,r,i,a"
        #[arg(short, long)]
        letters: String,
    },

    /// Score a batch of guessed pairs for one session
    Stats {
        /// The 7 pool letters the session was played with
        #[arg(short, long)]
        letters: String,

        /// Raw guesses like "rat, art" (repeatable)
        #[arg(short, long = "guess")]
        guesses: Vec<String>,
    },

    /// Narrow Wordle candidates by the latest observation
    Narrow {
        /// Path to the feedback index artifact (JSON)
        #[arg(long)]
        cache: PathBuf,

        /// Guess history, oldest first (repeatable)
        #[arg(long = "guess")]
        guesses: Vec<String>,

        /// Feedback history matching the guesses, e.g. "01210" (repeatable)
        #[arg(long = "pattern")]
        patterns: Vec<String>,

        /// Current candidates inline (repeatable)
        #[arg(long = "candidate")]
        candidates: Vec<String>,

        /// Current candidates from a file, one per line
        #[arg(long)]
        candidates_file: Option<PathBuf>,
    },

    /// Rank candidate guesses by expected information gain
    Rank {
        /// Path to the feedback index artifact (JSON)
        #[arg(long)]
        cache: PathBuf,

        /// Guesses to score inline; empty means every guess in the index
        #[arg(long = "guess")]
        guesses: Vec<String>,

        /// Candidate answers inline (repeatable)
        #[arg(long = "answer")]
        answers: Vec<String>,

        /// Candidate answers from a file, one per line
        #[arg(long)]
        answers_file: Option<PathBuf>,

        /// Show only the best N guesses
        #[arg(short, long, default_value = "15")]
        top: usize,
    },

    /// Analyze the entropy of a single guess
    Analyze {
        /// Path to the feedback index artifact (JSON)
        #[arg(long)]
        cache: PathBuf,

        /// The guess to analyze
        word: String,

        /// Candidate answers inline (repeatable)
        #[arg(long = "answer")]
        answers: Vec<String>,

        /// Candidate answers from a file, one per line
        #[arg(long)]
        answers_file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sample {
            min_words,
            distribution,
            max_attempts,
        } => {
            let index = load_anagram_index(cli.corpus.as_deref())?;
            let distribution = Distribution::from_name(&distribution)
                .with_context(|| format!("Unknown distribution '{distribution}'"))?;

            let report = run_sample(&index, min_words, distribution, max_attempts)
                .map_err(|e| anyhow::anyhow!(e))?;
            print_sample_report(&report);
            Ok(())
        }
        Commands::Families { letters } => {
            let index = load_anagram_index(cli.corpus.as_deref())?;
            let report = run_families(&index, &letters).map_err(|e| anyhow::anyhow!(e))?;
            print_families_report(&report);
            Ok(())
        }
        Commands::Stats { letters, guesses } => {
            let index = load_anagram_index(cli.corpus.as_deref())?;
            let stats = run_stats(&guesses, &letters, &index).map_err(|e| anyhow::anyhow!(e))?;
            print_session_stats(&stats);
            Ok(())
        }
        Commands::Narrow {
            cache,
            guesses,
            patterns,
            candidates,
            candidates_file,
        } => {
            let index = load_feedback_index(&cache)?;
            let candidates = gather_words(candidates, candidates_file.as_deref())?;

            let report = run_narrow(&index, &guesses, &patterns, candidates)
                .map_err(|e| anyhow::anyhow!(e))?;
            print_narrow_report(&report);
            Ok(())
        }
        Commands::Rank {
            cache,
            guesses,
            answers,
            answers_file,
            top,
        } => {
            let index = load_feedback_index(&cache)?;
            let answers = gather_words(answers, answers_file.as_deref())?;

            let spinner = scoring_spinner(if guesses.is_empty() {
                index.guess_count()
            } else {
                guesses.len()
            });
            let report = run_rank(&index, &guesses, &answers, Some(top));
            spinner.finish_and_clear();

            print_rank_report(&report);
            Ok(())
        }
        Commands::Analyze {
            cache,
            word,
            answers,
            answers_file,
        } => {
            let index = load_feedback_index(&cache)?;
            let answers = gather_words(answers, answers_file.as_deref())?;

            let report =
                run_analyze(&index, &word, &answers).map_err(|e| anyhow::anyhow!(e))?;
            print_analysis_report(&report);
            Ok(())
        }
    }
}

/// Build the anagram index from the `-c` flag or the embedded corpus
fn load_anagram_index(corpus: Option<&std::path::Path>) -> Result<AnagramIndex> {
    let words = match corpus {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("Failed to load corpus from {}", path.display()))?,
        None => loader::words_from_slice(ANAGRAM_WORDS),
    };
    Ok(AnagramIndex::build(words))
}

/// Load the feedback index artifact, surfacing load failures clearly
fn load_feedback_index(path: &std::path::Path) -> Result<FeedbackIndex> {
    FeedbackIndex::load(path).map_err(|e| anyhow::anyhow!(e))
}

/// Merge inline words with an optional one-per-line file
fn gather_words(inline: Vec<String>, file: Option<&std::path::Path>) -> Result<Vec<String>> {
    let mut words = inline;

    if let Some(path) = file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read word list {}", path.display()))?;
        words.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(ToString::to_string),
        );
    }

    Ok(words)
}

/// Spinner shown while a large ranking batch is scored
fn scoring_spinner(guess_count: usize) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("static template is valid"),
    );
    spinner.set_message(format!("Scoring {guess_count} guesses..."));
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
