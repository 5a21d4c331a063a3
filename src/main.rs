//! Wordguess - CLI
//!
//! Thin command line surface over the rules engine: feedback, history
//! validation, candidate listing, scoring and pattern rendering.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordguess::{
    commands::{CandidatesConfig, check_history, compare_words, find_candidates, score_round},
    core::Corpus,
    output::{print_candidates, print_compare_result, print_history, print_score_result, render},
    scoring::ScoreOptions,
    wordlists::load_corpus,
};

#[derive(Parser)]
#[command(
    name = "wordguess",
    about = "Rules engine for a Wordle-style word guessing game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'default' (embedded) or path to a file with one word per line
    #[arg(
        short = 'w',
        long,
        global = true,
        default_value = "default",
        env = "WORDGUESS_WORDLIST"
    )]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Feedback for a guess against a target word
    Result {
        /// The secret target word
        target: String,
        /// The guessed word
        guess: String,
    },

    /// Check that a guess history is consistent
    Validate {
        /// History entries as word=code, e.g. crane=01200
        entries: Vec<String>,
    },

    /// List the words still consistent with a guess history
    Guesses {
        /// History entries as word=code, e.g. crane=01200
        entries: Vec<String>,

        /// Return at most this many words, sampled at random
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for reproducible sampling
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Score a round from its feedback codes
    Score {
        /// Feedback codes in the order they were received
        #[arg(required = true)]
        results: Vec<String>,

        /// Penalize every attempt after the first
        #[arg(short, long)]
        penalty: bool,

        /// Fraction taken off per extra attempt (0 to 1)
        #[arg(short = 'r', long, default_value = "0.1")]
        penalty_rate: f64,
    },

    /// Render a feedback code as colored squares
    Pattern {
        /// Feedback code, e.g. 01102
        code: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Result { target, guess } => {
            let corpus = load(&cli.wordlist)?;
            let result = compare_words(&target, &guess, &corpus)?;
            print_compare_result(&result);
        }
        Commands::Validate { entries } => {
            let corpus = load(&cli.wordlist)?;
            let history = check_history(&entries, &corpus)?;
            print_history(&history);
        }
        Commands::Guesses {
            entries,
            count,
            seed,
        } => {
            let corpus = load(&cli.wordlist)?;
            let config = CandidatesConfig {
                entries,
                limit: count,
                seed,
            };
            let result = find_candidates(config, &corpus)?;
            print_candidates(&result);
        }
        Commands::Score {
            results,
            penalty,
            penalty_rate,
        } => {
            let options = ScoreOptions {
                penalty,
                penalty_rate,
            };
            let result = score_round(&results, options)?;
            print_score_result(&result);
        }
        Commands::Pattern { code } => {
            println!("{}", render(&code)?);
        }
    }

    Ok(())
}

fn load(wordlist: &str) -> Result<Corpus> {
    load_corpus(wordlist).with_context(|| format!("failed to load word list '{wordlist}'"))
}
