//! Wordguess
//!
//! Rules engine for a Wordle-style word guessing game: per-letter feedback,
//! guess-history validation, candidate filtering, scoring and rendering.
//!
//! # Quick Start
//!
//! ```rust
//! use wordguess::core::{Corpus, GuessHistory};
//! use wordguess::{candidates, feedback, render, score, ScoreOptions};
//!
//! let corpus = Corpus::default();
//!
//! // Feedback for a guess
//! let code = feedback("apple", "apply", &corpus).unwrap();
//! assert_eq!(code.to_string(), "22220");
//!
//! // Words still possible after that guess
//! let mut history = GuessHistory::new();
//! history.insert("apply".parse().unwrap(), code).unwrap();
//! let remaining = candidates(&history, None, &corpus).unwrap();
//! assert!(remaining.iter().any(|w| w.text() == "apple"));
//!
//! // Score and display
//! assert_eq!(score(&["01122", "22222"], ScoreOptions::default()).unwrap(), 100.0);
//! assert_eq!(render("01102").unwrap().chars().count(), 5);
//! ```

// Core domain types
pub mod core;

// Feedback, validation and filtering
pub mod solver;

// Round scoring
pub mod scoring;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use crate::core::{Corpus, FeedbackCode, GuessHistory, Mark, Word, WordleError};
pub use output::{render, render_code};
pub use scoring::{ScoreOptions, score, score_codes};
pub use solver::{candidates, candidates_with_rng, feedback, validate};
