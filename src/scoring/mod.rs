//! Scoring of a finished (or abandoned) round
//!
//! Turns the feedback codes a player received into a percentage.

mod calculator;

pub use calculator::{ScoreOptions, score, score_codes};
