//! Core domain types for the word game
//!
//! This module contains the fundamental domain types. All types here are
//! pure, immutable once built, and carry their own validation.

mod corpus;
mod error;
mod feedback;
mod history;
mod word;

pub use corpus::Corpus;
pub use error::WordleError;
pub use feedback::{FeedbackCode, Mark};
pub use history::GuessHistory;
pub use word::Word;
