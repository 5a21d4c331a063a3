//! Command implementations

pub mod compare;
pub mod history;
pub mod score;

pub use compare::{CompareResult, compare_words};
pub use history::{
    CandidatesConfig, CandidatesResult, check_history, find_candidates, parse_history,
};
pub use score::{ScoreResult, score_round};
