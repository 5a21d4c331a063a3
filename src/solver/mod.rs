//! Game rules: feedback, history validation and candidate filtering
//!
//! Data flows one way:
//! - target + guess → [`feedback`] → feedback code
//! - history → [`validate`] → pass/fail
//! - validated history + corpus → [`candidates`] → candidate words

pub mod constraints;
mod filter;
mod generator;
mod validator;

pub use filter::{candidates, candidates_with_rng, sample};
pub use generator::feedback;
pub use validator::validate;
