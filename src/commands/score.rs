//! Score command
//!
//! Scores a round from the feedback codes it produced.

use crate::core::{FeedbackCode, WordleError};
use crate::output::formatters::render_code;
use crate::scoring::{ScoreOptions, score_codes};

/// Result of scoring a round
pub struct ScoreResult {
    pub attempts: usize,
    pub patterns: Vec<String>,
    pub score: f64,
    pub options: ScoreOptions,
}

/// Score feedback codes given on the command line
///
/// # Errors
///
/// Returns an error if a code is malformed, codes differ in length, or the
/// penalty rate is out of range.
pub fn score_round<S: AsRef<str>>(
    results: &[S],
    options: ScoreOptions,
) -> Result<ScoreResult, WordleError> {
    let codes = results
        .iter()
        .map(|r| FeedbackCode::parse(r.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    let score = score_codes(&codes, options)?;

    Ok(ScoreResult {
        attempts: codes.len(),
        patterns: codes.iter().map(render_code).collect(),
        score,
        options,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_round_with_penalty() {
        let result = score_round(&["01122", "02222", "22222"], ScoreOptions::with_penalty(0.1))
            .unwrap();
        assert_eq!(result.attempts, 3);
        assert_eq!(result.patterns.len(), 3);
        assert!((result.score - 81.0).abs() < f64::EPSILON);
    }

    #[test]
    fn score_round_rejects_bad_symbols() {
        assert!(score_round(&["0x122"], ScoreOptions::default()).is_err());
    }
}
