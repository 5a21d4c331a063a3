//! Score calculation from feedback codes
//!
//! Each mark is worth points (Absent = 0, Misplaced = 1, Correct = 2). The
//! best result of a round, normalized against `length × 2`, is the score.

use crate::core::{FeedbackCode, WordleError};

/// Penalty settings for [`score`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreOptions {
    /// Apply the penalty for every attempt after the first
    pub penalty: bool,
    /// Fraction in [0, 1] taken off per extra attempt, compounded
    pub penalty_rate: f64,
}

impl ScoreOptions {
    /// Options with the penalty enabled at `penalty_rate`
    #[must_use]
    pub const fn with_penalty(penalty_rate: f64) -> Self {
        Self {
            penalty: true,
            penalty_rate,
        }
    }

    fn validate(self) -> Result<Self, WordleError> {
        if (0.0..=1.0).contains(&self.penalty_rate) {
            Ok(self)
        } else {
            Err(WordleError::InvalidParameter(format!(
                "penalty rate must be between 0 and 1, got {}",
                self.penalty_rate
            )))
        }
    }
}

impl Default for ScoreOptions {
    fn default() -> Self {
        Self {
            penalty: false,
            penalty_rate: 0.0,
        }
    }
}

/// Score a round from feedback strings like `"01122"`
///
/// # Errors
/// - [`WordleError::InvalidSymbol`] if a result contains something other than `0`/`1`/`2`
/// - everything [`score_codes`] reports
///
/// # Examples
/// ```
/// use wordguess::scoring::{ScoreOptions, score};
///
/// let results = ["01122", "02222", "22222"];
/// assert_eq!(score(&results, ScoreOptions::default()).unwrap(), 100.0);
/// assert_eq!(score(&results, ScoreOptions::with_penalty(0.1)).unwrap(), 81.0);
/// ```
pub fn score<S: AsRef<str>>(results: &[S], options: ScoreOptions) -> Result<f64, WordleError> {
    let codes = results
        .iter()
        .map(|r| FeedbackCode::parse(r.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    score_codes(&codes, options)
}

/// Score a round from parsed feedback codes
///
/// The highest-scoring code counts; with the penalty enabled the percentage
/// is multiplied by `(1 - penalty_rate)^(attempts - 1)`. The result is
/// rounded to two decimals.
///
/// # Errors
/// - [`WordleError::InvalidParameter`] for an empty round, an empty code, or
///   a penalty rate outside [0, 1]
/// - [`WordleError::LengthMismatch`] if codes differ in length
pub fn score_codes(results: &[FeedbackCode], options: ScoreOptions) -> Result<f64, WordleError> {
    let options = options.validate()?;

    let Some(first) = results.first() else {
        return Err(WordleError::InvalidParameter(
            "at least one result is required".to_string(),
        ));
    };
    if results.iter().any(FeedbackCode::is_empty) {
        return Err(WordleError::InvalidParameter(
            "results must not be empty".to_string(),
        ));
    }
    if let Some(ragged) = results.iter().find(|r| r.len() != first.len()) {
        return Err(WordleError::LengthMismatch {
            expected: first.len(),
            found: ragged.len(),
        });
    }

    let total = f64::from(first.len() as u32 * 2);
    let best = results.iter().map(FeedbackCode::points).max().unwrap_or(0);
    let mut percentage = f64::from(best) / total * 100.0;

    if options.penalty {
        let extra_attempts = i32::try_from(results.len() - 1).unwrap_or(i32::MAX);
        percentage *= (1.0 - options.penalty_rate).powi(extra_attempts);
    }

    Ok((percentage * 100.0).round() / 100.0)
}
