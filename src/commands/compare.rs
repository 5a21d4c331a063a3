//! Feedback command
//!
//! Compares one guess against a target word.

use crate::core::{Corpus, FeedbackCode, WordleError};
use crate::output::formatters::render_code;
use crate::solver::feedback;

/// Result of comparing a guess with a target
pub struct CompareResult {
    pub target: String,
    pub guess: String,
    pub code: FeedbackCode,
    pub pattern: String,
}

/// Compare `guess` against `target`
///
/// # Errors
///
/// Returns an error if the words differ in length or are not in the corpus.
pub fn compare_words(
    target: &str,
    guess: &str,
    corpus: &Corpus,
) -> Result<CompareResult, WordleError> {
    let code = feedback(target, guess, corpus)?;
    let pattern = render_code(&code);

    Ok(CompareResult {
        target: target.to_lowercase(),
        guess: guess.to_lowercase(),
        code,
        pattern,
    })
}
