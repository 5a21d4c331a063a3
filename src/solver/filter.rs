//! Candidate filtering
//!
//! Narrows a corpus down to the words that could still be the target given
//! a validated history, optionally sampling a random subset.

use super::constraints::GuessRequirements;
use super::validator::validate;
use crate::core::{Corpus, GuessHistory, Word, WordleError};
use log::{debug, trace};
use rand::Rng;
use rayon::prelude::*;

/// Words consistent with every entry of `history`, in corpus order
///
/// With `n`, at most `n` words are returned: a uniform random sample without
/// replacement when more words match. Uses the thread-local RNG; see
/// [`candidates_with_rng`] for reproducible sampling.
///
/// # Errors
/// See [`candidates_with_rng`].
///
/// # Examples
/// ```
/// use wordguess::core::{Corpus, GuessHistory};
/// use wordguess::solver::candidates;
///
/// let corpus = Corpus::new(["cat", "dog"]).unwrap();
/// let words = candidates(&GuessHistory::new(), None, &corpus).unwrap();
/// assert_eq!(words.len(), 2);
/// ```
pub fn candidates<'c>(
    history: &GuessHistory,
    n: Option<usize>,
    corpus: &'c Corpus,
) -> Result<Vec<&'c Word>, WordleError> {
    candidates_with_rng(history, n, corpus, &mut rand::rng())
}

/// Words consistent with every entry of `history`, sampling with `rng`
///
/// Rules per history entry (guess, feedback):
/// - Correct positions must hold the same letter
/// - Misplaced letters must occur, but not at their position
/// - Absent letters must not sit at their position, and cap the letter count
/// - Words of another length and words already guessed are never candidates
///
/// An empty history returns the whole corpus.
///
/// # Errors
/// - Anything [`validate`] reports, unchanged
/// - [`WordleError::CorpusConsistency`] if nothing matches and no guess in
///   the history is all-Correct
pub fn candidates_with_rng<'c, R: Rng + ?Sized>(
    history: &GuessHistory,
    n: Option<usize>,
    corpus: &'c Corpus,
    rng: &mut R,
) -> Result<Vec<&'c Word>, WordleError> {
    validate(history, corpus)?;

    let matches: Vec<&Word> = match history.word_len() {
        None => corpus.words().iter().collect(),
        Some(word_len) => {
            let requirements: Vec<GuessRequirements> = history
                .iter()
                .map(|(guess, feedback)| GuessRequirements::new(guess, feedback))
                .collect();

            corpus
                .words()
                .par_iter()
                .filter(|word| word.len() == word_len && !history.contains(word))
                .filter(|word| {
                    let admitted = requirements.iter().all(|r| r.admits(word));
                    if !admitted {
                        trace!("eliminated {word}");
                    }
                    admitted
                })
                .collect()
        }
    };

    debug!(
        "{} of {} corpus words match a history of {} guesses",
        matches.len(),
        corpus.len(),
        history.len()
    );

    if matches.is_empty() && !history.is_empty() && !history.is_solved() {
        return Err(WordleError::CorpusConsistency);
    }

    Ok(sample(matches, n, rng))
}

/// Keep at most `n` entries, chosen uniformly; survivors stay in input order
#[must_use]
pub fn sample<'c, R: Rng + ?Sized>(
    matches: Vec<&'c Word>,
    n: Option<usize>,
    rng: &mut R,
) -> Vec<&'c Word> {
    match n {
        Some(n) if matches.len() > n => {
            let mut picked = rand::seq::index::sample(rng, matches.len(), n).into_vec();
            picked.sort_unstable();
            picked.into_iter().map(|i| matches[i]).collect()
        }
        _ => matches,
    }
}
