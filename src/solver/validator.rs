//! History consistency validation
//!
//! A history is consistent when no two feedback claims contradict each other.
//! Contradictions are detected jointly across all guesses:
//! 1. Presence: a letter identity marked Absent and also Misplaced/Correct
//! 2. Position: a letter identity marked Misplaced and Correct at one position
//! 3. Slot conflict: two different letters marked Correct at one position
//! 4. Over-constraint: more distinct present letters than the word has slots

use super::constraints::letter_constraints;
use crate::core::{Corpus, GuessHistory, Mark, WordleError};
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

/// Check that every guess is known and the history is self-consistent
///
/// Structural invariants (lengths, symbols) are already guaranteed by
/// [`GuessHistory`]; corpus membership is checked here before any
/// consistency rule runs.
///
/// # Errors
/// - [`WordleError::UnknownWord`] if a guess is not in the corpus
/// - [`WordleError::InconsistentHistory`] on the first contradiction found
///
/// # Examples
/// ```
/// use wordguess::core::{Corpus, GuessHistory, WordleError};
/// use wordguess::solver::validate;
///
/// let corpus = Corpus::new(["under", "index"]).unwrap();
/// let history = GuessHistory::from_pairs([("under", "00200"), ("index", "00100")]).unwrap();
/// assert!(matches!(
///     validate(&history, &corpus),
///     Err(WordleError::InconsistentHistory(_))
/// ));
/// ```
pub fn validate(history: &GuessHistory, corpus: &Corpus) -> Result<(), WordleError> {
    if let Some((guess, _)) = history.iter().find(|(g, _)| !corpus.contains_word(g)) {
        return Err(WordleError::UnknownWord(guess.text().to_string()));
    }

    let Some(word_len) = history.word_len() else {
        return Ok(());
    };

    let mut identities: Vec<_> = letter_constraints(history).into_iter().collect();
    identities.sort_unstable_by_key(|(identity, _)| *identity);

    for (identity, constraint) in &identities {
        if constraint.absent && constraint.present {
            return Err(WordleError::InconsistentHistory(format!(
                "{identity} is marked both absent and present"
            )));
        }
        if let Some(position) = constraint
            .correct_at
            .intersection(&constraint.misplaced_at)
            .next()
        {
            return Err(WordleError::InconsistentHistory(format!(
                "{identity} is marked both correct and misplaced at position {}",
                position + 1
            )));
        }
    }

    let mut slots: FxHashMap<usize, u8> = FxHashMap::default();
    let mut present: FxHashSet<u8> = FxHashSet::default();

    for (guess, feedback) in history.iter() {
        for (position, (&letter, &mark)) in guess.letters().iter().zip(feedback.marks()).enumerate()
        {
            if mark.is_present() {
                present.insert(letter);
            }
            if mark != Mark::Correct {
                continue;
            }
            let claimed = *slots.entry(position).or_insert(letter);
            if claimed != letter {
                return Err(WordleError::InconsistentHistory(format!(
                    "position {} is marked correct for both '{}' and '{}'",
                    position + 1,
                    char::from(claimed),
                    char::from(letter)
                )));
            }
        }
    }

    if present.len() > word_len {
        return Err(WordleError::InconsistentHistory(format!(
            "{} distinct letters are marked present in a {word_len}-letter word",
            present.len()
        )));
    }

    debug!(
        "history of {} guesses is consistent ({} letters known present)",
        history.len(),
        present.len()
    );
    Ok(())
}
