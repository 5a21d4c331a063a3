//! Guess history: the only durable state of a game session
//!
//! An insertion-ordered map from guessed word to the feedback it received.
//! Structural invariants hold from construction on:
//! - every feedback code has the length of its guess
//! - every guess has the same length

use super::{FeedbackCode, Word, WordleError};

/// Ordered mapping of guess to feedback
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessHistory {
    entries: Vec<(Word, FeedbackCode)>,
}

impl GuessHistory {
    /// Create an empty history
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a history from `(guess, feedback)` string pairs
    ///
    /// # Errors
    /// Fails on the first pair whose guess is not a word, whose feedback has
    /// an unknown symbol, or whose lengths break the history invariants.
    ///
    /// # Examples
    /// ```
    /// use wordguess::core::GuessHistory;
    ///
    /// let history = GuessHistory::from_pairs([("crane", "01200"), ("sloth", "10020")]).unwrap();
    /// assert_eq!(history.len(), 2);
    /// assert!(GuessHistory::from_pairs([("hello", "100001")]).is_err());
    /// ```
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, WordleError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut history = Self::new();
        for (guess, feedback) in pairs {
            history.insert(Word::new(guess)?, FeedbackCode::parse(feedback.as_ref())?)?;
        }
        Ok(history)
    }

    /// Record feedback for a guess
    ///
    /// Returns the previous feedback if the guess was already recorded; the
    /// entry keeps its original position.
    ///
    /// # Errors
    /// Returns [`WordleError::LengthMismatch`] if the feedback length differs
    /// from the guess length, or the guess length differs from earlier guesses.
    pub fn insert(
        &mut self,
        guess: Word,
        feedback: FeedbackCode,
    ) -> Result<Option<FeedbackCode>, WordleError> {
        if feedback.len() != guess.len() {
            return Err(WordleError::LengthMismatch {
                expected: guess.len(),
                found: feedback.len(),
            });
        }
        if let Some(expected) = self.word_len()
            && guess.len() != expected
        {
            return Err(WordleError::LengthMismatch {
                expected,
                found: guess.len(),
            });
        }

        if let Some((_, existing)) = self.entries.iter_mut().find(|(g, _)| *g == guess) {
            return Ok(Some(std::mem::replace(existing, feedback)));
        }
        self.entries.push((guess, feedback));
        Ok(None)
    }

    /// Feedback recorded for `guess`
    #[must_use]
    pub fn get(&self, guess: &Word) -> Option<&FeedbackCode> {
        self.entries
            .iter()
            .find(|(g, _)| g == guess)
            .map(|(_, f)| f)
    }

    /// Check if `word` was already guessed
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.entries.iter().any(|(g, _)| g == word)
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Word, &FeedbackCode)> {
        self.entries.iter().map(|(g, f)| (g, f))
    }

    /// Number of recorded guesses
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing was guessed yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The common word length, `None` for an empty history
    #[must_use]
    pub fn word_len(&self) -> Option<usize> {
        self.entries.first().map(|(g, _)| g.len())
    }

    /// Check if some guess received all-Correct feedback
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.entries.iter().any(|(_, f)| f.is_solved())
    }
}
