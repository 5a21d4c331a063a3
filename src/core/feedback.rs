//! Feedback codes: one mark per letter of a guess
//!
//! The textual form uses one digit per position:
//! - `'0'` = Absent (letter not in the target, or all of its occurrences used up)
//! - `'1'` = Misplaced (letter in the target, wrong position)
//! - `'2'` = Correct (letter in the correct position)

use super::{Word, WordleError};
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    Absent,
    Misplaced,
    Correct,
}

impl Mark {
    /// Parse a feedback digit
    #[must_use]
    pub const fn from_digit(c: char) -> Option<Self> {
        match c {
            '0' => Some(Self::Absent),
            '1' => Some(Self::Misplaced),
            '2' => Some(Self::Correct),
            _ => None,
        }
    }

    /// The digit used in the textual form
    #[must_use]
    pub const fn digit(self) -> char {
        match self {
            Self::Absent => '0',
            Self::Misplaced => '1',
            Self::Correct => '2',
        }
    }

    /// Points contributed to a score (0/1/2)
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::Absent => 0,
            Self::Misplaced => 1,
            Self::Correct => 2,
        }
    }

    /// True for Misplaced and Correct: the letter occurs in the target
    #[must_use]
    pub const fn is_present(self) -> bool {
        !matches!(self, Self::Absent)
    }
}

/// Immutable feedback for a whole guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedbackCode(Vec<Mark>);

impl FeedbackCode {
    /// Build a code from marks
    #[must_use]
    pub fn new(marks: Vec<Mark>) -> Self {
        Self(marks)
    }

    /// Parse a code like `"01102"`
    ///
    /// The empty string parses to an empty code; callers that need a
    /// non-empty code check the length themselves.
    ///
    /// # Errors
    /// Returns [`WordleError::InvalidSymbol`] for the first character that is
    /// not `'0'`, `'1'` or `'2'`.
    pub fn parse(s: &str) -> Result<Self, WordleError> {
        s.chars()
            .map(|c| Mark::from_digit(c).ok_or(WordleError::InvalidSymbol(c)))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches Correct; every other target letter
    ///    goes into the pool of unconsumed letters
    /// 2. Second pass: each non-Correct guess letter still in the pool is
    ///    Misplaced and consumes one occurrence, otherwise Absent
    ///
    /// Both words must have the same length; the checked entry point is
    /// [`crate::solver::feedback`].
    ///
    /// # Examples
    /// ```
    /// use wordguess::core::{FeedbackCode, Word};
    ///
    /// let target = Word::new("apple").unwrap();
    /// let guess = Word::new("apply").unwrap();
    /// assert_eq!(FeedbackCode::calculate(&target, &guess).to_string(), "22220");
    /// ```
    #[must_use]
    pub fn calculate(target: &Word, guess: &Word) -> Self {
        debug_assert_eq!(target.len(), guess.len(), "feedback needs equal lengths");

        let mut marks = vec![Mark::Absent; guess.len()];
        let mut unconsumed = target.letter_counts();

        // First pass: exact matches consume their letter
        for (i, (&t, &g)) in target.letters().iter().zip(guess.letters()).enumerate() {
            if t == g {
                marks[i] = Mark::Correct;
                if let Some(count) = unconsumed.get_mut(&t) {
                    *count -= 1;
                }
            }
        }

        // Second pass: inexact matches draw from what is left
        for (i, &g) in guess.letters().iter().enumerate() {
            if marks[i] == Mark::Correct {
                continue;
            }
            if let Some(count) = unconsumed.get_mut(&g)
                && *count > 0
            {
                marks[i] = Mark::Misplaced;
                *count -= 1;
            }
        }

        Self(marks)
    }

    /// The marks in position order
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the empty code
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is Correct (the target was guessed)
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&m| m == Mark::Correct)
    }

    /// Sum of mark points (Correct = 2, Misplaced = 1, Absent = 0)
    #[must_use]
    pub fn points(&self) -> u32 {
        self.0.iter().map(|m| m.points()).sum()
    }

    /// Count positions with the given mark
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }
}

impl fmt::Display for FeedbackCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|m| write!(f, "{}", m.digit()))
    }
}

impl std::str::FromStr for FeedbackCode {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
