//! Error type shared by every rules-engine operation

use std::fmt;

/// Errors raised by the rules engine
///
/// Every failure is deterministic for a given input and is surfaced to the
/// immediate caller; nothing is retried or recovered internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordleError {
    /// The string is not a word: empty, or contains something other than ASCII letters
    InvalidWord(String),
    /// Guess/target/feedback lengths disagree, or a collection has non-uniform lengths
    LengthMismatch { expected: usize, found: usize },
    /// The word is not part of the corpus
    UnknownWord(String),
    /// A feedback character outside of `'0'`, `'1'` and `'2'`
    InvalidSymbol(char),
    /// Feedback claims in a history contradict each other
    InconsistentHistory(String),
    /// The history is consistent but no corpus word satisfies it, and it is not solved
    CorpusConsistency,
    /// An argument is out of its allowed range
    InvalidParameter(String),
}

impl fmt::Display for WordleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(word) => {
                write!(f, "'{word}' is not a word: only ASCII letters are allowed")
            }
            Self::LengthMismatch { expected, found } => {
                write!(f, "words must have the same length: expected {expected}, got {found}")
            }
            Self::UnknownWord(word) => write!(f, "'{word}' is not a valid word in the corpus"),
            Self::InvalidSymbol(symbol) => write!(
                f,
                "invalid feedback symbol '{symbol}': only '0', '1' and '2' are allowed"
            ),
            Self::InconsistentHistory(reason) => write!(f, "inconsistent guess history: {reason}"),
            Self::CorpusConsistency => write!(
                f,
                "no word in the corpus matches the recorded feedback"
            ),
            Self::InvalidParameter(reason) => write!(f, "invalid parameter: {reason}"),
        }
    }
}

impl std::error::Error for WordleError {}
