//! Corpus of valid words
//!
//! The corpus is owned by the caller and only ever borrowed by the engine.

use super::{Word, WordleError};
use crate::wordlists::WORDS;
use rustc_hash::FxHashSet;

/// An ordered, de-duplicated collection of valid words with O(1) membership
#[derive(Debug, Clone)]
pub struct Corpus {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl Corpus {
    /// Build a corpus from strings, keeping the first occurrence of duplicates
    ///
    /// # Errors
    /// Returns [`WordleError::InvalidWord`] for the first entry that is not a word.
    ///
    /// # Examples
    /// ```
    /// use wordguess::core::Corpus;
    ///
    /// let corpus = Corpus::new(["cat", "dog", "CAT"]).unwrap();
    /// assert_eq!(corpus.len(), 2);
    /// assert!(corpus.contains("Dog"));
    /// ```
    pub fn new<I, S>(words: I) -> Result<Self, WordleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(Word::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_words(words))
    }

    /// Build a corpus from already validated words
    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut index = FxHashSet::default();
        let words = words
            .into_iter()
            .filter(|w| index.insert(w.clone()))
            .collect();
        Self { words, index }
    }

    /// Build a corpus from strings, skipping entries that are not words
    #[must_use]
    pub fn from_lenient<S: AsRef<str>>(words: &[S]) -> Self {
        Self::from_words(words.iter().filter_map(|s| Word::new(s).ok()))
    }

    /// The words in corpus order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the corpus has no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-insensitive membership test for a raw string
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.index.contains(&w))
    }

    /// Membership test for a normalized word
    #[inline]
    #[must_use]
    pub fn contains_word(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Parse `raw` and check that it belongs to the corpus
    ///
    /// # Errors
    /// Returns [`WordleError::InvalidWord`] if `raw` is not a word and
    /// [`WordleError::UnknownWord`] if it is not in the corpus.
    pub fn lookup(&self, raw: &str) -> Result<Word, WordleError> {
        let word = Word::new(raw)?;
        if self.index.contains(&word) {
            Ok(word)
        } else {
            Err(WordleError::UnknownWord(raw.to_string()))
        }
    }
}

/// A fresh copy of the embedded default word list
impl Default for Corpus {
    fn default() -> Self {
        Self::from_lenient(WORDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corpus_preserves_order_and_dedups() {
        let corpus = Corpus::new(["dog", "cat", "Dog", "emu"]).unwrap();
        let texts: Vec<&str> = corpus.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["dog", "cat", "emu"]);
    }

    #[test]
    fn corpus_rejects_invalid_entries() {
        assert!(matches!(
            Corpus::new(["cat", "d0g"]),
            Err(WordleError::InvalidWord(_))
        ));
        assert_eq!(Corpus::from_lenient(&["cat", "d0g", ""][..]).len(), 1);
    }

    #[test]
    fn membership_is_case_insensitive() {
        let corpus = Corpus::new(["apple"]).unwrap();
        assert!(corpus.contains("APPLE"));
        assert!(!corpus.contains("apply"));
        assert!(!corpus.contains("12345"));
    }

    #[test]
    fn lookup_distinguishes_errors() {
        let corpus = Corpus::new(["apple"]).unwrap();
        assert_eq!(corpus.lookup("Apple").unwrap().text(), "apple");
        assert!(matches!(
            corpus.lookup("zzzzz"),
            Err(WordleError::UnknownWord(_))
        ));
        assert!(matches!(
            corpus.lookup("12345"),
            Err(WordleError::InvalidWord(_))
        ));
    }

    #[test]
    fn default_corpus_is_embedded_list() {
        let corpus = Corpus::default();
        assert_eq!(corpus.len(), WORDS.len());
        assert!(corpus.contains("crane"));
    }
}
