//! Corpus loading utilities
//!
//! Provides functions to load a corpus from a file or use the embedded list.

use crate::core::{Corpus, Word};
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Load a corpus from a file
///
/// One word per line. Blank lines and entries that are not words are
/// skipped; duplicates keep their first occurrence.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordguess::wordlists::load_from_file;
///
/// let corpus = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", corpus.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Corpus> {
    let content = fs::read_to_string(path.as_ref())?;
    let corpus = parse_word_list(&content);
    debug!(
        "loaded {} words from {}",
        corpus.len(),
        path.as_ref().display()
    );
    Ok(corpus)
}

/// Resolve a word list setting: `default` for the embedded list, otherwise a path
///
/// # Errors
///
/// Returns an I/O error if a file path is given and cannot be read.
pub fn load_corpus(wordlist: &str) -> io::Result<Corpus> {
    match wordlist {
        "default" => Ok(Corpus::default()),
        path => load_from_file(path),
    }
}

fn parse_word_list(content: &str) -> Corpus {
    let words = content.lines().filter_map(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        Word::new(trimmed)
            .inspect_err(|e| warn!("skipping word list entry: {e}"))
            .ok()
    });
    Corpus::from_words(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;

    #[test]
    fn parse_skips_blank_and_invalid_lines() {
        let corpus = parse_word_list("crane\n\n  slate \nsh0rt\nCRANE\nirate\n");
        let texts: Vec<&str> = corpus.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate", "irate"]);
    }

    #[test]
    fn parse_empty_content() {
        assert!(parse_word_list("").is_empty());
    }

    #[test]
    fn load_default_is_embedded() {
        let corpus = load_corpus("default").unwrap();
        assert_eq!(corpus.len(), WORDS.len());
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(load_corpus("/definitely/not/here/words.txt").is_err());
    }

    #[test]
    fn load_from_written_file() {
        let path = std::env::temp_dir().join(format!("wordguess-{}.txt", std::process::id()));
        fs::write(&path, "cat\ndog\n").unwrap();

        let corpus = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(corpus.len(), 2);
        assert!(corpus.contains("dog"));
    }
}
