//! History commands
//!
//! Parse a guess history from the command line, validate it, and list the
//! words that are still possible.

use crate::core::{Corpus, GuessHistory, WordleError};
use crate::solver::{candidates_with_rng, sample, validate};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for listing candidates
pub struct CandidatesConfig {
    /// Entries of the form `word=code`
    pub entries: Vec<String>,
    /// Sample at most this many candidates
    pub limit: Option<usize>,
    /// Seed for reproducible sampling
    pub seed: Option<u64>,
}

/// Result of listing candidates
pub struct CandidatesResult {
    pub history: GuessHistory,
    pub candidates: Vec<String>,
    pub sampled: bool,
}

/// Parse `word=code` (or `word:code`) entries into a history
///
/// # Errors
///
/// Returns an error if an entry lacks a separator, or its word or code is invalid.
pub fn parse_history<S: AsRef<str>>(entries: &[S]) -> Result<GuessHistory, WordleError> {
    let pairs = entries
        .iter()
        .map(|entry| {
            let entry = entry.as_ref();
            entry
                .split_once(['=', ':'])
                .map(|(word, code)| (word.trim(), code.trim()))
                .ok_or_else(|| {
                    WordleError::InvalidParameter(format!(
                        "history entry '{entry}' must look like word=code"
                    ))
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    GuessHistory::from_pairs(pairs)
}

/// Parse and validate a history against the corpus
///
/// # Errors
///
/// Returns an error if parsing fails or the history is inconsistent.
pub fn check_history<S: AsRef<str>>(
    entries: &[S],
    corpus: &Corpus,
) -> Result<GuessHistory, WordleError> {
    let history = parse_history(entries)?;
    validate(&history, corpus)?;
    Ok(history)
}

/// List the candidates consistent with a history
///
/// # Errors
///
/// Returns an error if the history cannot be parsed, is inconsistent, or no
/// corpus word matches it.
pub fn find_candidates(
    config: CandidatesConfig,
    corpus: &Corpus,
) -> Result<CandidatesResult, WordleError> {
    let history = parse_history(&config.entries)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let matches = candidates_with_rng(&history, None, corpus, &mut rng)?;
    let total = matches.len();
    let words = sample(matches, config.limit, &mut rng);
    let sampled = words.len() < total;
    let candidates: Vec<String> = words.iter().map(|w| w.text().to_string()).collect();

    Ok(CandidatesResult {
        history,
        candidates,
        sampled,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_history_accepts_both_separators() {
        let history = parse_history(&["crane=01200", "sloth:20010"]).unwrap();
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn parse_history_rejects_missing_separator() {
        assert!(matches!(
            parse_history(&["crane01200"]),
            Err(WordleError::InvalidParameter(_))
        ));
    }

    #[test]
    fn check_history_reports_conflicts() {
        let corpus = Corpus::default();
        assert!(matches!(
            check_history(&["under=00200", "index=00100"], &corpus),
            Err(WordleError::InconsistentHistory(_))
        ));
        assert!(check_history(&["crane=01200"], &corpus).is_ok());
    }

    #[test]
    fn find_candidates_seeded() {
        let corpus = Corpus::default();
        let config = || CandidatesConfig {
            entries: vec!["crane=00000".to_string()],
            limit: Some(3),
            seed: Some(9),
        };

        let first = find_candidates(config(), &corpus).unwrap();
        let second = find_candidates(config(), &corpus).unwrap();

        assert_eq!(first.candidates.len(), 3);
        assert!(first.sampled);
        assert_eq!(first.candidates, second.candidates);
    }

    #[test]
    fn find_candidates_limit_equal_to_matches_is_not_sampled() {
        let corpus = Corpus::new(["cat", "dog"]).unwrap();
        let config = CandidatesConfig {
            entries: Vec::new(),
            limit: Some(2),
            seed: Some(1),
        };

        let result = find_candidates(config, &corpus).unwrap();
        assert_eq!(result.candidates, ["cat", "dog"]);
        assert!(!result.sampled);
    }

    #[test]
    fn find_candidates_without_limit() {
        let corpus = Corpus::new(["cat", "dog"]).unwrap();
        let config = CandidatesConfig {
            entries: Vec::new(),
            limit: None,
            seed: None,
        };

        let result = find_candidates(config, &corpus).unwrap();
        assert_eq!(result.candidates, ["cat", "dog"]);
        assert!(!result.sampled);
        assert!(result.history.is_empty());
    }
}
