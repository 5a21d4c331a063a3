//! Checked feedback generation against a corpus

use crate::core::{Corpus, FeedbackCode, WordleError};

/// Compare `guess` to `target` and produce its feedback code
///
/// Both words are looked up case-insensitively in `corpus`.
///
/// # Errors
/// - [`WordleError::LengthMismatch`] if the words differ in length (checked first)
/// - [`WordleError::InvalidWord`] if either string is not a word
/// - [`WordleError::UnknownWord`] if either word is not in the corpus
///
/// # Examples
/// ```
/// use wordguess::core::Corpus;
/// use wordguess::solver::feedback;
///
/// let corpus = Corpus::new(["stare", "tears"]).unwrap();
/// assert_eq!(feedback("stare", "tears", &corpus).unwrap().to_string(), "11221");
/// ```
pub fn feedback(target: &str, guess: &str, corpus: &Corpus) -> Result<FeedbackCode, WordleError> {
    let (target_len, guess_len) = (target.chars().count(), guess.chars().count());
    if target_len != guess_len {
        return Err(WordleError::LengthMismatch {
            expected: target_len,
            found: guess_len,
        });
    }

    let target = corpus.lookup(target)?;
    let guess = corpus.lookup(guess)?;

    Ok(FeedbackCode::calculate(&target, &guess))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;

    fn mock_corpus() -> Corpus {
        Corpus::new([
            "apple", "apply", "stare", "tears", "abort", "alarm", "books", "slope",
        ])
        .unwrap()
    }

    #[test]
    fn feedback_standard_inputs() {
        let corpus = mock_corpus();
        assert_eq!(feedback("apple", "apply", &corpus).unwrap().to_string(), "22220");
        assert_eq!(feedback("stare", "tears", &corpus).unwrap().to_string(), "11221");
        assert_eq!(feedback("abort", "alarm", &corpus).unwrap().to_string(), "20020");
    }

    #[test]
    fn feedback_is_case_insensitive() {
        let corpus = mock_corpus();
        assert_eq!(
            feedback("APPLE", "Apply", &corpus).unwrap(),
            feedback("apple", "apply", &corpus).unwrap()
        );
    }

    #[test]
    fn feedback_length_checked_before_membership() {
        let corpus = mock_corpus();
        assert!(matches!(
            feedback("apple", "longword", &corpus),
            Err(WordleError::LengthMismatch {
                expected: 5,
                found: 8
            })
        ));
    }

    #[test]
    fn feedback_unknown_words() {
        let corpus = mock_corpus();
        assert!(matches!(
            feedback("apple", "zzzzz", &corpus),
            Err(WordleError::UnknownWord(_))
        ));
        assert!(matches!(
            feedback("zzzzz", "apple", &corpus),
            Err(WordleError::UnknownWord(_))
        ));
        assert!(matches!(
            feedback("apple", "12345", &corpus),
            Err(WordleError::InvalidWord(_))
        ));
    }

    #[test]
    fn misplaced_never_exceeds_unmatched_target_letters() {
        let corpus = Corpus::default();
        let words: Vec<_> = corpus.words().iter().take(60).collect();

        for target in &words {
            for guess in &words {
                let code = FeedbackCode::calculate(target, guess);
                let exact = target
                    .letters()
                    .iter()
                    .zip(guess.letters())
                    .filter(|(t, g)| t == g)
                    .count();
                assert_eq!(code.count(Mark::Correct), exact);

                for &letter in guess.letters() {
                    let correct = code
                        .marks()
                        .iter()
                        .zip(guess.letters())
                        .filter(|&(&m, &g)| g == letter && m == Mark::Correct)
                        .count();
                    let misplaced = code
                        .marks()
                        .iter()
                        .zip(guess.letters())
                        .filter(|&(&m, &g)| g == letter && m == Mark::Misplaced)
                        .count();
                    assert!(misplaced <= target.count_of(letter) - correct);
                }
            }
        }
    }
}
