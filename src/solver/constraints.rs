//! Constraints derived from feedback
//!
//! Two views of the same history:
//! - [`letter_constraints`] folds every observation per letter identity and is
//!   what consistency validation works on
//! - [`GuessRequirements`] turns one `(guess, feedback)` entry into positional
//!   and letter-count requirements that a candidate word must satisfy
//!
//! Nothing here is cached; constraints are recomputed from the history on
//! every call.

use crate::core::{FeedbackCode, GuessHistory, Mark, Word};
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use std::fmt;

/// A letter together with its repeat index inside one guess
///
/// The first occurrence of a letter has `occurrence == 0`, the second `1`, and
/// so on. Repeated letters in a guess can legitimately receive different
/// marks, so they are tracked as separate identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LetterIdentity {
    pub letter: u8,
    pub occurrence: usize,
}

impl fmt::Display for LetterIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.occurrence == 0 {
            write!(f, "'{}'", char::from(self.letter))
        } else {
            write!(
                f,
                "'{}' (repeat {})",
                char::from(self.letter),
                self.occurrence
            )
        }
    }
}

/// Letter identities of a guess, in position order
pub fn identities(guess: &Word) -> impl Iterator<Item = LetterIdentity> + '_ {
    let mut seen = FxHashMap::<u8, usize>::default();
    guess.letters().iter().map(move |&letter| {
        let occurrence = seen.entry(letter).or_insert(0);
        let identity = LetterIdentity {
            letter,
            occurrence: *occurrence,
        };
        *occurrence += 1;
        identity
    })
}

/// Everything a history says about one letter identity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterConstraint {
    /// Marked Absent somewhere
    pub absent: bool,
    /// Marked Misplaced or Correct somewhere
    pub present: bool,
    /// Positions where it was marked Correct
    pub correct_at: BTreeSet<usize>,
    /// Positions where it was marked Misplaced
    pub misplaced_at: BTreeSet<usize>,
}

impl LetterConstraint {
    fn observe(&mut self, position: usize, mark: Mark) {
        match mark {
            Mark::Absent => self.absent = true,
            Mark::Misplaced => {
                self.present = true;
                self.misplaced_at.insert(position);
            }
            Mark::Correct => {
                self.present = true;
                self.correct_at.insert(position);
            }
        }
    }
}

/// Fold every observation of the history into per-identity constraints
#[must_use]
pub fn letter_constraints(history: &GuessHistory) -> FxHashMap<LetterIdentity, LetterConstraint> {
    let mut constraints: FxHashMap<LetterIdentity, LetterConstraint> = FxHashMap::default();

    for (guess, feedback) in history.iter() {
        for (position, (identity, &mark)) in identities(guess).zip(feedback.marks()).enumerate() {
            constraints
                .entry(identity)
                .or_default()
                .observe(position, mark);
        }
    }

    constraints
}

/// Allowed occurrence range of a letter in a candidate word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterBounds {
    pub min: usize,
    /// `None` means unbounded
    pub max: Option<usize>,
}

impl LetterBounds {
    #[inline]
    #[must_use]
    pub fn admits(self, count: usize) -> bool {
        count >= self.min && self.max.is_none_or(|max| count <= max)
    }
}

/// What one `(guess, feedback)` entry requires of a candidate word
#[derive(Debug, Clone, Default)]
pub struct GuessRequirements {
    /// Correct: this letter at this position
    fixed: Vec<(usize, u8)>,
    /// Misplaced: letter present, but not at this position
    displaced: Vec<(usize, u8)>,
    /// Absent: letter not at this position
    excluded: Vec<(usize, u8)>,
    bounds: FxHashMap<u8, LetterBounds>,
}

impl GuessRequirements {
    /// Derive requirements from one history entry
    ///
    /// Every Misplaced or Correct mark raises the minimum count of its letter.
    /// Any Absent mark for a letter caps its count at that minimum: the target
    /// holds no occurrences beyond those already accounted for.
    #[must_use]
    pub fn new(guess: &Word, feedback: &FeedbackCode) -> Self {
        let mut requirements = Self::default();
        let mut capped = Vec::new();

        for (position, (&letter, &mark)) in guess.letters().iter().zip(feedback.marks()).enumerate()
        {
            let bounds = requirements.bounds.entry(letter).or_default();
            match mark {
                Mark::Correct => {
                    bounds.min += 1;
                    requirements.fixed.push((position, letter));
                }
                Mark::Misplaced => {
                    bounds.min += 1;
                    requirements.displaced.push((position, letter));
                }
                Mark::Absent => {
                    capped.push(letter);
                    requirements.excluded.push((position, letter));
                }
            }
        }

        for letter in capped {
            if let Some(bounds) = requirements.bounds.get_mut(&letter) {
                bounds.max = Some(bounds.min);
            }
        }

        requirements
    }

    /// Occurrence bounds for `letter`; unconstrained if the guess lacks it
    #[must_use]
    pub fn bounds(&self, letter: u8) -> LetterBounds {
        self.bounds.get(&letter).copied().unwrap_or_default()
    }

    /// Check a candidate word against every requirement
    ///
    /// Words of a different length never qualify.
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        let letters = word.letters();

        let positions_hold = self
            .fixed
            .iter()
            .all(|&(i, letter)| letters.get(i) == Some(&letter))
            && self
                .displaced
                .iter()
                .chain(&self.excluded)
                .all(|&(i, letter)| letters.get(i).is_some_and(|&l| l != letter));
        if !positions_hold {
            return false;
        }

        self.bounds
            .iter()
            .all(|(&letter, bounds)| bounds.admits(word.count_of(letter)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn requirements(guess: &str, code: &str) -> GuessRequirements {
        GuessRequirements::new(&word(guess), &FeedbackCode::parse(code).unwrap())
    }

    #[test]
    fn identities_label_repeats() {
        let ids: Vec<_> = identities(&word("geese")).collect();
        assert_eq!(ids[0], LetterIdentity { letter: b'g', occurrence: 0 });
        assert_eq!(ids[1], LetterIdentity { letter: b'e', occurrence: 0 });
        assert_eq!(ids[2], LetterIdentity { letter: b'e', occurrence: 1 });
        assert_eq!(ids[3], LetterIdentity { letter: b's', occurrence: 0 });
        assert_eq!(ids[4], LetterIdentity { letter: b'e', occurrence: 2 });
    }

    #[test]
    fn constraints_track_marks_per_identity() {
        let history = GuessHistory::from_pairs([("speed", "22200")]).unwrap();
        let constraints = letter_constraints(&history);

        let first_e = &constraints[&LetterIdentity { letter: b'e', occurrence: 0 }];
        assert!(first_e.present && !first_e.absent);
        assert_eq!(first_e.correct_at, BTreeSet::from([2]));

        let second_e = &constraints[&LetterIdentity { letter: b'e', occurrence: 1 }];
        assert!(second_e.absent && !second_e.present);
    }

    #[test]
    fn constraints_merge_across_guesses() {
        let history = GuessHistory::from_pairs([("crane", "10000"), ("clock", "01000")]).unwrap();
        let constraints = letter_constraints(&history);
        let c = &constraints[&LetterIdentity { letter: b'c', occurrence: 0 }];
        assert_eq!(c.misplaced_at, BTreeSet::from([0]));
        assert!(c.absent);
    }

    #[test]
    fn bounds_from_duplicate_letters() {
        let req = requirements("speed", "22200");
        assert_eq!(req.bounds(b'e'), LetterBounds { min: 1, max: Some(1) });
        assert_eq!(req.bounds(b'd'), LetterBounds { min: 0, max: Some(0) });
        assert_eq!(req.bounds(b's'), LetterBounds { min: 1, max: None });
        assert_eq!(req.bounds(b'z'), LetterBounds::default());
    }

    #[test]
    fn absent_before_correct_does_not_forbid_letter() {
        // "geese" against "crane": the last 'e' is Correct, earlier e's Absent
        let req = requirements("geese", "00002");
        assert_eq!(req.bounds(b'e'), LetterBounds { min: 1, max: Some(1) });
        assert!(req.admits(&word("crane")));
        assert!(!req.admits(&word("eerie")));
    }

    #[test]
    fn positional_requirements() {
        let req = requirements("crane", "10200");
        assert!(!req.admits(&word("chalk"))); // 'c' may not sit at position 0
        assert!(req.admits(&word("black")));
        assert!(!req.admits(&word("magic"))); // 'a' must be at position 2
        assert!(!req.admits(&word("cat")));
    }

    #[test]
    fn misplaced_letter_must_appear() {
        let req = requirements("crane", "01000");
        assert!(!req.admits(&word("tribe"))); // contains 'e', which is absent
        assert!(req.admits(&word("burst")));
        assert!(!req.admits(&word("motto")));
    }
}
