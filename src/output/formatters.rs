//! Formatting utilities for feedback codes

use crate::core::{FeedbackCode, Mark, WordleError};

/// Glyph shown for an Absent mark (black square)
pub const ABSENT_GLYPH: char = '\u{2B1B}';
/// Glyph shown for a Misplaced mark (yellow square)
pub const MISPLACED_GLYPH: char = '\u{1F7E8}';
/// Glyph shown for a Correct mark (green square)
pub const CORRECT_GLYPH: char = '\u{1F7E9}';

/// Display glyph for a single mark
#[must_use]
pub const fn glyph(mark: Mark) -> char {
    match mark {
        Mark::Absent => ABSENT_GLYPH,
        Mark::Misplaced => MISPLACED_GLYPH,
        Mark::Correct => CORRECT_GLYPH,
    }
}

/// Render a feedback string like `"01102"` as colored squares
///
/// The empty string renders as the empty string.
///
/// # Errors
/// Returns [`WordleError::InvalidSymbol`] for any character other than
/// `'0'`, `'1'` or `'2'`.
///
/// # Examples
/// ```
/// use wordguess::output::render;
///
/// assert_eq!(render("01102").unwrap(), "⬛🟨🟨⬛🟩");
/// assert!(render("wordle").is_err());
/// ```
pub fn render(code: &str) -> Result<String, WordleError> {
    code.chars()
        .map(|c| {
            Mark::from_digit(c)
                .map(glyph)
                .ok_or(WordleError::InvalidSymbol(c))
        })
        .collect()
}

/// Render an already parsed feedback code
#[must_use]
pub fn render_code(code: &FeedbackCode) -> String {
    code.marks().iter().map(|&m| glyph(m)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_mixed() {
        assert_eq!(
            render("01210").unwrap(),
            "\u{2B1B}\u{1F7E8}\u{1F7E9}\u{1F7E8}\u{2B1B}"
        );
        assert_eq!(
            render("0001221").unwrap(),
            "\u{2B1B}\u{2B1B}\u{2B1B}\u{1F7E8}\u{1F7E9}\u{1F7E9}\u{1F7E8}"
        );
    }

    #[test]
    fn render_all_absent_and_empty() {
        assert_eq!(render("000").unwrap(), "\u{2B1B}\u{2B1B}\u{2B1B}");
        assert_eq!(render("").unwrap(), "");
    }

    #[test]
    fn render_rejects_other_characters() {
        assert_eq!(render("12300"), Err(WordleError::InvalidSymbol('3')));
        assert!(render("89671").is_err());
        assert!(render("wordle").is_err());
    }

    #[test]
    fn render_code_matches_render() {
        let code = FeedbackCode::parse("01102").unwrap();
        assert_eq!(render_code(&code), render("01102").unwrap());
    }
}
