//! Terminal output formatting
//!
//! Pattern rendering and pretty-printing of command results.

pub mod display;
pub mod formatters;

pub use display::{print_candidates, print_compare_result, print_history, print_score_result};
pub use formatters::{render, render_code};
