//! Display functions for command results

use super::formatters::render_code;
use crate::commands::{CandidatesResult, CompareResult, ScoreResult};
use crate::core::GuessHistory;
use colored::Colorize;

/// Print the feedback for one guess
pub fn print_compare_result(result: &CompareResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Target: {}   Guess: {}",
        result.target.to_uppercase().bright_yellow().bold(),
        result.guess.to_uppercase().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}  {}", result.code, result.pattern);
}

/// Print a validated history, one guess per line
pub fn print_history(history: &GuessHistory) {
    if history.is_empty() {
        println!("{}", "No guesses recorded.".bright_black());
        return;
    }

    for (i, (word, code)) in history.iter().enumerate() {
        println!(
            "  {}. {} {}",
            (i + 1).to_string().bright_black(),
            word.text().to_uppercase().bright_white().bold(),
            render_code(code)
        );
    }

    if history.is_solved() {
        println!("\n{}", "✅ Target already found".green().bold());
    } else {
        println!("\n{}", "✓ History is consistent".green());
    }
}

/// Print the candidate words left by a history
pub fn print_candidates(result: &CandidatesResult) {
    print_history(&result.history);

    let heading = if result.sampled {
        format!("{} sampled candidates:", result.candidates.len())
    } else {
        format!("{} candidates:", result.candidates.len())
    };
    println!("\n📋 {}", heading.bright_cyan().bold());

    if result.candidates.is_empty() {
        println!("   {}", "(none)".bright_black());
        return;
    }

    for chunk in result.candidates.chunks(8) {
        let line: Vec<String> = chunk.iter().map(|w| w.to_uppercase()).collect();
        println!("   {}", line.join("  "));
    }
}

/// Print the score of a round
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "ROUND SCORE".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    for (i, pattern) in result.patterns.iter().enumerate() {
        println!("  {}. {pattern}", (i + 1).to_string().bright_black());
    }

    println!("\n   Attempts:  {}", result.attempts);
    if result.options.penalty {
        println!(
            "   Penalty:   {:.0}% per extra attempt",
            result.options.penalty_rate * 100.0
        );
    }

    let score = format!("{:.2}", result.score);
    let score = if result.score >= 100.0 {
        score.green().bold()
    } else if result.score >= 50.0 {
        score.yellow().bold()
    } else {
        score.red().bold()
    };
    println!("   Score:     {score}");
}
