//! Display functions for command results

use super::formatters::{format_keyboard, format_row};
use crate::commands::ScoreResult;
use crate::core::{Feedback, Grid, KeyIndicators, Word};
use colored::Colorize;
use std::io::{self, Write};

/// Print the result of scoring a single guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.text().to_uppercase().bright_yellow().bold(),
        result.target.text().to_uppercase().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}", result.feedback.to_emoji());

    for (i, class) in result.feedback.classes().iter().enumerate() {
        println!(
            "  {}: {}",
            char::from(result.guess.char_at(i)).to_ascii_uppercase(),
            class
        );
    }

    if !result.guess_known {
        println!("\n{}", "Note: guess is not in the word list".yellow());
    }
}

/// Write every used row of the grid
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_board(out: &mut impl Write, grid: &Grid) -> io::Result<()> {
    writeln!(out)?;
    for row in grid.rows().iter().filter(|r| !r.is_blank()) {
        writeln!(out, "  {}", format_row(row))?;
    }
    writeln!(out)
}

/// Write the on-screen keyboard
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_keyboard(out: &mut impl Write, keys: &KeyIndicators) -> io::Result<()> {
    for line in format_keyboard(keys) {
        writeln!(out, "  {line}")?;
    }
    Ok(())
}

/// Write the shareable emoji summary of a finished round
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_summary(
    out: &mut impl Write,
    history: &[(Word, Feedback)],
    max_attempts: usize,
    won: bool,
) -> io::Result<()> {
    let score = if won {
        history.len().to_string()
    } else {
        "X".to_string()
    };
    writeln!(out, "\n  Wordle {score}/{max_attempts}\n")?;
    for (_, feedback) in history {
        writeln!(out, "  {}", feedback.to_emoji())?;
    }
    writeln!(out)
}
