//! Simple line-based play
//!
//! Text-based play without the TUI: one guess per line, tiles revealed at once.

use crate::core::WORD_LENGTH;
use crate::game::{AlertDuration, Effect, Game, RoundOutcome, WordValidator};
use crate::output::{write_board, write_keyboard, write_summary};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
pub fn run_simple<V: WordValidator>(game: &mut Game<V>) -> Result<Option<RoundOutcome>> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(game, &mut stdin.lock(), &mut stdout.lock())
}

/// Play a round reading guesses from `input`
///
/// Returns the final outcome, or `None` if the input ended or the player quit
/// before the round was decided.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn play_lines<V: WordValidator>(
    game: &mut Game<V>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Option<RoundOutcome>> {
    writeln!(out, "\n╔══════════════════════════════════════╗")?;
    writeln!(out, "║               W O R D L E            ║")?;
    writeln!(out, "╚══════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the {WORD_LENGTH}-letter word in {} tries. Type 'quit' to give up.\n",
        game.config().max_attempts
    )?;

    let mut line = String::new();
    let mut last = None;
    while !last.is_some_and(RoundOutcome::is_terminal) {
        let attempt = game.history().len() + 1;
        write!(out, "Guess {attempt}/{}: ", game.config().max_attempts)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(None);
        }
        let guess = line.trim();
        if matches!(guess, "quit" | "q" | "exit") {
            writeln!(
                out,
                "\nThe word was {}",
                game.target().text().to_uppercase().bold()
            )?;
            return Ok(None);
        }

        // Rejections are reported through the alert effects below
        let result = game.play_word(guess);
        render_effects(out, game.drain_effects())?;

        if let Ok(outcome) = result {
            last = outcome;
            write_board(out, game.grid())?;
            write_keyboard(out, game.keys())?;
            writeln!(out)?;
        }
    }

    let outcome = game.outcome();
    write_summary(
        out,
        game.history(),
        game.config().max_attempts,
        outcome == Some(RoundOutcome::Win),
    )?;
    Ok(outcome)
}

fn render_effects(out: &mut impl Write, effects: Vec<Effect>) -> io::Result<()> {
    for effect in effects {
        match effect {
            Effect::Alert {
                text,
                duration: AlertDuration::Transient(_),
            } => writeln!(out, "  {}", text.bright_yellow().bold())?,
            Effect::Alert {
                text,
                duration: AlertDuration::Persistent,
            } => writeln!(out, "  {}", text.bright_red().bold())?,
            Effect::RoundEnded(RoundOutcome::Win) => {
                writeln!(out, "  {}", "🎉 Solved!".bright_green().bold())?;
            }
            Effect::RoundEnded(RoundOutcome::Lose) => {
                writeln!(out, "  {}", "Out of guesses.".red())?;
            }
            _ => {}
        }
    }
    Ok(())
}
