//! Wordle - CLI
//!
//! Terminal Wordle with TUI and line-based modes.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use wordle_game::{
    commands::{run_simple, score_guess},
    core::Word,
    game::{Game, GameConfig},
    interactive::{App, run_tui},
    output::print_score_result,
    wordlists::{
        ANSWERS, WordList,
        daily::{daily_word, random_word, todays_word},
        loader::{load_from_file, words_from_slice},
    },
};

/// Most guess rows the CLI accepts
const MAX_ATTEMPTS: i64 = 20;

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Play a fixed target word
    #[arg(long, global = true, conflicts_with_all = ["date", "random"])]
    word: Option<String>,

    /// Play the daily word of a date (YYYY-MM-DD) instead of today
    #[arg(long, global = true, conflicts_with = "random")]
    date: Option<NaiveDate>,

    /// Play a random answer instead of the daily word
    #[arg(long, global = true)]
    random: bool,

    /// Extra guessable words, one per line
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Number of guesses (1-20)
    #[arg(
        short,
        long,
        global = true,
        default_value = "6",
        value_parser = clap::value_parser!(u16).range(1..=MAX_ATTEMPTS)
    )]
    attempts: u16,

    /// Length of one tile flip in milliseconds
    #[arg(long, global = true, default_value = "500")]
    flip_ms: u64,

    /// Write logs to this file (filtered by RUST_LOG, default info)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode, one guess per line
    Simple,

    /// Show the feedback one guess gets against a target
    Score {
        /// The guessed word
        guess: String,

        /// The word being guessed
        target: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.clone().unwrap_or(Commands::Play);
    let in_terminal_ui = matches!(command, Commands::Play);
    init_logging(cli.log_file.as_deref(), !in_terminal_ui)?;

    let words = load_word_list(cli.wordlist.as_deref())?;

    match command {
        Commands::Play => {
            let game = new_game(&cli, words)?;
            run_tui(App::new(game))
        }
        Commands::Simple => {
            let mut game = new_game(&cli, words)?;
            run_simple(&mut game)?;
            Ok(())
        }
        Commands::Score { guess, target } => {
            let result = score_guess(&guess, &target, &words)?;
            print_score_result(&result);
            Ok(())
        }
    }
}

/// Install the tracing subscriber
///
/// Logs go to `log_file` when given, otherwise to stderr unless the TUI owns
/// the terminal.
fn init_logging(log_file: Option<&Path>, allow_stderr: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let layer = if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        Some(
            fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .boxed(),
        )
    } else if allow_stderr {
        Some(
            fmt::layer()
                .with_target(false)
                .with_writer(io::stderr)
                .boxed(),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .init();
    Ok(())
}

/// Embedded guess list plus any words from `path`
fn load_word_list(path: Option<&Path>) -> Result<WordList> {
    let mut words = WordList::embedded();
    if let Some(path) = path {
        let extra = load_from_file(path)
            .with_context(|| format!("cannot read word list {}", path.display()))?;
        if extra.is_empty() {
            bail!("word list {} contains no 5-letter words", path.display());
        }
        words.extend(extra);
    }
    debug!(count = words.len(), "guess list ready");
    Ok(words)
}

fn choose_target(cli: &Cli) -> Result<Word> {
    if let Some(word) = &cli.word {
        return Word::new(word).with_context(|| format!("invalid target word {word:?}"));
    }

    let answers = words_from_slice(ANSWERS);
    let target = if cli.random {
        random_word(&answers)
    } else if let Some(date) = cli.date {
        daily_word(&answers, date)
    } else {
        todays_word(&answers)
    };
    target.cloned().context("answer list is empty")
}

fn new_game(cli: &Cli, mut words: WordList) -> Result<Game<WordList>> {
    let target = choose_target(cli)?;
    // A fixed target must always be guessable
    if !words.contains(&target) {
        debug!(word = %target, "adding target to guess list");
        words.extend([target.clone()]);
    }

    let config = GameConfig {
        max_attempts: usize::from(cli.attempts),
        flip_duration: Duration::from_millis(cli.flip_ms),
        ..GameConfig::default()
    };
    let game = Game::new(target, words, config).context("invalid game settings")?;
    info!(attempts = cli.attempts, "new round");
    Ok(game)
}
