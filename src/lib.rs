//! Wordle
//!
//! A terminal Wordle: guess evaluation, staged tile reveal, keyboard
//! indicators and round outcomes, with a TUI and a line-based frontend.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Feedback, Word};
//! use wordle_game::game::{Game, GameConfig, RoundOutcome};
//! use wordle_game::wordlists::WordList;
//!
//! // Score a guess
//! let target = Word::new("crane").unwrap();
//! let feedback = Feedback::calculate(&Word::new("crate").unwrap(), &target);
//! assert_eq!(feedback.to_emoji(), "🟩🟩🟩⬜🟩");
//!
//! // Play a round without animations
//! let mut game = Game::new(target, WordList::embedded(), GameConfig::default()).unwrap();
//! assert_eq!(game.play_word("slate").unwrap(), Some(RoundOutcome::Continue));
//! assert_eq!(game.play_word("crane").unwrap(), Some(RoundOutcome::Win));
//! ```

// Core domain types
pub mod core;

// Round state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
