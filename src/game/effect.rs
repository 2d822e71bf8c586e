//! Signals from the game to its presentation layer
//!
//! The game never draws or sleeps. Every visible consequence of an input is
//! queued as an [`Effect`] and drained by whoever renders the grid.

use crate::core::{Classification, Word};
use std::time::Duration;

/// How long an alert stays on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertDuration {
    Transient(Duration),
    Persistent,
}

/// Final or intermediate result of a submitted row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Win,
    Continue,
    Lose,
}

impl RoundOutcome {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Win | Self::Lose)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show a message
    Alert {
        text: String,
        duration: AlertDuration,
    },
    /// Attention cue on a rejected row
    Shake { row: usize },
    /// Start flipping a tile after `delay`; report back with `on_flip_complete`
    Flip {
        row: usize,
        position: usize,
        delay: Duration,
    },
    TileClassified {
        row: usize,
        position: usize,
        class: Classification,
    },
    /// A keyboard key changed to a better classification
    KeyMarked { letter: u8, class: Classification },
    InputSuspended,
    InputResumed,
    /// Start the celebration animation of a tile after `delay`
    Dance {
        row: usize,
        position: usize,
        delay: Duration,
    },
    /// The answer is shown after a loss
    RevealAnswer(Word),
    RoundEnded(RoundOutcome),
}
