//! Guess evaluation and reveal sequencing
//!
//! [`Game`] is the state machine behind a round. Input collaborators call the
//! `on_*` methods; presentation collaborators drain [`Effect`]s and report
//! animation progress back through [`Game::on_flip_complete`] and
//! [`Game::on_reveal_settled`].

mod config;
mod effect;
mod reveal;
mod round;
mod session;
mod validator;

pub use config::{ConfigError, GameConfig};
pub use effect::{AlertDuration, Effect, RoundOutcome};
pub use reveal::{FlipRejected, Reveal};
pub use round::evaluate_round;
pub use session::{Game, Phase, SubmitError};
pub use validator::WordValidator;
