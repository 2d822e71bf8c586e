//! One round of play: input handling, validation, reveal and round end
//!
//! A round moves through
//! `Editing -> (validate) -> Revealing -> Editing | Won | Lost`.
//! Validation happens synchronously inside [`Game::on_submit`]; a rejected row
//! stays in `Editing` untouched. While `Revealing`, and forever after `Won` or
//! `Lost`, letter, delete and submit input is ignored.

use super::config::{ConfigError, GameConfig};
use super::effect::{AlertDuration, Effect, RoundOutcome};
use super::reveal::Reveal;
use super::round::evaluate_round;
use super::validator::WordValidator;
use crate::core::{Feedback, Grid, KeyIndicators, WORD_LENGTH, Word};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Why a submitted row was not accepted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Not enough letters")]
    InsufficientInput { filled: usize },
    #[error("Not in word list")]
    UnknownWord(String),
    #[error("Input is suspended")]
    InputSuspended,
}

/// Where the round currently is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Revealing(Reveal),
    Won,
    Lost,
}

/// A single round against a fixed target word
pub struct Game<V: WordValidator> {
    config: GameConfig,
    target: Word,
    validator: V,
    grid: Grid,
    keys: KeyIndicators,
    phase: Phase,
    history: Vec<(Word, Feedback)>,
    effects: Vec<Effect>,
}

impl<V: WordValidator> Game<V> {
    /// Start a round
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(target: Word, validator: V, config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(attempts = config.max_attempts, "starting round");

        Ok(Self {
            grid: Grid::new(config.max_attempts),
            config,
            target,
            validator,
            keys: KeyIndicators::new(),
            phase: Phase::Editing,
            history: Vec::new(),
            effects: Vec::new(),
        })
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub const fn keys(&self) -> &KeyIndicators {
        &self.keys
    }

    #[must_use]
    pub const fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Accepted guesses and their feedback, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    #[must_use]
    pub const fn is_input_enabled(&self) -> bool {
        matches!(self.phase, Phase::Editing)
    }

    /// Terminal outcome, once the round is over
    #[must_use]
    pub const fn outcome(&self) -> Option<RoundOutcome> {
        match self.phase {
            Phase::Won => Some(RoundOutcome::Win),
            Phase::Lost => Some(RoundOutcome::Lose),
            Phase::Editing | Phase::Revealing(_) => None,
        }
    }

    /// Take every effect queued since the last call
    pub fn drain_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// Type a letter into the active row
    ///
    /// Returns `false` if the input was ignored (not a letter, row full, or
    /// input suspended).
    pub fn on_letter_input(&mut self, letter: char) -> bool {
        if !self.is_input_enabled() || !letter.is_ascii_alphabetic() {
            return false;
        }
        self.grid
            .push_letter(letter.to_ascii_lowercase() as u8)
            .is_some()
    }

    /// Remove the last letter of the active row
    pub fn on_delete(&mut self) -> bool {
        if !self.is_input_enabled() {
            return false;
        }
        self.grid.pop_letter().is_some()
    }

    /// Submit the active row
    ///
    /// On success input is suspended and one [`Effect::Flip`] per tile is
    /// queued. On a validation failure an alert and a shake are queued and the
    /// row is left as it was.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientInput` for a partially filled row, `UnknownWord`
    /// if the validator rejects the guess and `InputSuspended` outside of
    /// editing.
    pub fn on_submit(&mut self) -> Result<(), SubmitError> {
        if !self.is_input_enabled() {
            return Err(SubmitError::InputSuspended);
        }
        let (row_index, letters) = match self.grid.active_index().zip(self.grid.active_row()) {
            Some((index, row)) => (index, row.letters()),
            None => return Err(SubmitError::InputSuspended),
        };

        debug!(row = row_index, filled = letters.len(), "validating guess");
        let guess = match self.validate(&letters) {
            Ok(guess) => guess,
            Err(err) => return Err(self.reject(row_index, err)),
        };

        let feedback = Feedback::calculate(&guess, &self.target);
        debug!(
            row = row_index,
            guess = %guess,
            feedback = %feedback.to_emoji(),
            "revealing guess"
        );

        if let Some(row) = self.grid.row_mut(row_index) {
            for position in 0..WORD_LENGTH {
                row.tile_mut(position).start_flip();
            }
        }

        self.effects.push(Effect::InputSuspended);
        for position in 0..WORD_LENGTH {
            self.effects.push(Effect::Flip {
                row: row_index,
                position,
                delay: self.config.flip_delay(position),
            });
        }

        self.phase = Phase::Revealing(Reveal::new(row_index, guess, feedback));
        Ok(())
    }

    /// Queue the alert and shake for a rejected row
    fn reject(&mut self, row_index: usize, err: SubmitError) -> SubmitError {
        debug!(row = row_index, %err, "guess rejected");
        let duration = AlertDuration::Transient(self.config.alert_duration);
        self.push_alert(err.to_string(), duration);
        self.effects.push(Effect::Shake { row: row_index });
        err
    }

    fn validate(&self, letters: &[u8]) -> Result<Word, SubmitError> {
        if letters.len() != WORD_LENGTH {
            return Err(SubmitError::InsufficientInput {
                filled: letters.len(),
            });
        }
        let unknown = || SubmitError::UnknownWord(String::from_utf8_lossy(letters).into_owned());
        let guess = Word::from_letters(letters).map_err(|_| unknown())?;
        if self.validator.is_valid(&guess) {
            Ok(guess)
        } else {
            Err(unknown())
        }
    }

    /// The flip of the tile at `position` finished
    ///
    /// Tiles are classified in position order; a completion that arrives
    /// before its predecessors is held until they have finished too.
    /// Returns `false` if the signal was ignored.
    pub fn on_flip_complete(&mut self, position: usize) -> bool {
        let Phase::Revealing(reveal) = &mut self.phase else {
            warn!(position, "flip completion outside of a reveal");
            return false;
        };
        if let Err(reason) = reveal.record_flip(position) {
            warn!(position, ?reason, "flip completion ignored");
            return false;
        }

        let row_index = reveal.row();
        let guess = reveal.guess().clone();
        let mut ready = Vec::new();
        while let Some(next) = reveal.next_ready() {
            ready.push(next);
        }

        for (position, class) in ready {
            if let Some(row) = self.grid.row_mut(row_index) {
                row.tile_mut(position).reveal(class);
            }
            self.effects.push(Effect::TileClassified {
                row: row_index,
                position,
                class,
            });

            let letter = guess.char_at(position);
            if self.keys.mark(letter, class) {
                self.effects.push(Effect::KeyMarked { letter, class });
            }
        }
        true
    }

    /// The last tile finished turning back; evaluate the round
    ///
    /// Ignored unless every tile of the current row has been classified.
    pub fn on_reveal_settled(&mut self) -> Option<RoundOutcome> {
        let Phase::Revealing(reveal) = &self.phase else {
            return None;
        };
        if !reveal.is_classified() {
            warn!(
                classified = reveal.classified(),
                "reveal settled before every tile was classified"
            );
            return None;
        }

        let row_index = reveal.row();
        let guess = reveal.guess().clone();
        let feedback = *reveal.feedback();

        self.grid.advance();
        let outcome = evaluate_round(&guess, &self.target, self.grid.empty_rows());
        self.history.push((guess, feedback));

        match outcome {
            RoundOutcome::Win => {
                info!(guesses = self.history.len(), "round won");
                self.push_alert(
                    "You Win".to_string(),
                    AlertDuration::Transient(self.config.win_alert_duration),
                );
                for position in 0..WORD_LENGTH {
                    self.effects.push(Effect::Dance {
                        row: row_index,
                        position,
                        delay: self.config.dance_delay(position),
                    });
                }
                self.phase = Phase::Won;
            }
            RoundOutcome::Lose => {
                info!(answer = %self.target, "round lost");
                self.push_alert(
                    self.target.text().to_uppercase(),
                    AlertDuration::Persistent,
                );
                self.effects.push(Effect::RevealAnswer(self.target.clone()));
                self.phase = Phase::Lost;
            }
            RoundOutcome::Continue => {
                debug!(next_row = row_index + 1, "round continues");
                self.effects.push(Effect::InputResumed);
                self.phase = Phase::Editing;
            }
        }
        self.effects.push(Effect::RoundEnded(outcome));
        Some(outcome)
    }

    /// Finish the current reveal without waiting for the presentation
    ///
    /// Used by callers with no animation, and as the way out of a reveal
    /// whose completion signals never arrive.
    pub fn complete_reveal(&mut self) -> Option<RoundOutcome> {
        let Phase::Revealing(reveal) = &self.phase else {
            return None;
        };
        let pending: Vec<usize> = (reveal.classified()..WORD_LENGTH)
            .filter(|&position| !reveal.is_flipped(position))
            .collect();
        for position in pending {
            self.on_flip_complete(position);
        }
        self.on_reveal_settled()
    }

    /// Type, submit and fully reveal a whole word
    ///
    /// A word longer than a row, or with anything but ASCII letters, is
    /// rejected as unknown instead of being typed partially.
    ///
    /// # Errors
    ///
    /// Same as [`Game::on_submit`].
    pub fn play_word(&mut self, word: &str) -> Result<Option<RoundOutcome>, SubmitError> {
        let Some(row_index) = self.grid.active_index().filter(|_| self.is_input_enabled()) else {
            return Err(SubmitError::InputSuspended);
        };
        let untypeable = word.chars().count() > WORD_LENGTH
            || !word.chars().all(|c| c.is_ascii_alphabetic());
        if untypeable {
            let err = SubmitError::UnknownWord(word.to_lowercase());
            return Err(self.reject(row_index, err));
        }
        while self.on_delete() {}
        for letter in word.chars() {
            self.on_letter_input(letter);
        }
        self.on_submit()?;
        Ok(self.complete_reveal())
    }

    fn push_alert(&mut self, text: String, duration: AlertDuration) {
        self.effects.push(Effect::Alert { text, duration });
    }
}
