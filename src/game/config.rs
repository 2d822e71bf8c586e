//! Game timing and size configuration

use std::time::Duration;
use thiserror::Error;

/// Configuration for one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of guess rows
    pub max_attempts: usize,
    /// Length of one tile flip; flips are staggered by half of this
    pub flip_duration: Duration,
    /// Length of the win dance; tiles are staggered by a fifth of this
    pub dance_duration: Duration,
    /// How long validation alerts stay up
    pub alert_duration: Duration,
    /// How long the win message stays up
    pub win_alert_duration: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("at least one attempt is required")]
    NoAttempts,
    #[error("flip duration must be greater than zero")]
    ZeroFlipDuration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: 6,
            flip_duration: Duration::from_millis(500),
            dance_duration: Duration::from_millis(500),
            alert_duration: Duration::from_millis(1000),
            win_alert_duration: Duration::from_millis(5000),
        }
    }
}

impl GameConfig {
    /// # Errors
    ///
    /// Returns an error if there are no rows or flips take no time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        if self.flip_duration.is_zero() {
            return Err(ConfigError::ZeroFlipDuration);
        }
        Ok(())
    }

    /// Delay before the tile at `position` starts flipping
    #[must_use]
    pub fn flip_delay(&self, position: usize) -> Duration {
        self.flip_duration / 2 * position as u32
    }

    /// Delay before the tile at `position` starts dancing
    #[must_use]
    pub fn dance_delay(&self, position: usize) -> Duration {
        self.dance_duration / 5 * position as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();
        assert_eq!(config.max_attempts, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_attempts() {
        let config = GameConfig {
            max_attempts: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoAttempts));
    }

    #[test]
    fn rejects_zero_flip() {
        let config = GameConfig {
            flip_duration: Duration::ZERO,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroFlipDuration));
    }

    #[test]
    fn staggered_delays() {
        let config = GameConfig::default();
        assert_eq!(config.flip_delay(0), Duration::ZERO);
        assert_eq!(config.flip_delay(1), Duration::from_millis(250));
        assert_eq!(config.flip_delay(4), Duration::from_millis(1000));
        assert_eq!(config.dance_delay(1), Duration::from_millis(100));
        assert_eq!(config.dance_delay(4), Duration::from_millis(400));
    }
}
