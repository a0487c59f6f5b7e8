//! Game configuration.
//!
//! A game is parameterized by exactly two values, fixed at construction:
//! the number of rounds and the opponent's bomb probability. Both are
//! validated once here; the rest of the crate assumes they are in range.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rounds played per game unless configured otherwise.
pub const DEFAULT_MAX_ROUNDS: u32 = 3;

/// Probability that the opponent plays its bomb while it still has one.
pub const DEFAULT_BOMB_PROBABILITY: f64 = 0.15;

/// Invalid configuration parameter.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("max_rounds must be at least 1")]
    ZeroRounds,
    #[error("bomb probability {0} is outside [0, 1]")]
    ProbabilityOutOfRange(f64),
}

/// Complete game configuration.
///
/// Immutable after construction. Fields are private so a `GameConfig`
/// in hand is always a valid one.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    max_rounds: u32,
    bomb_probability: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            bomb_probability: DEFAULT_BOMB_PROBABILITY,
        }
    }
}

impl GameConfig {
    /// Create a validated configuration.
    ///
    /// `max_rounds` must be at least 1 and `bomb_probability` must lie in
    /// `[0, 1]`.
    pub fn new(max_rounds: u32, bomb_probability: f64) -> Result<Self, ConfigError> {
        if max_rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        if !(0.0..=1.0).contains(&bomb_probability) || bomb_probability.is_nan() {
            return Err(ConfigError::ProbabilityOutOfRange(bomb_probability));
        }

        Ok(Self {
            max_rounds,
            bomb_probability,
        })
    }

    /// Get the number of rounds per game.
    #[must_use]
    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    /// Get the opponent's bomb probability.
    #[must_use]
    pub fn bomb_probability(&self) -> f64 {
        self.bomb_probability
    }
}
