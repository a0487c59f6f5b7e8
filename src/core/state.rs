//! Game state: round counter, scores, and bomb availability.
//!
//! ## Invariants
//!
//! - `round` is 1-based, starts at 1, and only ever moves forward by one
//!   step per resolved round (wasted rounds included)
//! - scores only grow, by one point per decided round, so
//!   `scores[user] + scores[bot] <= round - 1` always holds
//! - a player's bomb flag goes false -> true at most once and never back
//! - the game is over exactly when `round > max_rounds`
//!
//! Fields are private; every mutation goes through a method that preserves
//! the above. One `GameState` is owned by one session for one game and
//! discarded afterwards.

use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::player::{PerPlayer, Player};

/// Mutable state of a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Current round, 1-based. `max_rounds + 1` once the game is over.
    round: u32,

    /// Rounds per game, fixed at construction.
    max_rounds: u32,

    /// Win counts.
    scores: PerPlayer<u32>,

    /// Whether each player has spent their bomb.
    bomb_used: PerPlayer<bool>,
}

impl GameState {
    /// Create the starting state for a game under the given configuration.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            round: 1,
            max_rounds: config.max_rounds(),
            scores: PerPlayer::with_value(0),
            bomb_used: PerPlayer::with_value(false),
        }
    }

    /// Get the current round number (1-based).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Get the configured number of rounds.
    #[must_use]
    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    /// Get a player's win count.
    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        self.scores[player]
    }

    /// Get both win counts.
    #[must_use]
    pub fn scores(&self) -> PerPlayer<u32> {
        self.scores
    }

    /// Check whether a player has already spent their bomb.
    #[must_use]
    pub fn bomb_used(&self, player: Player) -> bool {
        self.bomb_used[player]
    }

    /// Check whether all rounds have been played.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.round > self.max_rounds
    }

    /// Award a round win to a player.
    pub fn record_win(&mut self, player: Player) {
        self.scores[player] += 1;
    }

    /// Mark a player's bomb as spent. Irreversible.
    pub fn mark_bomb_used(&mut self, player: Player) {
        self.bomb_used[player] = true;
    }

    /// Advance to the next round.
    pub fn advance_round(&mut self) {
        self.round += 1;
    }
}
