//! Round resolution engine.
//!
//! All game logic lives here: move validation, opponent move selection,
//! winner resolution, and the state transition applied after every round.
//! Everything is synchronous and side-effect free except `apply_round`,
//! which is the single place `GameState` is mutated.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{GameConfig, GameState, Move, Player, RandomSource, RoundOutcome};

/// Why a raw move was rejected.
///
/// A rejected move is not a fault: it wastes the round and the game
/// continues. The `Display` text is the reason surfaced to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum MoveError {
    /// Input did not normalize to one of the four moves.
    #[error("Invalid input")]
    Unrecognized,
    /// The player already spent their bomb this game.
    #[error("Bomb already used")]
    BombSpent,
}

/// Pure round logic: validation, opponent selection, resolution, and the
/// post-round state transition.
#[derive(Clone, Copy, Debug)]
pub struct RoundEngine {
    bomb_probability: f64,
}

impl RoundEngine {
    /// Create an engine for the given configuration.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            bomb_probability: config.bomb_probability(),
        }
    }

    /// Validate a raw move against the current state.
    ///
    /// Normalizes the input, then rejects moves outside the enumeration and
    /// a second bomb from a player whose flag is already set. Pure query,
    /// no side effects.
    pub fn validate(
        &self,
        raw: &str,
        player: Player,
        state: &GameState,
    ) -> Result<Move, MoveError> {
        let mv = Move::parse(raw).ok_or(MoveError::Unrecognized)?;

        if mv.is_bomb() && state.bomb_used(player) {
            return Err(MoveError::BombSpent);
        }

        Ok(mv)
    }

    /// Select the opponent's move for the current round.
    ///
    /// Runs before and independently of the human's input: the opponent
    /// commits without seeing the human's choice. While its bomb is
    /// unspent the opponent plays it with the configured probability,
    /// otherwise it picks uniformly among the hand moves.
    pub fn choose_bot_move(&self, state: &GameState, rng: &mut dyn RandomSource) -> Move {
        if !state.bomb_used(Player::Bot) && rng.chance(self.bomb_probability) {
            tracing::debug!(round = state.round(), "bot commits its bomb");
            return Move::Bomb;
        }

        Move::HAND[rng.pick_index(Move::HAND.len())]
    }

    /// Determine the winner of a round.
    ///
    /// Equal moves draw (two bombs included); a lone bomb beats anything;
    /// otherwise the cyclic dominance rule decides. Total over all pairs
    /// of valid moves.
    #[must_use]
    pub fn resolve(user: Move, bot: Move) -> RoundOutcome {
        if user == bot {
            return RoundOutcome::Draw;
        }

        if user.is_bomb() {
            return RoundOutcome::Winner(Player::User);
        }
        if bot.is_bomb() {
            return RoundOutcome::Winner(Player::Bot);
        }

        if user.beats(bot) {
            RoundOutcome::Winner(Player::User)
        } else {
            RoundOutcome::Winner(Player::Bot)
        }
    }

    /// Apply one resolved round to the state.
    ///
    /// Sets bomb flags for any bomb actually played, credits the winner,
    /// and advances the round counter unconditionally. A wasted round
    /// (invalid human input) is the same transition with `user_move =
    /// None` and a `Draw` outcome: the human's score and bomb flag stay
    /// untouched, while the opponent's move still counts.
    pub fn apply_round(
        &self,
        state: &mut GameState,
        outcome: RoundOutcome,
        user_move: Option<Move>,
        bot_move: Move,
    ) {
        if user_move.is_some_and(Move::is_bomb) {
            state.mark_bomb_used(Player::User);
        }
        if bot_move.is_bomb() {
            state.mark_bomb_used(Player::Bot);
        }

        if let RoundOutcome::Winner(winner) = outcome {
            state.record_win(winner);
        }

        state.advance_round();
    }
}
