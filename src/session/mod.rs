//! Game session orchestration.
//!
//! A `GameSession` binds one `GameState` to one `RoundEngine` and one
//! randomness source, and exposes a single mutating entry point:
//! [`GameSession::play_turn`]. The caller feeds it one raw input line per
//! round and renders the structured reports however it likes.
//!
//! ## Lifecycle
//!
//! The session is a two-state machine: in progress while `round <=
//! max_rounds`, finished afterwards. The flip to finished happens lazily:
//! the call that plays the last round still returns that round's report,
//! and the *next* call returns the final verdict. Once finished, further
//! calls keep returning the same verdict without touching state or
//! drawing randomness.
//!
//! ## Ownership
//!
//! One session per game, exclusively owning its state. `play_turn` must
//! not be invoked concurrently for the same session; the caller owns
//! sequencing. Run simultaneous games with independent sessions.

use serde::{Deserialize, Serialize};

use crate::core::{
    GameConfig, GameRng, GameState, Move, PerPlayer, Player, RandomSource, RoundOutcome,
};
use crate::rules::{MoveError, RoundEngine};

/// Final result of a completed game, computed from cumulative scores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Single game winner.
    Winner(Player),
    /// Tied scores.
    Draw,
}

impl Verdict {
    /// Check if a player won the game.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        match self {
            Verdict::Winner(p) => *p == player,
            Verdict::Draw => false,
        }
    }
}

/// Structured result of one `play_turn` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnReport {
    /// A round was played to completion.
    Played {
        /// 1-based number of the round just completed.
        round: u32,
        /// The human's move, already normalized.
        user_move: Move,
        /// The opponent's independently chosen move.
        bot_move: Move,
        /// Who took the round.
        outcome: RoundOutcome,
        /// Cumulative scores after the round.
        scores: PerPlayer<u32>,
    },
    /// The human's input failed validation; the round is spent with no
    /// winner. The opponent's move still happened and may have consumed
    /// its bomb.
    Wasted {
        /// 1-based number of the round just wasted.
        round: u32,
        /// Why the input was rejected.
        reason: MoveError,
        /// The opponent's independently chosen move.
        bot_move: Move,
        /// Cumulative scores (unchanged by a wasted round).
        scores: PerPlayer<u32>,
    },
    /// All rounds are exhausted. Returned by every call from then on.
    Finished {
        /// Final result from cumulative scores.
        verdict: Verdict,
        /// Final scores.
        scores: PerPlayer<u32>,
    },
}

/// One interactive game: state, rules, and randomness under one owner.
///
/// Defaults to the entropy-seeded `GameRng`; tests inject scripted sources
/// through [`GameSession::with_rng`].
#[derive(Clone, Debug)]
pub struct GameSession<R = GameRng> {
    state: GameState,
    engine: RoundEngine,
    rng: R,
}

impl GameSession<GameRng> {
    /// Start a session with a fresh entropy-seeded RNG.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self::with_rng(config, GameRng::from_entropy())
    }

    /// Start a session with an explicitly seeded RNG, for reproducible
    /// games.
    #[must_use]
    pub fn with_seed(config: &GameConfig, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }
}

impl<R: RandomSource> GameSession<R> {
    /// Start a session with an injected randomness source.
    #[must_use]
    pub fn with_rng(config: &GameConfig, rng: R) -> Self {
        Self {
            state: GameState::new(config),
            engine: RoundEngine::new(config),
            rng,
        }
    }

    /// Get the current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Check whether all rounds have been played.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.is_over()
    }

    /// Compute the verdict from the current scores.
    ///
    /// Recomputed on every call, never cached.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        let user = self.state.score(Player::User);
        let bot = self.state.score(Player::Bot);

        if user > bot {
            Verdict::Winner(Player::User)
        } else if bot > user {
            Verdict::Winner(Player::Bot)
        } else {
            Verdict::Draw
        }
    }

    /// Play one round with the human's raw input.
    ///
    /// If the game is already finished this returns the final verdict and
    /// mutates nothing, so calling it repeatedly after the end is
    /// harmless. Otherwise the opponent's move is chosen first (it never
    /// depends on the human's input), the input is validated against the
    /// pre-round state, and the round is resolved or wasted accordingly.
    pub fn play_turn(&mut self, raw: &str) -> TurnReport {
        if self.state.is_over() {
            let verdict = self.verdict();
            tracing::debug!(?verdict, "turn requested after game end");
            return TurnReport::Finished {
                verdict,
                scores: self.state.scores(),
            };
        }

        let round = self.state.round();
        let bot_move = self.engine.choose_bot_move(&self.state, &mut self.rng);

        match self.engine.validate(raw, Player::User, &self.state) {
            Ok(user_move) => {
                let outcome = RoundEngine::resolve(user_move, bot_move);
                self.engine
                    .apply_round(&mut self.state, outcome, Some(user_move), bot_move);
                tracing::debug!(round, %user_move, %bot_move, ?outcome, "round resolved");

                TurnReport::Played {
                    round,
                    user_move,
                    bot_move,
                    outcome,
                    scores: self.state.scores(),
                }
            }
            Err(reason) => {
                self.engine
                    .apply_round(&mut self.state, RoundOutcome::Draw, None, bot_move);
                tracing::debug!(round, %reason, %bot_move, "round wasted");

                TurnReport::Wasted {
                    round,
                    reason,
                    bot_move,
                    scores: self.state.scores(),
                }
            }
        }
    }
}
