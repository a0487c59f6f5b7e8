//! # rps-referee
//!
//! Best-of-N rock-paper-scissors with a single-use bomb, played against an
//! automated opponent.
//!
//! ## Design Principles
//!
//! 1. **Owned State**: One `GameState` per game, exclusively owned by its
//!    `GameSession`. No globals, no singletons.
//!
//! 2. **Typed Boundaries**: Raw input is normalized once into the closed
//!    `Move` enumeration; everything downstream is enum-to-enum.
//!
//! 3. **Injectable Randomness**: The opponent draws through the
//!    `RandomSource` trait, so the same game logic runs deterministically
//!    under test.
//!
//! ## Architecture
//!
//! - **Core/rules/session split**: `core` holds the typed primitives,
//!   `rules` the pure round logic, `session` the one mutating entry point
//!   (`play_turn`).
//!
//! - **Rejection is not failure**: unrecognized input or a second bomb
//!   wastes the round and the game continues; the reason travels in the
//!   round report, not as an error.
//!
//! ## Modules
//!
//! - `core`: players, moves, state, RNG, configuration
//! - `rules`: validation, opponent selection, resolution, state transition
//! - `session`: turn orchestration and structured reports

pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig, GameRng, GameState, Move, PerPlayer, Player, RandomSource,
    RoundOutcome,
};

pub use crate::rules::{MoveError, RoundEngine};

pub use crate::session::{GameSession, TurnReport, Verdict};
