//! Core types: players, moves, state, RNG, configuration.
//!
//! This module contains the typed building blocks the rules and session
//! layers are written against.

pub mod config;
pub mod moves;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{ConfigError, GameConfig, DEFAULT_BOMB_PROBABILITY, DEFAULT_MAX_ROUNDS};
pub use moves::{Move, RoundOutcome};
pub use player::{PerPlayer, Player};
pub use rng::{GameRng, RandomSource};
pub use state::GameState;
