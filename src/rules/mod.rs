//! Round resolution rules.

pub mod engine;

pub use engine::{MoveError, RoundEngine};
