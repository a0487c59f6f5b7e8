//! Random move selection as an injected capability.
//!
//! ## Key Features
//!
//! - **Injectable**: the engine draws randomness through the `RandomSource`
//!   trait, so tests substitute scripted sequences for real entropy
//! - **Deterministic**: `GameRng` with the same seed produces an identical
//!   sequence
//! - **Two draws only**: a biased boolean (bomb decision) and a uniform
//!   index (hand move selection) cover everything the opponent needs
//!
//! ## Test Usage
//!
//! ```
//! use rps_referee::core::RandomSource;
//!
//! /// Always takes the bomb branch and picks index 0.
//! struct AlwaysBomb;
//!
//! impl RandomSource for AlwaysBomb {
//!     fn chance(&mut self, _probability: f64) -> bool { true }
//!     fn pick_index(&mut self, _len: usize) -> usize { 0 }
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of randomness for opponent move selection.
///
/// Object-safe so the engine can take `&mut dyn RandomSource`.
pub trait RandomSource {
    /// Biased boolean draw: returns true with the given probability.
    ///
    /// `probability` is in `[0, 1]`.
    fn chance(&mut self, probability: f64) -> bool;

    /// Uniform draw of an index in `0..len`.
    ///
    /// `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Deterministic seeded RNG.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness. Same seed, same sequence.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from process entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Get the seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn chance(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}
