//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! Closed identifier for the two participants: the human (`User`) and the
//! automated opponent (`Bot`).
//!
//! ## PerPlayer
//!
//! Per-player data storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two game participants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// The human participant.
    User,
    /// The automated opponent.
    Bot,
}

impl Player {
    /// Get the array index for this player (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::User => 0,
            Player::Bot => 1,
        }
    }

    /// Get the other participant.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::User => Player::Bot,
            Player::Bot => Player::User,
        }
    }

    /// Iterate over both players, user first.
    pub fn all() -> impl Iterator<Item = Player> {
        [Player::User, Player::Bot].into_iter()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::User => write!(f, "user"),
            Player::Bot => write!(f, "bot"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a two-element array, one entry per player.
/// Use `PerPlayer::new()` to create with a factory function,
/// or `PerPlayer::with_value()` to initialize both entries to the same value.
///
/// ## Example
///
/// ```
/// use rps_referee::core::{PerPlayer, Player};
///
/// let mut wins: PerPlayer<u32> = PerPlayer::with_value(0);
///
/// wins[Player::User] += 1;
/// assert_eq!(wins[Player::User], 1);
/// assert_eq!(wins[Player::Bot], 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PerPlayer<T> {
    data: [T; 2],
}

impl<T> PerPlayer<T> {
    /// Create a new PerPlayer with values from a factory function.
    ///
    /// The factory receives the `Player` for each entry.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::User), factory(Player::Bot)],
        }
    }

    /// Create a new PerPlayer with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs, user first.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::all().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PerPlayer<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PerPlayer<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
