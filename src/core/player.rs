//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The Royal Game of Ur is strictly two-sided. `Player` names the two
//! sides and knows its opponent.
//!
//! ## PlayerMap
//!
//! Fixed two-slot per-player storage, indexable by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of the board.
///
/// `Light` moves first by default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Light,
    Dark,
}

impl Player {
    /// The other side.
    ///
    /// ```
    /// use royal_ur::core::Player;
    ///
    /// assert_eq!(Player::Light.opponent(), Player::Dark);
    /// assert_eq!(Player::Dark.opponent(), Player::Light);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Light => Player::Dark,
            Player::Dark => Player::Light,
        }
    }

    /// Storage index for this side (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::Light => 0,
            Player::Dark => 1,
        }
    }

    /// Both sides, `Light` first.
    pub fn both() -> impl Iterator<Item = Player> {
        [Player::Light, Player::Dark].into_iter()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Light => write!(f, "Light"),
            Player::Dark => write!(f, "Dark"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a fixed `[T; 2]`, one entry per side.
///
/// ## Example
///
/// ```
/// use royal_ur::core::{Player, PlayerMap};
///
/// let mut scores: PlayerMap<u32> = PlayerMap::with_value(0);
///
/// scores[Player::Dark] = 3;
/// assert_eq!(scores[Player::Light], 0);
/// assert_eq!(scores[Player::Dark], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new map with values from a factory function.
    ///
    /// The factory receives the `Player` for each slot.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::Light), factory(Player::Dark)],
        }
    }

    /// Create a new map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new map from the two sides' values.
    #[must_use]
    pub fn from_pair(light: T, dark: T) -> Self {
        Self {
            data: [light, dark],
        }
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

    /// Mutable references to a player's data and its opponent's, at once.
    ///
    /// Capture resolution touches both sides in one move; this avoids
    /// a second lookup or interior mutability.
    pub fn get_pair_mut(&mut self, player: Player) -> (&mut T, &mut T) {
        let [light, dark] = &mut self.data;
        match player {
            Player::Light => (light, dark),
            Player::Dark => (dark, light),
        }
    }

    /// Iterate over `(Player, &T)` pairs, `Light` first.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::both().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
