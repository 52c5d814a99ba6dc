//! Read-only projection of a game for renderers and hosts.
//!
//! The engine never exposes its mutable state; presentation layers
//! render from a [`GameSnapshot`], and a host can persist one and
//! later restore it via
//! [`GameEngine::from_snapshot`](crate::rules::GameEngine::from_snapshot).

use serde::{Deserialize, Serialize};

use crate::board::{PlayerState, Track, TRACK_LEN};
use crate::core::{Player, PlayerMap};
use crate::rules::engine::Phase;

/// One player's pieces as plain data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// Occupancy per own-path square.
    pub pieces: [bool; TRACK_LEN as usize],
    /// Pieces not yet entered.
    pub reserve: u8,
    /// Pieces that completed the track.
    pub finished: u8,
}

impl From<&PlayerState> for PlayerSnapshot {
    fn from(state: &PlayerState) -> Self {
        Self {
            pieces: *state.pieces(),
            reserve: state.reserve(),
            finished: state.finished(),
        }
    }
}

/// A complete, serializable view of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The board topology, including the rosette set.
    pub track: Track,
    /// Both players' pieces.
    pub players: PlayerMap<PlayerSnapshot>,
    /// Whose turn it is.
    pub turn: Player,
    /// Current phase, including a pending roll if one is awaiting
    /// selection.
    pub phase: Phase,
}

impl GameSnapshot {
    /// The winner, if the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            Phase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }
}
