//! Board model: track topology, per-player piece state, and dice.
//!
//! Everything here is pure data and pure queries; the move state
//! machine lives in [`crate::rules`].

pub mod dice;
pub mod state;
pub mod track;

pub use dice::{DiceSource, Roll, RollOutOfRange, ScriptedRolls, DICE_PER_ROLL};
pub use state::PlayerState;
pub use track::{Square, Track, FINISH, PIECE_COUNT, TRACK_LEN};
