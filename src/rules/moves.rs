//! Move representation: origins, destinations, and call results.
//!
//! A move is named by where it starts — the off-board reserve or an
//! occupied own-path square. The engine resolves the destination from
//! the origin and the roll; callers never supply destinations.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Roll, Square};
use crate::core::Player;

/// Where a move starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    /// Enter a piece from the off-board reserve.
    Reserve,
    /// Advance the piece on this own-path square.
    Square(Square),
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Origin::Reserve => write!(f, "Reserve"),
            Origin::Square(square) => write!(f, "{square}"),
        }
    }
}

/// Where a move ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    /// A real square on the mover's path.
    Board(Square),
    /// Off the end of the track; the piece is finished.
    Finish,
}

/// What a dice roll produced, including which origins are now
/// selectable.
///
/// The engine computes `legal_origins` so a presentation layer can
/// highlight them without re-deriving the rules. When the roll is 0 or
/// nothing can move, `turn_passed` is set and the list is empty — the
/// turn has already moved on, with no selection phase.
///
/// At most 8 origins are ever legal at once (the reserve plus seven
/// pieces), so the list lives inline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// The rolled value.
    pub value: Roll,
    /// Origins the active player may select, in ascending order
    /// (reserve first).
    pub legal_origins: SmallVec<[Origin; 8]>,
    /// The turn passed without a selection phase.
    pub turn_passed: bool,
}

/// What applying a move did, for UI feedback.
///
/// A single atomic state transition per `select` call; the outcome is
/// a side-effect-free description of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Where the piece landed.
    pub destination: Destination,
    /// An opponent piece was evicted to its reserve.
    pub captured: bool,
    /// The moved piece completed the track.
    pub finished: bool,
    /// The move ended the game; the winner.
    pub game_over: Option<Player>,
    /// The turn passed to the opponent (false on a rosette bonus turn
    /// and on game over).
    pub turn_passed: bool,
}

/// One completed roll in the game history.
///
/// Forced passes (roll of 0, or no legal move) are recorded with
/// `origin: None`. Replaying the records against the same initial
/// state reproduces the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Who rolled.
    pub player: Player,
    /// What they rolled.
    pub roll: Roll,
    /// The origin they moved from, or `None` for a forced pass.
    pub origin: Option<Origin>,
}
