//! Error taxonomy for engine calls.
//!
//! Every variant is a local, caller-correctable condition — never
//! fatal. Valid-but-unlucky outcomes (a roll of 0, no legal moves) are
//! normal transitions, not errors; the engine reports them through
//! [`RollResult`](crate::rules::RollResult) instead.

use thiserror::Error;

use crate::board::Roll;
use crate::core::Player;
use crate::rules::moves::Origin;

/// Why an engine call was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RulesError {
    /// The origin is out of range, unoccupied, or not the active
    /// player's to move.
    #[error("{0} is not a selectable origin for the active player")]
    InvalidOrigin(Origin),

    /// The origin is selectable but the move breaks a movement rule
    /// (overshoot, own piece on the destination, protected rosette).
    #[error("moving from {origin} with a roll of {roll} is illegal")]
    IllegalMove {
        /// The rejected origin.
        origin: Origin,
        /// The current roll.
        roll: Roll,
    },

    /// The call does not match the current phase, e.g. `select` while
    /// awaiting a roll.
    #[error("call requires the {expected} phase")]
    WrongPhase {
        /// The phase the call needs.
        expected: &'static str,
    },

    /// The game reached a terminal state; no further calls are
    /// processed.
    #[error("the game is already over")]
    GameAlreadyOver,

    /// A restored snapshot violates piece conservation.
    #[error("snapshot violates piece conservation for {0}")]
    InconsistentSnapshot(Player),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    #[test]
    fn test_error_messages() {
        let invalid = RulesError::InvalidOrigin(Origin::Reserve);
        assert_eq!(
            invalid.to_string(),
            "Reserve is not a selectable origin for the active player"
        );

        let illegal = RulesError::IllegalMove {
            origin: Origin::Square(Square::new(10)),
            roll: Roll::new(4),
        };
        assert_eq!(
            illegal.to_string(),
            "moving from Square(10) with a roll of 4 is illegal"
        );

        let phase = RulesError::WrongPhase {
            expected: "awaiting roll",
        };
        assert_eq!(phase.to_string(), "call requires the awaiting roll phase");

        assert_eq!(
            RulesError::GameAlreadyOver.to_string(),
            "the game is already over"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<RulesError>();
    }
}
