//! The rules engine: move representation, legality, the turn state
//! machine, errors, and the renderer-facing snapshot.

pub mod engine;
pub mod error;
pub mod moves;
pub mod snapshot;

pub use engine::{GameEngine, Phase};
pub use error::RulesError;
pub use moves::{Destination, MoveOutcome, Origin, RollResult, TurnRecord};
pub use snapshot::{GameSnapshot, PlayerSnapshot};
