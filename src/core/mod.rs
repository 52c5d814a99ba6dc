//! Core engine types: players and deterministic randomness.
//!
//! These are the building blocks shared by the board model and the
//! rules engine; nothing in here knows about the track or the rules.

pub mod player;
pub mod rng;

pub use player::{Player, PlayerMap};
pub use rng::{GameRng, GameRngState};
