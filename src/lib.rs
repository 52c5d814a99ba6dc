//! # royal-ur
//!
//! A rules engine for the Royal Game of Ur, the two-player
//! race-and-capture board game.
//!
//! ## Design Principles
//!
//! 1. **Pure rules, no presentation**: the engine owns board topology,
//!    piece state, legality, captures, rosette bonus turns, and win
//!    detection. Rendering and input are external collaborators that
//!    consume read-only snapshots; no drawing concern ever lives
//!    inside a rule method.
//!
//! 2. **Injectable randomness**: dice go through the `DiceSource`
//!    trait. Live games use a seeded deterministic RNG; tests and
//!    replays inject scripted sequences.
//!
//! 3. **Errors, not panics**: every rejected call returns a specific
//!    `RulesError`. Unlucky-but-valid outcomes (a roll of 0, no legal
//!    moves) are normal transitions, never errors.
//!
//! ## Modules
//!
//! - `core`: players, per-player storage, deterministic RNG
//! - `board`: track topology, piece state, dice
//! - `rules`: the engine — state machine, legality, errors, snapshots
//!
//! ## Quick start
//!
//! ```
//! use royal_ur::{GameEngine, Origin};
//!
//! let mut engine = GameEngine::new(42);
//!
//! let result = engine.roll_dice().unwrap();
//! if !result.turn_passed {
//!     let outcome = engine.select(result.legal_origins[0]).unwrap();
//!     println!("captured: {}", outcome.captured);
//! }
//! ```

pub mod board;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, Player, PlayerMap};

pub use crate::board::{
    DiceSource, PlayerState, Roll, RollOutOfRange, ScriptedRolls, Square, Track, DICE_PER_ROLL,
    FINISH, PIECE_COUNT, TRACK_LEN,
};

pub use crate::rules::{
    Destination, GameEngine, GameSnapshot, MoveOutcome, Origin, Phase, PlayerSnapshot,
    RollResult, RulesError, TurnRecord,
};
