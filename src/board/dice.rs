//! Dice: four binary throws summed to a roll of 0..=4.
//!
//! The historical game uses four tetrahedral dice, each marked on two
//! of four corners — every die contributes 0 or 1. A roll of 0 is
//! legal and simply forfeits the turn.
//!
//! The engine consumes randomness only through [`DiceSource`], so a
//! test (or a replay) can inject a fixed sequence via
//! [`ScriptedRolls`] while live games use [`GameRng`].

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use thiserror::Error;

use crate::core::GameRng;

/// Number of binary dice thrown per roll.
pub const DICE_PER_ROLL: u8 = 4;

/// The result of one dice throw: an integer in 0..=4.
///
/// Deserialization goes through [`TryFrom<u8>`], so an out-of-range
/// value in a snapshot is a parse error, never a live `Roll`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct Roll(u8);

impl Roll {
    /// Create a roll from its value.
    ///
    /// Panics if the value exceeds [`DICE_PER_ROLL`].
    #[must_use]
    pub fn new(value: u8) -> Self {
        assert!(value <= DICE_PER_ROLL, "roll value must be 0..=4");
        Self(value)
    }

    /// Build a roll from the four individual die faces.
    #[must_use]
    pub fn from_flips(flips: [bool; DICE_PER_ROLL as usize]) -> Self {
        Self(flips.iter().filter(|&&up| up).count() as u8)
    }

    /// The rolled value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// A zero roll forfeits the turn.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<u8> for Roll {
    type Error = RollOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= DICE_PER_ROLL {
            Ok(Self(value))
        } else {
            Err(RollOutOfRange(value))
        }
    }
}

/// A roll value outside 0..=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("roll value must be 0..=4, got {0}")]
pub struct RollOutOfRange(pub u8);

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of dice randomness.
///
/// The engine never reaches for a global generator; hosts inject
/// whatever source suits them — seeded randomness for live play, a
/// scripted sequence for tests and replays.
pub trait DiceSource {
    /// Throw the four binary dice.
    fn roll(&mut self) -> Roll;
}

impl DiceSource for GameRng {
    fn roll(&mut self) -> Roll {
        let mut total = 0;
        for _ in 0..DICE_PER_ROLL {
            if self.coin_flip() {
                total += 1;
            }
        }
        Roll::new(total)
    }
}

/// A predetermined sequence of rolls, for deterministic tests.
///
/// Once the script is exhausted every further roll is 0, which
/// forfeits the turn without mutating the board.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRolls {
    rolls: VecDeque<Roll>,
}

impl ScriptedRolls {
    /// Script a sequence of roll values.
    #[must_use]
    pub fn from_values(values: &[u8]) -> Self {
        Self {
            rolls: values.iter().map(|&v| Roll::new(v)).collect(),
        }
    }

    /// Rolls left in the script.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl DiceSource for ScriptedRolls {
    fn roll(&mut self) -> Roll {
        self.rolls.pop_front().unwrap_or(Roll(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_from_flips() {
        assert_eq!(Roll::from_flips([false; 4]).value(), 0);
        assert_eq!(Roll::from_flips([true, false, true, false]).value(), 2);
        assert_eq!(Roll::from_flips([true; 4]).value(), 4);
    }

    #[test]
    fn test_zero_roll() {
        assert!(Roll::new(0).is_zero());
        assert!(!Roll::new(1).is_zero());
    }

    #[test]
    #[should_panic(expected = "roll value must be 0..=4")]
    fn test_roll_out_of_range_panics() {
        let _ = Roll::new(5);
    }

    #[test]
    fn test_rng_rolls_stay_in_range() {
        let mut rng = GameRng::new(42);

        for _ in 0..200 {
            let roll = rng.roll();
            assert!(roll.value() <= DICE_PER_ROLL);
        }
    }

    #[test]
    fn test_rng_rolls_are_deterministic() {
        let mut rng1 = GameRng::new(9);
        let mut rng2 = GameRng::new(9);

        for _ in 0..50 {
            assert_eq!(rng1.roll(), rng2.roll());
        }
    }

    #[test]
    fn test_scripted_rolls_in_order() {
        let mut dice = ScriptedRolls::from_values(&[4, 0, 2]);

        assert_eq!(dice.remaining(), 3);
        assert_eq!(dice.roll(), Roll::new(4));
        assert_eq!(dice.roll(), Roll::new(0));
        assert_eq!(dice.roll(), Roll::new(2));
        assert_eq!(dice.remaining(), 0);
    }

    #[test]
    fn test_scripted_rolls_exhausted_yields_zero() {
        let mut dice = ScriptedRolls::from_values(&[1]);

        let _ = dice.roll();
        assert_eq!(dice.roll(), Roll::new(0));
        assert_eq!(dice.roll(), Roll::new(0));
    }

    #[test]
    fn test_roll_serialization() {
        let roll = Roll::new(3);
        let json = serde_json::to_string(&roll).unwrap();
        assert_eq!(json, "3");
        let deserialized: Roll = serde_json::from_str(&json).unwrap();
        assert_eq!(roll, deserialized);
    }

    #[test]
    fn test_roll_deserialization_rejects_out_of_range() {
        assert!(serde_json::from_str::<Roll>("4").is_ok());
        assert!(serde_json::from_str::<Roll>("5").is_err());
        assert!(serde_json::from_str::<Roll>("200").is_err());
    }

    #[test]
    fn test_roll_try_from() {
        assert_eq!(Roll::try_from(2), Ok(Roll::new(2)));
        assert_eq!(Roll::try_from(9), Err(RollOutOfRange(9)));
        assert_eq!(
            RollOutOfRange(9).to_string(),
            "roll value must be 0..=4, got 9"
        );
    }
}
