//! The game engine: turn state machine, legality, and move
//! application.
//!
//! ## State machine
//!
//! `AwaitingRoll` → `roll_dice` → `AwaitingSelection { roll }` →
//! `select` → back to `AwaitingRoll` (same player on a rosette,
//! opponent otherwise) or terminal `GameOver { winner }`.
//!
//! A roll of 0, or a roll with no legal origin, passes the turn
//! immediately — the selection phase is skipped and `roll_dice`
//! reports `turn_passed`. No transition leaves `GameOver`.
//!
//! ## Model
//!
//! Single-threaded and synchronous: each call completes fully before
//! the next is accepted. The only nondeterministic input is the
//! injected [`DiceSource`]; given the same dice sequence and the same
//! selections, a fresh engine reproduces the same final state.

use std::cmp::Ordering;

use crate::board::{DiceSource, PlayerState, Roll, Square, Track, FINISH, TRACK_LEN};
use crate::core::{GameRng, Player, PlayerMap};
use crate::rules::error::RulesError;
use crate::rules::moves::{Destination, MoveOutcome, Origin, RollResult, TurnRecord};
use crate::rules::snapshot::{GameSnapshot, PlayerSnapshot};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Where the engine is in the roll/select cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the active player to roll.
    AwaitingRoll,
    /// Waiting for the active player to select an origin for this
    /// roll.
    AwaitingSelection {
        /// The pending roll.
        roll: Roll,
    },
    /// Terminal; no further calls are processed.
    GameOver {
        /// The player who finished all pieces first.
        winner: Player,
    },
}

/// The rules engine for one game.
///
/// Owns both players' piece state, the turn pointer, the phase
/// machine, and the dice source. One engine instance is one game;
/// start a new game by constructing a new engine.
///
/// ## Example
///
/// ```
/// use royal_ur::rules::{GameEngine, Origin};
///
/// let mut engine = GameEngine::new(42);
///
/// let result = engine.roll_dice().unwrap();
/// if !result.turn_passed {
///     // Every listed origin is guaranteed selectable.
///     let outcome = engine.select(result.legal_origins[0]).unwrap();
///     assert!(outcome.game_over.is_none());
/// }
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine<D = GameRng> {
    track: Track,
    players: PlayerMap<PlayerState>,
    turn: Player,
    phase: Phase,
    dice: D,
    history: Vec<TurnRecord>,
}

impl GameEngine<GameRng> {
    /// A fresh game on the standard track with seeded dice.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_dice(GameRng::new(seed))
    }
}

impl<D: DiceSource> GameEngine<D> {
    /// A fresh game on the standard track with an injected dice
    /// source.
    #[must_use]
    pub fn with_dice(dice: D) -> Self {
        Self::with_track_and_dice(Track::standard(), dice)
    }

    /// A fresh game on a custom track.
    #[must_use]
    pub fn with_track_and_dice(track: Track, dice: D) -> Self {
        Self {
            track,
            players: PlayerMap::new(|_| PlayerState::new()),
            turn: Player::Light,
            phase: Phase::AwaitingRoll,
            dice,
            history: Vec::new(),
        }
    }

    /// Restore a game from a snapshot.
    ///
    /// The snapshot is validated: each side must satisfy piece
    /// conservation or the restore is rejected with
    /// [`RulesError::InconsistentSnapshot`]. History starts empty.
    pub fn from_snapshot(snapshot: &GameSnapshot, dice: D) -> Result<Self, RulesError> {
        let restore_side = |player: Player| {
            let parts = &snapshot.players[player];
            PlayerState::from_parts(parts.pieces, parts.reserve, parts.finished)
                .ok_or(RulesError::InconsistentSnapshot(player))
        };
        let light = restore_side(Player::Light)?;
        let dark = restore_side(Player::Dark)?;

        Ok(Self {
            track: snapshot.track.clone(),
            players: PlayerMap::from_pair(light, dark),
            turn: snapshot.turn,
            phase: snapshot.phase,
            dice,
            history: Vec::new(),
        })
    }

    // === Read-only queries ===

    /// Whose turn it is.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The winner, if the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            Phase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// A player's piece state.
    #[must_use]
    pub fn player(&self, player: Player) -> &PlayerState {
        &self.players[player]
    }

    /// The board topology.
    #[must_use]
    pub fn track(&self) -> &Track {
        &self.track
    }

    /// Every completed roll so far, forced passes included.
    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// A read-only projection for rendering or persistence.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            track: self.track.clone(),
            players: PlayerMap::new(|p| PlayerSnapshot::from(&self.players[p])),
            turn: self.turn,
            phase: self.phase,
        }
    }

    // === Legality ===

    /// Where a move from `origin` with `roll` would land, ignoring
    /// occupancy.
    ///
    /// Purely positional: `None` means the roll is 0 or the move
    /// overshoots the finish. Lets a renderer preview a hovered move
    /// without re-deriving the rules.
    #[must_use]
    pub fn destination_of(&self, origin: Origin, roll: Roll) -> Option<Destination> {
        if roll.is_zero() {
            return None;
        }
        match origin {
            // Entry lands on own square roll-1, at most square 3.
            Origin::Reserve => Some(Destination::Board(Square::new(roll.value() - 1))),
            Origin::Square(from) => {
                let target = from.raw().checked_add(roll.value())?;
                match target.cmp(&FINISH) {
                    Ordering::Greater => None,
                    Ordering::Equal => Some(Destination::Finish),
                    Ordering::Less => Some(Destination::Board(Square::new(target))),
                }
            }
        }
    }

    /// Whether `player` may move from `origin` with `roll`.
    #[must_use]
    pub fn is_legal_move(&self, player: Player, origin: Origin, roll: Roll) -> bool {
        if roll.is_zero() {
            return false;
        }
        let state = &self.players[player];
        match origin {
            Origin::Reserve => {
                state.reserve() > 0 && !state.occupies(Square::new(roll.value() - 1))
            }
            Origin::Square(from) => {
                if !from.on_track() || !state.occupies(from) {
                    return false;
                }
                let dest = match self.destination_of(origin, roll) {
                    Some(Destination::Finish) => return true,
                    Some(Destination::Board(dest)) => dest,
                    None => return false,
                };
                if state.occupies(dest) {
                    return false;
                }
                // The shared rosette shelters opponent pieces.
                let opponent = &self.players[player.opponent()];
                !(opponent.occupies(dest) && self.track.is_capture_protected(dest))
            }
        }
    }

    /// All origins `player` may select for `roll`, reserve first.
    #[must_use]
    pub fn legal_origins(&self, player: Player, roll: Roll) -> SmallVec<[Origin; 8]> {
        let mut origins = SmallVec::new();
        if self.is_legal_move(player, Origin::Reserve, roll) {
            origins.push(Origin::Reserve);
        }
        for index in 0..TRACK_LEN {
            let origin = Origin::Square(Square::new(index));
            if self.is_legal_move(player, origin, roll) {
                origins.push(origin);
            }
        }
        origins
    }

    // === Transitions ===

    /// Roll the dice for the active player.
    ///
    /// Returns the rolled value and the selectable origins. If the
    /// roll is 0 or nothing can move, the turn passes immediately and
    /// the result carries `turn_passed` with an empty origin list.
    pub fn roll_dice(&mut self) -> Result<RollResult, RulesError> {
        match self.phase {
            Phase::GameOver { .. } => return Err(RulesError::GameAlreadyOver),
            Phase::AwaitingSelection { .. } => {
                return Err(RulesError::WrongPhase {
                    expected: "awaiting roll",
                })
            }
            Phase::AwaitingRoll => {}
        }

        let value = self.dice.roll();
        let legal_origins = self.legal_origins(self.turn, value);

        if legal_origins.is_empty() {
            self.history.push(TurnRecord {
                player: self.turn,
                roll: value,
                origin: None,
            });
            self.turn = self.turn.opponent();
            Ok(RollResult {
                value,
                legal_origins,
                turn_passed: true,
            })
        } else {
            self.phase = Phase::AwaitingSelection { roll: value };
            Ok(RollResult {
                value,
                legal_origins,
                turn_passed: false,
            })
        }
    }

    /// Apply the active player's move from `origin` using the pending
    /// roll.
    ///
    /// One atomic transition: resolves the destination, evicts a
    /// captured opponent piece to its reserve, completes the piece on
    /// a finish, then advances the turn (kept on a rosette) or ends
    /// the game.
    pub fn select(&mut self, origin: Origin) -> Result<MoveOutcome, RulesError> {
        let roll = match self.phase {
            Phase::GameOver { .. } => return Err(RulesError::GameAlreadyOver),
            Phase::AwaitingRoll => {
                return Err(RulesError::WrongPhase {
                    expected: "awaiting selection",
                })
            }
            Phase::AwaitingSelection { roll } => roll,
        };

        let acting = self.turn;
        match origin {
            Origin::Reserve => {
                if self.players[acting].reserve() == 0 {
                    return Err(RulesError::InvalidOrigin(origin));
                }
            }
            Origin::Square(square) => {
                if !square.on_track() || !self.players[acting].occupies(square) {
                    return Err(RulesError::InvalidOrigin(origin));
                }
            }
        }
        if !self.is_legal_move(acting, origin, roll) {
            return Err(RulesError::IllegalMove { origin, roll });
        }
        let Some(destination) = self.destination_of(origin, roll) else {
            return Err(RulesError::IllegalMove { origin, roll });
        };

        let mut captured = false;
        let mut finished = false;
        match (origin, destination) {
            (Origin::Square(from), Destination::Finish) => {
                self.players[acting].complete_from(from);
                finished = true;
            }
            (origin, Destination::Board(dest)) => {
                let (own, other) = self.players.get_pair_mut(acting);
                if self.track.is_shared(dest) && other.occupies(dest) {
                    other.evict(dest);
                    captured = true;
                }
                match origin {
                    Origin::Reserve => own.enter(dest),
                    Origin::Square(from) => own.advance(from, dest),
                }
            }
            // Entry lands at most on square 3; a reserve move can
            // never finish.
            (Origin::Reserve, Destination::Finish) => {
                return Err(RulesError::IllegalMove { origin, roll })
            }
        }

        self.history.push(TurnRecord {
            player: acting,
            roll,
            origin: Some(origin),
        });
        debug_assert!(self.players[acting].is_consistent());
        debug_assert!(self.players[acting.opponent()].is_consistent());

        let game_over = self.players[acting].has_won().then_some(acting);
        let turn_passed;
        match game_over {
            Some(winner) => {
                self.phase = Phase::GameOver { winner };
                turn_passed = false;
            }
            None => {
                let bonus = matches!(
                    destination,
                    Destination::Board(dest) if self.track.is_rosette(dest)
                );
                if !bonus {
                    self.turn = acting.opponent();
                }
                turn_passed = !bonus;
                self.phase = Phase::AwaitingRoll;
            }
        }

        Ok(MoveOutcome {
            destination,
            captured,
            finished,
            game_over,
            turn_passed,
        })
    }
}
