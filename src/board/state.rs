//! Per-player piece state.
//!
//! Pieces are fungible: a piece is a boolean occupancy flag on the
//! owner's path plus the `reserve` and `finished` counters, never an
//! identity-bearing entity.
//!
//! ## Invariant
//!
//! `reserve + finished + on_track == PIECE_COUNT` at all times.
//! `PlayerState` keeps its fields private and only exposes mutators
//! that preserve this, so the invariant holds by construction.

use serde::{Deserialize, Serialize};

use super::track::{Square, PIECE_COUNT, TRACK_LEN};

/// One player's pieces: occupancy per own-path square, plus the
/// off-board counters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerState {
    pieces: [bool; TRACK_LEN as usize],
    reserve: u8,
    finished: u8,
}

impl PlayerState {
    /// The starting state: all pieces in reserve.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pieces: [false; TRACK_LEN as usize],
            reserve: PIECE_COUNT,
            finished: 0,
        }
    }

    /// Reconstruct a state from raw parts, e.g. a deserialized
    /// snapshot.
    ///
    /// Returns `None` if the parts violate piece conservation.
    #[must_use]
    pub fn from_parts(pieces: [bool; TRACK_LEN as usize], reserve: u8, finished: u8) -> Option<Self> {
        let state = Self {
            pieces,
            reserve,
            finished,
        };
        state.is_consistent().then_some(state)
    }

    /// Whether this player occupies the given own-path square.
    #[must_use]
    pub fn occupies(&self, square: Square) -> bool {
        square.on_track() && self.pieces[square.index()]
    }

    /// Occupancy flags for all own-path squares.
    #[must_use]
    pub fn pieces(&self) -> &[bool; TRACK_LEN as usize] {
        &self.pieces
    }

    /// Pieces not yet entered.
    #[must_use]
    pub fn reserve(&self) -> u8 {
        self.reserve
    }

    /// Pieces that completed the track.
    #[must_use]
    pub fn finished(&self) -> u8 {
        self.finished
    }

    /// Number of pieces currently on the track.
    #[must_use]
    pub fn on_track(&self) -> u8 {
        self.pieces.iter().filter(|&&occupied| occupied).count() as u8
    }

    /// Whether every piece has completed the track.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.finished == PIECE_COUNT
    }

    /// Piece conservation check.
    ///
    /// Summed in u32 so counters from an untrusted snapshot cannot
    /// overflow the check itself.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        u32::from(self.reserve) + u32::from(self.finished) + u32::from(self.on_track())
            == u32::from(PIECE_COUNT)
    }

    /// Move a piece from the reserve onto an empty square.
    pub(crate) fn enter(&mut self, square: Square) {
        debug_assert!(self.reserve > 0);
        debug_assert!(!self.occupies(square));
        self.reserve -= 1;
        self.pieces[square.index()] = true;
    }

    /// Move a piece between two own-path squares.
    pub(crate) fn advance(&mut self, from: Square, to: Square) {
        debug_assert!(self.occupies(from));
        debug_assert!(!self.occupies(to));
        self.pieces[from.index()] = false;
        self.pieces[to.index()] = true;
    }

    /// Remove a captured piece; it returns to the reserve.
    pub(crate) fn evict(&mut self, square: Square) {
        debug_assert!(self.occupies(square));
        self.pieces[square.index()] = false;
        self.reserve += 1;
    }

    /// Bear a piece off the end of the track.
    pub(crate) fn complete_from(&mut self, square: Square) {
        debug_assert!(self.occupies(square));
        self.pieces[square.index()] = false;
        self.finished += 1;
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_state() {
        let state = PlayerState::new();

        assert_eq!(state.reserve(), PIECE_COUNT);
        assert_eq!(state.finished(), 0);
        assert_eq!(state.on_track(), 0);
        assert!(state.is_consistent());
        assert!(!state.has_won());
    }

    #[test]
    fn test_enter_preserves_conservation() {
        let mut state = PlayerState::new();

        state.enter(Square::new(2));

        assert!(state.occupies(Square::new(2)));
        assert_eq!(state.reserve(), PIECE_COUNT - 1);
        assert_eq!(state.on_track(), 1);
        assert!(state.is_consistent());
    }

    #[test]
    fn test_advance() {
        let mut state = PlayerState::new();
        state.enter(Square::new(2));

        state.advance(Square::new(2), Square::new(6));

        assert!(!state.occupies(Square::new(2)));
        assert!(state.occupies(Square::new(6)));
        assert!(state.is_consistent());
    }

    #[test]
    fn test_evict_returns_to_reserve() {
        let mut state = PlayerState::new();
        state.enter(Square::new(0));

        state.evict(Square::new(0));

        assert!(!state.occupies(Square::new(0)));
        assert_eq!(state.reserve(), PIECE_COUNT);
        assert!(state.is_consistent());
    }

    #[test]
    fn test_complete_does_not_refill_reserve() {
        let mut state = PlayerState::new();
        state.enter(Square::new(3));

        state.complete_from(Square::new(3));

        assert_eq!(state.finished(), 1);
        assert_eq!(state.reserve(), PIECE_COUNT - 1);
        assert_eq!(state.on_track(), 0);
        assert!(state.is_consistent());
    }

    #[test]
    fn test_has_won() {
        let mut state = PlayerState::new();

        for _ in 0..PIECE_COUNT {
            state.enter(Square::new(13));
            state.complete_from(Square::new(13));
        }

        assert!(state.has_won());
        assert!(state.is_consistent());
    }

    #[test]
    fn test_from_parts_rejects_inconsistent() {
        let empty = [false; TRACK_LEN as usize];

        assert!(PlayerState::from_parts(empty, PIECE_COUNT, 0).is_some());
        assert!(PlayerState::from_parts(empty, 3, 4).is_some());
        assert!(PlayerState::from_parts(empty, PIECE_COUNT, 1).is_none());

        let mut one_piece = empty;
        one_piece[5] = true;
        assert!(PlayerState::from_parts(one_piece, PIECE_COUNT - 1, 0).is_some());
        assert!(PlayerState::from_parts(one_piece, PIECE_COUNT, 0).is_none());
    }

    #[test]
    fn test_from_parts_rejects_overflowing_counters() {
        let empty = [false; TRACK_LEN as usize];

        // Counter pairs whose u8 sum wraps back to PIECE_COUNT must
        // still be rejected.
        assert!(PlayerState::from_parts(empty, 255, 8).is_none());
        assert!(PlayerState::from_parts(empty, 8, 255).is_none());
        assert!(PlayerState::from_parts(empty, 255, 255).is_none());
    }

    #[test]
    fn test_occupies_off_track() {
        let state = PlayerState::new();
        assert!(!state.occupies(Square::new(TRACK_LEN)));
    }

    #[test]
    fn test_serialization() {
        let mut state = PlayerState::new();
        state.enter(Square::new(1));

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: PlayerState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
