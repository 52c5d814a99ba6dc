//! Track topology: square numbering, the shared lane, and rosettes.
//!
//! Each player walks their own path of [`TRACK_LEN`] squares, numbered
//! 0..13 from that player's perspective:
//!
//! - `0..=3` — private entry lane
//! - `4..=11` — shared lane, the same physical cells for both players
//! - `12..=13` — private exit lane
//!
//! Index [`FINISH`] (14) is a virtual destination reached by bearing a
//! piece off; it is never occupied.
//!
//! Rosettes are explicit data on [`Track`] rather than derived from
//! geometry: the standard set is `{3, 7, 13}`, and square 7 — the only
//! rosette inside the shared lane — is additionally protected from
//! capture.

use serde::{Deserialize, Serialize};

/// Number of real squares on each player's path.
pub const TRACK_LEN: u8 = 14;

/// Virtual index just past the track; a destination only.
pub const FINISH: u8 = TRACK_LEN;

/// Pieces per player.
pub const PIECE_COUNT: u8 = 7;

/// A square index on a player's own path (0..13).
///
/// Squares are always interpreted from the owning player's
/// perspective; the shared lane maps both players' indices 4..=11 onto
/// the same physical cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square(pub u8);

impl Square {
    /// Create a new square index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// The raw index value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// The index as a usize, for array access.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this is a real square on the track.
    #[must_use]
    pub const fn on_track(self) -> bool {
        self.0 < TRACK_LEN
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Square({})", self.0)
    }
}

/// The fixed board topology.
///
/// Pure, stateless lookup; safe to query from either player's
/// perspective by passing that player's own square numbering.
///
/// ## Example
///
/// ```
/// use royal_ur::board::{Square, Track};
///
/// let track = Track::standard();
///
/// assert!(track.is_rosette(Square::new(7)));
/// assert!(track.is_shared(Square::new(7)));
/// assert!(track.is_capture_protected(Square::new(7)));
///
/// // Private rosettes grant a bonus turn but never see captures.
/// assert!(track.is_rosette(Square::new(13)));
/// assert!(!track.is_capture_protected(Square::new(13)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    rosettes: [bool; TRACK_LEN as usize],
}

impl Track {
    /// The standard board: rosettes on squares 3, 7, and 13.
    #[must_use]
    pub fn standard() -> Self {
        Self::with_rosettes(&[3, 7, 13])
    }

    /// A board with an explicit rosette set.
    ///
    /// Panics if any index is off the track.
    #[must_use]
    pub fn with_rosettes(squares: &[u8]) -> Self {
        let mut rosettes = [false; TRACK_LEN as usize];
        for &index in squares {
            assert!(index < TRACK_LEN, "rosette index must be on the track");
            rosettes[index as usize] = true;
        }
        Self { rosettes }
    }

    /// Whether both players traverse this square (indices 4..=11).
    #[must_use]
    pub fn is_shared(&self, square: Square) -> bool {
        (4..=11).contains(&square.raw())
    }

    /// Whether landing on this square grants a bonus turn.
    #[must_use]
    pub fn is_rosette(&self, square: Square) -> bool {
        square.on_track() && self.rosettes[square.index()]
    }

    /// Whether an opponent piece on this square cannot be captured.
    ///
    /// Only rosettes inside the shared lane are protected; private
    /// rosettes never host an opponent in the first place.
    #[must_use]
    pub fn is_capture_protected(&self, square: Square) -> bool {
        self.is_shared(square) && self.is_rosette(square)
    }

    /// All rosette squares, in ascending order.
    pub fn rosettes(&self) -> impl Iterator<Item = Square> + '_ {
        self.rosettes
            .iter()
            .enumerate()
            .filter(|(_, &set)| set)
            .map(|(i, _)| Square::new(i as u8))
    }
}

impl Default for Track {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_lane_bounds() {
        let track = Track::standard();

        assert!(!track.is_shared(Square::new(0)));
        assert!(!track.is_shared(Square::new(3)));
        assert!(track.is_shared(Square::new(4)));
        assert!(track.is_shared(Square::new(11)));
        assert!(!track.is_shared(Square::new(12)));
        assert!(!track.is_shared(Square::new(13)));
    }

    #[test]
    fn test_standard_rosettes() {
        let track = Track::standard();
        let rosettes: Vec<_> = track.rosettes().map(Square::raw).collect();

        assert_eq!(rosettes, vec![3, 7, 13]);
        for index in 0..TRACK_LEN {
            let expected = matches!(index, 3 | 7 | 13);
            assert_eq!(track.is_rosette(Square::new(index)), expected);
        }
    }

    #[test]
    fn test_only_shared_rosette_is_protected() {
        let track = Track::standard();

        for index in 0..TRACK_LEN {
            let square = Square::new(index);
            assert_eq!(track.is_capture_protected(square), index == 7);
        }
    }

    #[test]
    fn test_custom_rosettes() {
        let track = Track::with_rosettes(&[0, 5]);

        assert!(track.is_rosette(Square::new(0)));
        assert!(track.is_rosette(Square::new(5)));
        assert!(!track.is_rosette(Square::new(7)));
        assert!(track.is_capture_protected(Square::new(5)));
        assert!(!track.is_capture_protected(Square::new(0)));
    }

    #[test]
    #[should_panic(expected = "rosette index must be on the track")]
    fn test_rosette_off_track_panics() {
        let _ = Track::with_rosettes(&[14]);
    }

    #[test]
    fn test_finish_is_not_a_square() {
        let finish = Square::new(FINISH);

        assert!(!finish.on_track());
        assert!(!Track::standard().is_rosette(finish));
    }

    #[test]
    fn test_serialization() {
        let track = Track::standard();
        let json = serde_json::to_string(&track).unwrap();
        let deserialized: Track = serde_json::from_str(&json).unwrap();
        assert_eq!(track, deserialized);
    }
}
