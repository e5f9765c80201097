//! Read-only occupancy snapshot handed to presentation layers.

use crate::piece::Piece;
use crate::square::Square;

/// The occupant of every square at one point in time.
///
/// This is a copy, not a view: later moves on the board do not show up here.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Tiles([Option<Piece>; Square::COUNT]);

impl Tiles {
    #[inline]
    pub(crate) const fn new(grid: [Option<Piece>; Square::COUNT]) -> Tiles {
        Tiles(grid)
    }

    /// Return the occupant of `sq`.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.0[sq.index()]
    }

    /// Return one rank as eight cells ordered from file a to file h.
    pub fn rank(&self, rank: u8) -> &[Option<Piece>] {
        let start = rank as usize * 8;
        &self.0[start..start + 8]
    }
}
