//! King move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::side::Side;
use crate::square::Square;
use crate::square_set::SquareSet;

/// The eight neighbouring (file, rank) steps.
const KING_STEPS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Neighbouring squares not held by a piece of side `us`, ignoring check.
///
/// This is the king's attack set: it never consults check detection, so a
/// king can take part in the enemy's check test without recursing.
pub(super) fn king_reach(board: &Board, from: Square, us: Side) -> SquareSet {
    KING_STEPS
        .iter()
        .filter_map(|&(df, dr)| from.offset(df, dr))
        .filter(|&dst| !board.is_side_at(dst, us))
        .collect()
}

/// Neighbouring squares the king can step to without standing in check.
///
/// Each candidate is tried on a copy of the board; the live board is
/// never written.
pub(super) fn gen_king(board: &Board, from: Square, us: Side) -> SquareSet {
    king_reach(board, from, us)
        .filter(|&dst| {
            let mut snapshot = *board;
            snapshot.relocate(Move::new(from, dst));
            !snapshot.is_in_check(us)
        })
        .collect()
}
