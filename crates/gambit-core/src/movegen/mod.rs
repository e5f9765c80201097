//! Per-piece destination generation.
//!
//! Every piece kind answers the same question: given the board and the
//! previous move, which squares may the piece on `from` move to. The
//! kind is a closed enum, so dispatch is a plain `match`.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

use self::king::{gen_king, king_reach};
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::gen_sliders;

/// Squares the piece on `from` may legally move to.
///
/// Returns the empty set when `from` is empty. `last_move` only matters
/// for pawns, which need it to decide en passant. A king never lists a
/// square that would leave it in check; other pieces are not filtered for
/// self-check.
pub fn legal_destinations(board: &Board, from: Square, last_move: Option<Move>) -> SquareSet {
    let Some(piece) = board.piece_at(from) else {
        return SquareSet::EMPTY;
    };
    let us = piece.side();
    match piece.kind() {
        PieceKind::Pawn => gen_pawn(board, from, us, last_move),
        PieceKind::Knight => gen_knight(board, from, us),
        kind @ (PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen) => {
            gen_sliders(board, from, us, kind.ray_directions())
        }
        PieceKind::King => gen_king(board, from, us),
    }
}

/// Squares the piece on `from` attacks, for check detection.
///
/// Same as [`legal_destinations`] with no previous move (en passant can
/// never give check), except that the king's set skips the check filter.
pub fn attacks(board: &Board, from: Square) -> SquareSet {
    match board.piece_at(from) {
        Some(piece) if piece.kind() == PieceKind::King => king_reach(board, from, piece.side()),
        Some(_) => legal_destinations(board, from, None),
        None => SquareSet::EMPTY,
    }
}

#[cfg(test)]
mod tests {
    use super::{attacks, legal_destinations};
    use crate::board::Board;
    use crate::piece::Piece;
    use crate::side::Side;
    use crate::square::Square;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn empty_square_has_no_destinations() {
        let board = Board::starting_position();
        assert!(legal_destinations(&board, sq("e4"), None).is_empty());
        assert!(attacks(&board, sq("e4")).is_empty());
    }

    #[test]
    fn starting_position_has_twenty_moves_per_side() {
        let board = Board::starting_position();
        for side in Side::ALL {
            let total: u32 = board
                .pieces_of(side)
                .map(|(from, _)| legal_destinations(&board, from, None).count())
                .sum();
            assert_eq!(total, 20, "{side} should have 20 moves");
        }
    }

    #[test]
    fn king_attacks_ignore_check() {
        // Both kings cover d2, e2 and f2 even though neither may step there.
        let mut board = Board::empty();
        board.place(sq("e1"), Piece::WHITE_KING).unwrap();
        board.place(sq("e3"), Piece::BLACK_KING).unwrap();
        let reach = attacks(&board, sq("e1"));
        assert!(reach.contains(sq("e2")));
        assert!(!legal_destinations(&board, sq("e1"), None).contains(sq("e2")));
    }
}
