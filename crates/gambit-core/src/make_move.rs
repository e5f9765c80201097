//! Move application: validate against the mover's destinations, then relocate.

use tracing::{debug, trace};

use crate::board::Board;
use crate::chess_move::Move;
use crate::movegen::legal_destinations;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

impl Board {
    /// Squares the piece on `from` may move to, given the board's last move.
    pub fn legal_destinations(&self, from: Square) -> SquareSet {
        legal_destinations(self, from, self.last_move())
    }

    /// Move the piece on `from` to `to` if that is one of its legal destinations.
    ///
    /// Returns `false` and leaves the board untouched when `from` is empty
    /// or `to` is not a legal destination. Turn order is the caller's
    /// concern: any piece may be moved.
    pub fn apply_move(&mut self, from: Square, to: Square) -> bool {
        let Some(piece) = self.piece_at(from) else {
            trace!(%from, %to, "rejected move from empty square");
            return false;
        };
        if !self.legal_destinations(from).contains(to) {
            trace!(%from, %to, %piece, "rejected illegal move");
            return false;
        }
        self.relocate(Move::new(from, to));
        debug!(%from, %to, %piece, "applied move");
        true
    }

    /// Carry out a move without checking legality.
    ///
    /// Clears the origin, writes the piece to the destination (capturing
    /// whatever was there), removes a pawn taken en passant, keeps the king
    /// index in step and records the move as the last move. The board is
    /// consistent again when this returns.
    pub(crate) fn relocate(&mut self, mv: Move) {
        let (from, to) = (mv.from(), mv.to());
        let Some(piece) = self.remove(from) else {
            return;
        };

        // A pawn changing file onto an empty square is capturing en passant.
        if piece.kind() == PieceKind::Pawn
            && from.file() != to.file()
            && !self.is_occupied(to)
            && let Some(passed) = Square::new(to.file(), from.rank())
        {
            self.clear(passed);
        }

        self.put(to, piece);
        self.set_last_move(Some(mv));
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::chess_move::Move;
    use crate::piece::Piece;
    use crate::side::Side;
    use crate::square::Square;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn opening_pawn_push() {
        let mut board = Board::starting_position();
        assert!(board.apply_move(sq("e2"), sq("e4")));
        assert_eq!(board.piece_at(sq("e2")), None);
        assert_eq!(board.piece_at(sq("e4")), Some(Piece::WHITE_PAWN));
        assert_eq!(board.last_move(), Some(Move::new(sq("e2"), sq("e4"))));
    }

    #[test]
    fn rejected_move_changes_nothing() {
        let mut board = Board::starting_position();
        let before = board;
        assert!(!board.apply_move(sq("e2"), sq("e5")));
        assert!(!board.apply_move(sq("e4"), sq("e5")));
        assert!(!board.apply_move(sq("a1"), sq("a2")));
        assert_eq!(board, before);
    }

    #[test]
    fn capture_replaces_occupant() {
        let mut board = Board::empty();
        board.place(sq("d1"), Piece::WHITE_ROOK).unwrap();
        board.place(sq("d7"), Piece::BLACK_KNIGHT).unwrap();
        assert!(board.apply_move(sq("d1"), sq("d7")));
        assert_eq!(board.piece_at(sq("d7")), Some(Piece::WHITE_ROOK));
        assert_eq!(board.pieces_of(Side::Black).count(), 0);
    }

    #[test]
    fn king_move_updates_index() {
        let mut board = Board::starting_position();
        assert!(board.apply_move(sq("e2"), sq("e4")));
        assert!(board.apply_move(sq("e7"), sq("e5")));
        assert!(board.apply_move(sq("e1"), sq("e2")));
        assert_eq!(board.king_square(Side::White), sq("e2"));
        board.validate().unwrap();
    }

    #[test]
    fn en_passant_removes_passed_pawn() {
        let mut board = Board::starting_position();
        for (from, to) in [("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")] {
            assert!(board.apply_move(sq(from), sq(to)), "{from} {to} should be legal");
        }
        assert!(board.apply_move(sq("e5"), sq("d6")));
        assert_eq!(board.piece_at(sq("d6")), Some(Piece::WHITE_PAWN));
        assert_eq!(board.piece_at(sq("d5")), None);
        assert_eq!(board.pieces_of(Side::Black).count(), 15);
    }

    #[test]
    fn ordinary_diagonal_capture_keeps_neighbours() {
        let mut board = Board::empty();
        board.place(sq("e4"), Piece::WHITE_PAWN).unwrap();
        board.place(sq("d5"), Piece::BLACK_PAWN).unwrap();
        board.place(sq("d4"), Piece::BLACK_PAWN).unwrap();
        assert!(board.apply_move(sq("e4"), sq("d5")));
        assert_eq!(board.piece_at(sq("d4")), Some(Piece::BLACK_PAWN));
    }

    #[test]
    fn capturing_a_king_clears_its_index() {
        let mut board = Board::empty();
        board.place(sq("a1"), Piece::WHITE_ROOK).unwrap();
        board.place(sq("a8"), Piece::BLACK_KING).unwrap();
        assert!(board.apply_move(sq("a1"), sq("a8")));
        assert_eq!(board.find_king(Side::Black), None);
    }
}
