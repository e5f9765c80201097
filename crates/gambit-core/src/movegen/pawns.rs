//! Pawn move generation: captures, pushes and en passant.

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::side::Side;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Legal pawn destinations for a pawn of side `us` standing on `from`.
///
/// `last_move` decides en passant; pass `None` to ask for captures and
/// pushes only.
pub(super) fn gen_pawn(
    board: &Board,
    from: Square,
    us: Side,
    last_move: Option<Move>,
) -> SquareSet {
    gen_captures(board, from, us)
        | gen_pushes(board, from, us)
        | gen_en_passant(board, from, us, last_move)
}

/// Forward diagonals holding an enemy piece.
fn gen_captures(board: &Board, from: Square, us: Side) -> SquareSet {
    let dir = us.pawn_direction();
    [-1, 1]
        .into_iter()
        .filter_map(|df| from.offset(df, dir))
        .filter(|&dst| board.is_side_at(dst, !us))
        .collect()
}

/// One step forward onto an empty square, two from the start rank if both are empty.
fn gen_pushes(board: &Board, from: Square, us: Side) -> SquareSet {
    let dir = us.pawn_direction();
    let mut targets = SquareSet::EMPTY;

    let Some(single) = from.offset(0, dir).filter(|&sq| !board.is_occupied(sq)) else {
        return targets;
    };
    targets.insert(single);

    if from.rank() == us.pawn_start_rank()
        && let Some(double) = single.offset(0, dir)
        && !board.is_occupied(double)
    {
        targets.insert(double);
    }
    targets
}

/// Diagonal square behind an enemy pawn that double-stepped alongside on the previous move.
fn gen_en_passant(board: &Board, from: Square, us: Side, last_move: Option<Move>) -> SquareSet {
    let Some(last) = last_move else {
        return SquareSet::EMPTY;
    };
    let dir = us.pawn_direction();
    let enemy_pawn = Piece::new(PieceKind::Pawn, !us);

    let mut targets = SquareSet::EMPTY;
    for df in [-1, 1] {
        let Some(beside) = from.offset(df, 0) else {
            continue;
        };
        if board.piece_at(beside) != Some(enemy_pawn) {
            continue;
        }
        // The enemy pawn must have just arrived from two ranks further up our path.
        let just_double_stepped =
            last.to() == beside && beside.offset(0, 2 * dir) == Some(last.from());
        if just_double_stepped && let Some(behind) = beside.offset(0, dir) {
            targets.insert(behind);
        }
    }
    targets
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::chess_move::Move;
    use crate::movegen::legal_destinations;
    use crate::piece::Piece;
    use crate::square::Square;
    use crate::square_set::SquareSet;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn set(names: &[&str]) -> SquareSet {
        names.iter().map(|n| sq(n)).collect()
    }

    #[test]
    fn start_rank_pawn_single_and_double() {
        let board = Board::starting_position();
        assert_eq!(legal_destinations(&board, sq("e2"), None), set(&["e3", "e4"]));
        assert_eq!(legal_destinations(&board, sq("d7"), None), set(&["d6", "d5"]));
    }

    #[test]
    fn double_step_only_from_start_rank() {
        let mut board = Board::empty();
        board.place(sq("e3"), Piece::WHITE_PAWN).unwrap();
        board.place(sq("c6"), Piece::BLACK_PAWN).unwrap();
        assert_eq!(legal_destinations(&board, sq("e3"), None), set(&["e4"]));
        assert_eq!(legal_destinations(&board, sq("c6"), None), set(&["c5"]));
    }

    #[test]
    fn double_step_needs_both_squares_empty() {
        let mut board = Board::empty();
        board.place(sq("e2"), Piece::WHITE_PAWN).unwrap();
        board.place(sq("e4"), Piece::BLACK_KNIGHT).unwrap();
        assert_eq!(legal_destinations(&board, sq("e2"), None), set(&["e3"]));

        let mut board = Board::empty();
        board.place(sq("e2"), Piece::WHITE_PAWN).unwrap();
        board.place(sq("e3"), Piece::WHITE_KNIGHT).unwrap();
        assert!(legal_destinations(&board, sq("e2"), None).is_empty());
    }

    #[test]
    fn pawn_captures_diagonally_only_enemies() {
        let mut board = Board::empty();
        board.place(sq("d4"), Piece::WHITE_PAWN).unwrap();
        board.place(sq("c5"), Piece::BLACK_ROOK).unwrap();
        board.place(sq("e5"), Piece::WHITE_ROOK).unwrap();
        board.place(sq("d5"), Piece::BLACK_PAWN).unwrap();
        assert_eq!(legal_destinations(&board, sq("d4"), None), set(&["c5"]));
    }

    #[test]
    fn pawn_on_last_rank_has_no_moves() {
        let mut board = Board::empty();
        board.place(sq("a8"), Piece::WHITE_PAWN).unwrap();
        board.place(sq("h1"), Piece::BLACK_PAWN).unwrap();
        assert!(legal_destinations(&board, sq("a8"), None).is_empty());
        assert!(legal_destinations(&board, sq("h1"), None).is_empty());
    }

    #[test]
    fn en_passant_after_double_step() {
        let mut board = Board::empty();
        board.place(sq("e5"), Piece::WHITE_PAWN).unwrap();
        board.place(sq("f5"), Piece::BLACK_PAWN).unwrap();
        let last = Some(Move::new(sq("f7"), sq("f5")));
        assert_eq!(legal_destinations(&board, sq("e5"), last), set(&["e6", "f6"]));
    }

    #[test]
    fn en_passant_for_black() {
        let mut board = Board::empty();
        board.place(sq("d4"), Piece::BLACK_PAWN).unwrap();
        board.place(sq("c4"), Piece::WHITE_PAWN).unwrap();
        let last = Some(Move::new(sq("c2"), sq("c4")));
        assert_eq!(legal_destinations(&board, sq("d4"), last), set(&["d3", "c3"]));
    }

    #[test]
    fn no_en_passant_after_single_steps() {
        let mut board = Board::empty();
        board.place(sq("e5"), Piece::WHITE_PAWN).unwrap();
        board.place(sq("f5"), Piece::BLACK_PAWN).unwrap();
        let last = Some(Move::new(sq("f6"), sq("f5")));
        assert_eq!(legal_destinations(&board, sq("e5"), last), set(&["e6"]));
    }

    #[test]
    fn no_en_passant_when_another_piece_moved_last() {
        let mut board = Board::empty();
        board.place(sq("e5"), Piece::WHITE_PAWN).unwrap();
        board.place(sq("f5"), Piece::BLACK_PAWN).unwrap();
        board.place(sq("a6"), Piece::BLACK_ROOK).unwrap();
        let last = Some(Move::new(sq("a7"), sq("a6")));
        assert_eq!(legal_destinations(&board, sq("e5"), last), set(&["e6"]));
        assert_eq!(legal_destinations(&board, sq("e5"), None), set(&["e6"]));
    }

    #[test]
    fn no_en_passant_against_non_pawn() {
        let mut board = Board::empty();
        board.place(sq("e5"), Piece::WHITE_PAWN).unwrap();
        board.place(sq("f5"), Piece::BLACK_ROOK).unwrap();
        let last = Some(Move::new(sq("f7"), sq("f5")));
        assert_eq!(legal_destinations(&board, sq("e5"), last), set(&["e6"]));
    }
}
