//! Knight move generation.

use crate::board::Board;
use crate::side::Side;
use crate::square::Square;
use crate::square_set::SquareSet;

/// The eight (file, rank) jumps of a knight.
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Every on-board jump target not held by a piece of side `us`.
pub(super) fn gen_knight(board: &Board, from: Square, us: Side) -> SquareSet {
    KNIGHT_JUMPS
        .iter()
        .filter_map(|&(df, dr)| from.offset(df, dr))
        .filter(|&dst| !board.is_side_at(dst, us))
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::movegen::legal_destinations;
    use crate::piece::Piece;
    use crate::square::Square;
    use crate::square_set::SquareSet;

    fn at(file: u8, rank: u8) -> Square {
        Square::new(file, rank).unwrap()
    }

    #[test]
    fn centre_knight_reaches_eight_squares() {
        let mut board = Board::empty();
        board.place(at(3, 3), Piece::WHITE_KNIGHT).unwrap();
        let expected: SquareSet = [
            at(1, 2),
            at(1, 4),
            at(2, 5),
            at(4, 5),
            at(5, 4),
            at(5, 2),
            at(4, 1),
            at(2, 1),
        ]
        .into_iter()
        .collect();
        assert_eq!(legal_destinations(&board, at(3, 3), None), expected);
    }

    #[test]
    fn corner_knight() {
        let mut board = Board::empty();
        board.place(at(7, 0), Piece::BLACK_KNIGHT).unwrap();
        let targets: Vec<_> = legal_destinations(&board, at(7, 0), None).collect();
        assert_eq!(targets, vec![at(5, 1), at(6, 2)]);
    }

    #[test]
    fn knight_skips_friendly_and_takes_enemy() {
        let mut board = Board::empty();
        board.place(at(3, 3), Piece::WHITE_KNIGHT).unwrap();
        board.place(at(1, 2), Piece::WHITE_PAWN).unwrap();
        board.place(at(4, 5), Piece::BLACK_PAWN).unwrap();
        let targets = legal_destinations(&board, at(3, 3), None);
        assert_eq!(targets.count(), 7);
        assert!(!targets.contains(at(1, 2)));
        assert!(targets.contains(at(4, 5)));
    }

    #[test]
    fn starting_knight_jumps_over_pawns() {
        let board = Board::starting_position();
        let targets: Vec<_> = legal_destinations(&board, at(1, 0), None).collect();
        assert_eq!(targets, vec![at(0, 2), at(2, 2)]);
    }
}
