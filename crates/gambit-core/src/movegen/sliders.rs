//! Ray casting for bishops, rooks and queens.

use crate::board::Board;
use crate::piece_kind::PieceKind;
use crate::side::Side;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Cast every ray in `directions` from `from` for a piece of side `us`.
///
/// A ray stops before a friendly piece and stops on an enemy piece, except
/// an enemy king: the ray runs on through it so the squares behind the
/// king count as attacked too.
pub(super) fn gen_sliders(
    board: &Board,
    from: Square,
    us: Side,
    directions: &[(i8, i8)],
) -> SquareSet {
    let mut targets = SquareSet::EMPTY;
    for &(file_step, rank_step) in directions {
        let mut cursor = from.offset(file_step, rank_step);
        while let Some(sq) = cursor {
            match board.piece_at(sq) {
                None => targets.insert(sq),
                Some(piece) if piece.is(us) => break,
                Some(piece) => {
                    targets.insert(sq);
                    if piece.kind() != PieceKind::King {
                        break;
                    }
                }
            }
            cursor = sq.offset(file_step, rank_step);
        }
    }
    targets
}
