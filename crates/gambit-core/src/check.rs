//! Check and checkmate detection.

use tracing::debug;

use crate::board::Board;
use crate::chess_move::Move;
use crate::movegen::{attacks, legal_destinations};
use crate::side::Side;
use crate::square::Square;

impl Board {
    /// Return `true` if any enemy piece attacks `side`'s king.
    ///
    /// # Panics
    ///
    /// Panics if `side` has no king on the board.
    pub fn is_in_check(&self, side: Side) -> bool {
        let king_sq = self.king_square(side);
        self.pieces_of(!side)
            .any(|(from, _)| attacks(self, from).contains(king_sq))
    }

    /// Return `true` if `side` is in check and no move of any of its pieces
    /// gets it out.
    ///
    /// King steps, blocks and captures of the checking piece all count as
    /// escapes. Each candidate is tried on a copy of the board.
    pub fn is_checkmate(&self, side: Side) -> bool {
        if !self.is_in_check(side) {
            return false;
        }
        let last_move = self.last_move();
        let escape = self.pieces_of(side).find_map(|(from, _)| {
            legal_destinations(self, from, last_move)
                .find(|&to| !self.exposes_king(from, to))
                .map(|to| Move::new(from, to))
        });
        match escape {
            Some(mv) => {
                debug!(%side, escape = %mv, "check can be escaped");
                false
            }
            None => {
                debug!(%side, "checkmate");
                true
            }
        }
    }

    /// Return `true` if moving the piece on `from` to `to` would leave its own
    /// king in check.
    ///
    /// The move is simulated on a copy of the board and is not checked for
    /// legality. Returns `false` when `from` is empty or its side has no king.
    pub fn exposes_king(&self, from: Square, to: Square) -> bool {
        let Some(piece) = self.piece_at(from) else {
            return false;
        };
        let mut snapshot = *self;
        snapshot.relocate(Move::new(from, to));
        snapshot.find_king(piece.side()).is_some() && snapshot.is_in_check(piece.side())
    }
}
