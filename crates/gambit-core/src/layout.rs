//! Piece-placement strings for [`Board`].
//!
//! The format is the placement field of FEN: eight '/'-separated ranks
//! from rank 8 down to rank 1, digits for runs of empty squares, uppercase
//! letters for White and lowercase for Black.

use std::str::FromStr;

use crate::board::Board;
use crate::error::LayoutError;
use crate::piece::Piece;
use crate::square::Square;

/// Placement string of the standard starting position.
pub const STARTING_LAYOUT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl FromStr for Board {
    type Err = LayoutError;

    /// Parse a placement string into a board with no previous move.
    ///
    /// The result is not required to contain kings; call
    /// [`Board::validate`] when a playable position is needed.
    fn from_str(layout: &str) -> Result<Board, LayoutError> {
        let ranks: Vec<&str> = layout.trim().split('/').collect();
        if ranks.len() != 8 {
            return Err(LayoutError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        for (rank_index, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_index as u8;
            let mut file: usize = 0;

            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    if !(1..=8).contains(&run) {
                        return Err(LayoutError::InvalidPieceChar { character: c });
                    }
                    file += run as usize;
                    continue;
                }

                let piece =
                    Piece::from_glyph(c).ok_or(LayoutError::InvalidPieceChar { character: c })?;
                let sq = u8::try_from(file)
                    .ok()
                    .and_then(|f| Square::new(f, rank))
                    .ok_or(LayoutError::BadRankLength {
                        rank_index,
                        length: file + 1,
                    })?;
                board.place(sq, piece)?;
                file += 1;
            }

            if file != 8 {
                return Err(LayoutError::BadRankLength {
                    rank_index,
                    length: file,
                });
            }
        }
        Ok(board)
    }
}

impl Board {
    /// Parse a placement string, e.g. [`STARTING_LAYOUT`].
    ///
    /// Same as `layout.parse::<Board>()`; kings are not required.
    pub fn from_layout(layout: &str) -> Result<Board, LayoutError> {
        layout.parse()
    }

    /// Serialize the piece placement in the format accepted by [`FromStr`].
    pub fn to_layout(&self) -> String {
        let mut out = String::with_capacity(71);
        for rank in (0u8..8).rev() {
            let mut empty_run = 0u8;
            for file in 0u8..8 {
                let sq = Square::from_index_unchecked(rank * 8 + file);
                match self.piece_at(sq) {
                    Some(piece) => {
                        if empty_run > 0 {
                            out.push((b'0' + empty_run) as char);
                            empty_run = 0;
                        }
                        out.push(piece.glyph());
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                out.push((b'0' + empty_run) as char);
            }
            if rank > 0 {
                out.push('/');
            }
        }
        out
    }
}
