//! Error types for board construction and layout parsing.

use crate::side::Side;
use crate::square::Square;

/// Errors from placing pieces on a [`Board`](crate::board::Board) or validating it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A piece was placed on a square that already holds one.
    #[error("square {square} is already occupied")]
    SquareOccupied {
        /// The contested square.
        square: Square,
    },
    /// A second king was placed for the same side.
    #[error("{side} already has a king")]
    DuplicateKing {
        /// Side that would own two kings.
        side: Side,
    },
    /// A side does not have exactly one king on the grid.
    #[error("{side} has {count} kings, expected 1")]
    InvalidKingCount {
        /// Side with the wrong number of kings.
        side: Side,
        /// Kings of that side found on the grid.
        count: usize,
    },
    /// The king-square index disagrees with the grid.
    #[error("{side} king index does not match the grid")]
    KingIndexMismatch { side: Side },
    /// The side that just moved is still in check, so its king could be captured.
    #[error("{side} is in check but not on move")]
    OpponentInCheck { side: Side },
}

/// Errors that occur when parsing a piece-placement layout string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// The layout does not have exactly 8 '/'-separated ranks.
    #[error("expected 8 ranks in layout, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based position in the string (0 = rank 8, 7 = rank 1).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the layout.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The pieces could not be placed.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying placement error.
        #[from]
        source: BoardError,
    },
}
