//! The board: an 8x8 occupancy grid, the king-square index and the last move.

use std::fmt;

use crate::chess_move::Move;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::side::Side;
use crate::square::Square;
use crate::tiles::Tiles;

/// Major pieces from file a to file h.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Complete rules state of a game in progress.
///
/// The board is a plain value: copying it yields an independent snapshot,
/// which is how speculative moves are evaluated without touching the
/// live position.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Occupant of each square, indexed by [`Square::index`].
    grid: [Option<Piece>; Square::COUNT],
    /// Square of each side's king, indexed by [`Side::index`]. Derived from `grid`.
    kings: [Option<Square>; Side::COUNT],
    /// Most recently applied move, if any.
    last_move: Option<Move>,
}

impl Board {
    /// Return a board with no pieces, for building custom positions.
    pub const fn empty() -> Board {
        Board {
            grid: [None; Square::COUNT],
            kings: [None; Side::COUNT],
            last_move: None,
        }
    }

    /// Return the standard 32-piece starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for side in Side::ALL {
            for (file, kind) in (0u8..).zip(BACK_RANK) {
                let back = Square::from_index_unchecked(side.back_rank() * 8 + file);
                board.put(back, Piece::new(kind, side));
                let pawn = Square::from_index_unchecked(side.pawn_start_rank() * 8 + file);
                board.put(pawn, Piece::new(PieceKind::Pawn, side));
            }
        }
        board
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.index()]
    }

    /// Return `true` if the given square is occupied.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.grid[sq.index()].is_some()
    }

    /// Return `true` if the square holds a piece of `side`.
    #[inline]
    pub fn is_side_at(&self, sq: Square, side: Side) -> bool {
        self.grid[sq.index()].is_some_and(|piece| piece.is(side))
    }

    /// Return a read-only snapshot of every square's occupant.
    #[inline]
    pub fn tiles(&self) -> Tiles {
        Tiles::new(self.grid)
    }

    /// Iterate over the pieces of `side` together with their squares.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.grid[sq.index()] {
            Some(piece) if piece.is(side) => Some((sq, piece)),
            _ => None,
        })
    }

    /// Return the square of the king for the given side.
    ///
    /// # Panics
    ///
    /// Panics if the board has no king for `side`; every rules query that
    /// needs a king treats its absence as a construction bug.
    pub fn king_square(&self, side: Side) -> Square {
        self.kings[side.index()]
            .unwrap_or_else(|| panic!("board must have a {side} king"))
    }

    /// Return the square of the king for the given side, if it has one.
    #[inline]
    pub fn find_king(&self, side: Side) -> Option<Square> {
        self.kings[side.index()]
    }

    /// Return the most recently applied move, if any.
    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Place a piece on an empty square.
    pub fn place(&mut self, sq: Square, piece: Piece) -> Result<(), BoardError> {
        if self.is_occupied(sq) {
            return Err(BoardError::SquareOccupied { square: sq });
        }
        if piece.kind() == PieceKind::King && self.kings[piece.side().index()].is_some() {
            return Err(BoardError::DuplicateKing { side: piece.side() });
        }
        self.put(sq, piece);
        Ok(())
    }

    /// Take the piece off the given square, returning it.
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.grid[sq.index()].take()?;
        if piece.kind() == PieceKind::King {
            self.kings[piece.side().index()] = None;
        }
        Some(piece)
    }

    /// Check that each side has exactly one king and the king index agrees with the grid.
    pub fn validate(&self) -> Result<(), BoardError> {
        for side in Side::ALL {
            let king = Piece::new(PieceKind::King, side);
            let mut on_grid = Square::all().filter(|sq| self.grid[sq.index()] == Some(king));
            let first = on_grid.next();
            let count = usize::from(first.is_some()) + on_grid.count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount { side, count });
            }
            if self.kings[side.index()] != first {
                return Err(BoardError::KingIndexMismatch { side });
            }
        }
        Ok(())
    }

    /// Write a piece into a cell, keeping the king index in step.
    #[inline]
    pub(crate) fn put(&mut self, sq: Square, piece: Piece) {
        if let Some(old) = self.grid[sq.index()]
            && old.kind() == PieceKind::King
        {
            self.kings[old.side().index()] = None;
        }
        self.grid[sq.index()] = Some(piece);
        if piece.kind() == PieceKind::King {
            self.kings[piece.side().index()] = Some(sq);
        }
    }

    /// Empty a cell, keeping the king index in step.
    #[inline]
    pub(crate) fn clear(&mut self, sq: Square) {
        self.remove(sq);
    }

    #[inline]
    pub(crate) fn set_last_move(&mut self, mv: Option<Move>) {
        self.last_move = mv;
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self.to_layout())
    }
}
