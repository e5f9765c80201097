//! A piece with its side, bit-packed into a single byte.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::side::Side;

/// A piece of a given kind belonging to a given side.
///
/// Bit layout:
/// - bits 0-2: [`PieceKind`] (values 0-5)
/// - bit 3: [`Side`] (0 = White, 1 = Black)
///
/// A piece carries no square of its own; its square is the board cell
/// holding it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    pub const WHITE_PAWN: Piece = Piece::new(PieceKind::Pawn, Side::White);
    pub const WHITE_KNIGHT: Piece = Piece::new(PieceKind::Knight, Side::White);
    pub const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Side::White);
    pub const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Side::White);
    pub const WHITE_QUEEN: Piece = Piece::new(PieceKind::Queen, Side::White);
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Side::White);

    pub const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Side::Black);
    pub const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Side::Black);
    pub const BLACK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Side::Black);
    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Side::Black);
    pub const BLACK_QUEEN: Piece = Piece::new(PieceKind::Queen, Side::Black);
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Side::Black);

    /// Create a piece from a kind and a side.
    #[inline]
    pub const fn new(kind: PieceKind, side: Side) -> Piece {
        Piece((side as u8) << 3 | (kind as u8))
    }

    /// Parse a display letter: uppercase is White, lowercase is Black.
    #[inline]
    pub fn from_glyph(c: char) -> Option<Piece> {
        let kind = PieceKind::from_glyph(c)?;
        let side = if c.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        Some(Piece::new(kind, side))
    }

    /// Return the piece kind (the lower 3 bits).
    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self.0 & 0x07 {
            0 => PieceKind::Pawn,
            1 => PieceKind::Knight,
            2 => PieceKind::Bishop,
            3 => PieceKind::Rook,
            4 => PieceKind::Queen,
            _ => PieceKind::King,
        }
    }

    /// Return the owning side (bit 3).
    #[inline]
    pub const fn side(self) -> Side {
        match self.0 >> 3 {
            0 => Side::White,
            _ => Side::Black,
        }
    }

    /// Return `true` if this piece belongs to `side`.
    #[inline]
    pub const fn is(self, side: Side) -> bool {
        self.side() as u8 == side as u8
    }

    /// Return the display letter: uppercase for White, lowercase for Black.
    #[inline]
    pub fn glyph(self) -> char {
        let base = self.kind().glyph();
        match self.side() {
            Side::White => base,
            Side::Black => base.to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side_prefix = match self.side() {
            Side::White => 'W',
            Side::Black => 'B',
        };
        write!(f, "{}{}", side_prefix, self.kind().glyph())
    }
}
