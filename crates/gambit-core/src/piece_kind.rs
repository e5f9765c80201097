//! Chess piece kinds.

/// Diagonal ray directions as (file, rank) steps.
const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// Orthogonal ray directions as (file, rank) steps.
const ORTHOGONALS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Union of both ray families, used by the queen.
const ALL_RAYS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// The kind of a chess piece, without side information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All piece kinds, pawn first.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Return the uppercase display letter (K, Q, R, B, N, P).
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Parse a display letter (case-insensitive) into a piece kind.
    #[inline]
    pub fn from_glyph(c: char) -> Option<PieceKind> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Ray directions for sliding kinds; empty for everything else.
    #[inline]
    pub const fn ray_directions(self) -> &'static [(i8, i8)] {
        match self {
            PieceKind::Bishop => &DIAGONALS,
            PieceKind::Rook => &ORTHOGONALS,
            PieceKind::Queen => &ALL_RAYS,
            PieceKind::Pawn | PieceKind::Knight | PieceKind::King => &[],
        }
    }

    /// Return `true` for bishops, rooks and queens.
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

#[cfg(test)]
mod tests {
    use super::PieceKind;

    #[test]
    fn glyph_roundtrip() {
        for kind in PieceKind::ALL {
            let c = kind.glyph();
            assert_eq!(PieceKind::from_glyph(c), Some(kind));
            assert_eq!(PieceKind::from_glyph(c.to_ascii_lowercase()), Some(kind));
        }
        assert_eq!(PieceKind::from_glyph('x'), None);
        assert_eq!(PieceKind::from_glyph('1'), None);
    }

    #[test]
    fn queen_rays_are_bishop_plus_rook() {
        let queen = PieceKind::Queen.ray_directions();
        assert_eq!(queen.len(), 8);
        for dir in PieceKind::Bishop
            .ray_directions()
            .iter()
            .chain(PieceKind::Rook.ray_directions())
        {
            assert!(queen.contains(dir), "queen is missing direction {dir:?}");
        }
    }

    #[test]
    fn only_sliders_have_rays() {
        for kind in PieceKind::ALL {
            assert_eq!(kind.is_slider(), !kind.ray_directions().is_empty());
        }
    }
}
