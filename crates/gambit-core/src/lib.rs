//! Chess rules: board representation, per-piece move generation, check
//! detection and move application.
//!
//! Squares are zero-based (file, rank) pairs with a1 at `(0, 0)`.

mod board;
mod check;
mod chess_move;
mod error;
mod layout;
mod make_move;
mod movegen;
mod piece;
mod piece_kind;
mod side;
mod square;
mod square_set;
mod tiles;

pub use board::Board;
pub use chess_move::Move;
pub use error::{BoardError, LayoutError};
pub use layout::STARTING_LAYOUT;
pub use movegen::{attacks, legal_destinations};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use side::Side;
pub use square::Square;
pub use square_set::SquareSet;
pub use tiles::Tiles;
