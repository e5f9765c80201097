//! Console adapter errors.

use gambit_core::{Side, Square};

/// Errors raised while talking to the player.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// The input is not of the form `e2 e4`.
    #[error("invalid move notation: \"{input}\"")]
    InvalidNotation {
        /// The rejected input line.
        input: String,
    },

    /// Reading from or writing to the terminal failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

/// Reasons a well-formed move is refused by the turn sequencer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejection {
    /// The game already ended.
    #[error("the game is over")]
    GameOver,
    /// There is no piece on the origin square.
    #[error("there is no piece on {square}")]
    EmptySquare {
        /// The empty origin square.
        square: Square,
    },
    /// The piece on the origin square belongs to the side not on move.
    #[error("the piece on {square} belongs to {owner}")]
    NotYourPiece {
        /// The origin square.
        square: Square,
        /// Side owning the piece.
        owner: Side,
    },
    /// The move would leave the mover's own king in check.
    #[error("that move leaves your king in check")]
    ExposesKing,
    /// The destination is not among the piece's legal destinations.
    #[error("the piece on {from} cannot move to {to}")]
    Illegal {
        /// Origin square.
        from: Square,
        /// Requested destination.
        to: Square,
    },
}
