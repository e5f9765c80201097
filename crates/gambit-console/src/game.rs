//! Turn sequencing on top of the core rules.

use tracing::debug;

use gambit_core::{Board, BoardError, Side, Square};

use crate::error::MoveRejection;

/// Result of a half-move that was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// The game goes on; `check` is set when the side now to move is in check.
    Ongoing { check: bool },
    /// The side now to move is checkmated.
    Checkmate { winner: Side },
}

/// A two-player game: the board, whose turn it is, and whether it is over.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Side,
    winner: Option<Side>,
}

impl Game {
    /// A new game from the starting position with White to move.
    pub fn new() -> Game {
        Game {
            board: Board::starting_position(),
            side_to_move: Side::White,
            winner: None,
        }
    }

    /// Resume from an arbitrary position.
    ///
    /// Both kings must be present and the side not on move must be out of
    /// check. If `side_to_move` is already mated the game starts finished.
    pub fn from_board(board: Board, side_to_move: Side) -> Result<Game, BoardError> {
        board.validate()?;
        if board.is_in_check(!side_to_move) {
            return Err(BoardError::OpponentInCheck {
                side: !side_to_move,
            });
        }
        let winner = board.is_checkmate(side_to_move).then_some(!side_to_move);
        Ok(Game {
            board,
            side_to_move,
            winner,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// The winning side once the game has ended in checkmate.
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Play the piece on `from` to `to` for the side to move.
    ///
    /// On success the turn passes to the opponent and the returned [`Turn`]
    /// reports whether they are in check or mated. A rejected move leaves
    /// the game untouched.
    pub fn play(&mut self, from: Square, to: Square) -> Result<Turn, MoveRejection> {
        if self.winner.is_some() {
            return Err(MoveRejection::GameOver);
        }
        let piece = self
            .board
            .piece_at(from)
            .ok_or(MoveRejection::EmptySquare { square: from })?;
        if !piece.is(self.side_to_move) {
            return Err(MoveRejection::NotYourPiece {
                square: from,
                owner: piece.side(),
            });
        }
        if !self.board.legal_destinations(from).contains(to) {
            return Err(MoveRejection::Illegal { from, to });
        }
        if self.board.exposes_king(from, to) {
            return Err(MoveRejection::ExposesKing);
        }
        if !self.board.apply_move(from, to) {
            return Err(MoveRejection::Illegal { from, to });
        }

        let mover = self.side_to_move;
        self.side_to_move = !mover;
        debug!(side = %mover, %from, %to, "half-move played");

        if self.board.is_checkmate(self.side_to_move) {
            self.winner = Some(mover);
            return Ok(Turn::Checkmate { winner: mover });
        }
        Ok(Turn::Ongoing {
            check: self.board.is_in_check(self.side_to_move),
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
