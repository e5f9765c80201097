//! Move notation typed by the player.
//!
//! A move is two algebraic squares separated by one space, e.g. `e2 e4`.
//! Files a..h map to 0..7 and ranks 1..8 map to 0..7.

use gambit_core::{Move, Square};

use crate::error::ConsoleError;

/// Parse `"e2 e4"` (case-insensitive, surrounding whitespace ignored) into a move.
pub fn parse_move(input: &str) -> Result<Move, ConsoleError> {
    let invalid = || ConsoleError::InvalidNotation {
        input: input.to_string(),
    };
    let normalized = input.trim().to_ascii_lowercase();
    let (from, to) = normalized.split_once(' ').ok_or_else(invalid)?;
    let from = Square::from_algebraic(from).ok_or_else(invalid)?;
    let to = Square::from_algebraic(to).ok_or_else(invalid)?;
    Ok(Move::new(from, to))
}
