//! Text rendering of the board.

use std::fmt::Write;

use gambit_core::Tiles;

use crate::config::ConsoleConfig;

/// ANSI sequence that clears the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Render the board with rank 8 at the top, one `|`-separated cell per square.
///
/// White pieces are uppercase (K, Q, R, B, N, P), Black lowercase, and
/// empty squares blank.
pub fn render(tiles: &Tiles, config: &ConsoleConfig) -> String {
    let mut out = String::new();
    for rank in (0u8..8).rev() {
        if config.show_coordinates {
            let _ = write!(out, "{} ", rank + 1);
        }
        out.push('|');
        for cell in tiles.rank(rank) {
            out.push(cell.map_or(' ', |piece| piece.glyph()));
            out.push('|');
        }
        out.push('\n');
    }
    if config.show_coordinates {
        out.push_str("   a b c d e f g h\n");
    }
    out
}
