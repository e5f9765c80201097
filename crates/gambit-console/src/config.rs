//! Console presentation settings.

/// Knobs for how the console game talks to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Clear the terminal before each board render.
    pub clear_screen: bool,
    /// Print rank numbers and file letters around the board.
    pub show_coordinates: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            clear_screen: true,
            show_coordinates: true,
        }
    }
}
