//! Interactive prompt loop for two players sharing one terminal.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use gambit_core::Side;

use crate::config::ConsoleConfig;
use crate::error::ConsoleError;
use crate::game::{Game, Turn};
use crate::notation::parse_move;
use crate::render::{CLEAR_SCREEN, render};

/// Prompt shown before every move.
pub const PROMPT: &str = "Please enter your move in the format 'e2 e4': ";

/// A console game reading moves from `R` and writing the board to `W`.
pub struct ConsoleSession<R, W> {
    input: R,
    output: W,
    config: ConsoleConfig,
    game: Game,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    /// Start a session on a new game.
    pub fn new(input: R, output: W, config: ConsoleConfig) -> Self {
        Self::with_game(input, output, config, Game::new())
    }

    /// Start a session on an existing game.
    pub fn with_game(input: R, output: W, config: ConsoleConfig, game: Game) -> Self {
        Self {
            input,
            output,
            config,
            game,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run until checkmate, `quit` or end of input.
    ///
    /// Returns the winner if the game ended in checkmate.
    pub fn run(&mut self) -> Result<Option<Side>, ConsoleError> {
        info!(side = %self.game.side_to_move(), "game started");
        self.show_board()?;
        if let Some(winner) = self.game.winner() {
            writeln!(self.output, "Checkmate! {winner} wins.")?;
            return Ok(Some(winner));
        }

        let mut line = String::new();
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                info!("input closed");
                return Ok(None);
            }
            let command = line.trim();
            if command.is_empty() {
                continue;
            }
            debug!(input = command, "received move");
            if command.eq_ignore_ascii_case("quit") {
                info!("player quit");
                return Ok(None);
            }

            let mv = match parse_move(command) {
                Ok(mv) => mv,
                Err(err) => {
                    warn!(%err, "rejected input");
                    writeln!(self.output, "Invalid move")?;
                    continue;
                }
            };

            match self.game.play(mv.from(), mv.to()) {
                Err(rejection) => {
                    warn!(%rejection, mv = %mv, "rejected move");
                    writeln!(self.output, "Invalid move: {rejection}")?;
                }
                Ok(Turn::Ongoing { check }) => {
                    self.show_board()?;
                    if check {
                        writeln!(self.output, "Check!")?;
                    }
                }
                Ok(Turn::Checkmate { winner }) => {
                    self.show_board()?;
                    writeln!(self.output, "Checkmate! {winner} wins.")?;
                    info!(%winner, "game over");
                    return Ok(Some(winner));
                }
            }
        }
    }

    fn show_board(&mut self) -> Result<(), ConsoleError> {
        if self.config.clear_screen {
            write!(self.output, "{CLEAR_SCREEN}")?;
        }
        let board = render(&self.game.board().tiles(), &self.config);
        write!(self.output, "{board}")?;
        writeln!(self.output, "Side to move: {}", self.game.side_to_move())?;
        Ok(())
    }
}
