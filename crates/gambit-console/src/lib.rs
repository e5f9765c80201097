//! Console front end for gambit: notation parsing, board rendering and the
//! turn-by-turn game loop.

pub mod config;
pub mod error;
pub mod game;
pub mod notation;
pub mod render;
pub mod session;

pub use config::ConsoleConfig;
pub use error::{ConsoleError, MoveRejection};
pub use game::{Game, Turn};
pub use notation::parse_move;
pub use render::render;
pub use session::ConsoleSession;
