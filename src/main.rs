use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gambit_console::{ConsoleConfig, ConsoleSession};

/// Two-player console chess.
#[derive(Debug, Parser)]
#[command(name = "gambit", version)]
struct Cli {
    /// Do not clear the terminal before drawing the board.
    #[arg(long)]
    no_clear: bool,

    /// Draw the board without rank numbers and file letters.
    #[arg(long)]
    no_coordinates: bool,

    /// Log filter used when RUST_LOG is unset (e.g. "debug", "gambit_core=trace").
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = ConsoleConfig {
        clear_screen: !cli.no_clear,
        show_coordinates: !cli.no_coordinates,
    };
    info!(?config, "gambit starting");

    let mut session = ConsoleSession::new(io::stdin().lock(), io::stdout().lock(), config);
    match session.run()? {
        Some(winner) => info!(%winner, "game finished"),
        None => info!("game abandoned"),
    }
    Ok(())
}
