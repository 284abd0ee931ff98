#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use tictactoe::{init_logging, GameLoop, TextInterface};

/// Two-player tic-tac-toe on the console. X moves first.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(
        long,
        help = "Log level written to stderr (overrides TICTACTOE_LOG, default warn)"
    )]
    log_level: Option<LevelFilter>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let mut game = GameLoop::new(TextInterface::stdio());
    game.run()?;
    Ok(())
}
