//! Command-line interface for the terminal game.

use clap::Parser;

/// Triple-grid misère tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "misere")]
#[command(about = "Play triple-grid misere tic-tac-toe: complete a line and you may lose", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Start from a position reached by these moves, e.g. "first:4 second:0"
    #[arg(long)]
    pub moves: Option<String>,

    /// Disable ANSI colours
    #[arg(long)]
    pub plain: bool,
}
