//! Triple-grid misère tic-tac-toe in the terminal.
//!
//! Renders the three grids, reads commands from stdin and reports the loser
//! once every grid is complete.

mod cli;
mod command;
mod display;
mod repl;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use misere_core::{parse_moves, GameState};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut game = match cli.moves.as_deref() {
        Some(text) => {
            let moves = parse_moves(text).context("invalid --moves")?;
            GameState::replay(&moves).context("could not replay --moves")?
        }
        None => GameState::new(),
    };
    info!(step = game.step(), "starting game");

    println!("Triple-grid misère tic-tac-toe. Type help for commands.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl::run(&mut game, stdin.lock(), &mut stdout, !cli.plain).context("terminal I/O failed")?;

    info!(step = game.step(), outcome = ?game.current_outcome(), "game closed");
    Ok(())
}
