//! Read-eval-print loop driving one game.

use std::io::{self, BufRead, Write};

use misere_core::{GameState, MoveRecord};
use tracing::{debug, instrument};

use crate::command::{Command, HELP};
use crate::display::{history_text, render};

/// Explain why the game ignored a move.
fn rejection(game: &GameState, record: MoveRecord) -> String {
    if game.grid_line(record.grid).is_some() {
        format!("The {} grid already has a line; play on another grid.", record.grid)
    } else {
        format!("Cell {} on the {} grid is taken.", record.cell, record.grid)
    }
}

/// Play until `quit` or end of input, redrawing after every change.
#[instrument(skip_all, fields(step = game.step()))]
pub fn run<R: BufRead, W: Write>(
    game: &mut GameState,
    input: R,
    output: &mut W,
    color: bool,
) -> io::Result<()> {
    writeln!(output, "{}", render(game, color))?;
    let mut lines = input.lines();

    loop {
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let command = match line?.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{e}")?;
                continue;
            }
        };

        match command {
            Command::Move(record) => {
                if !game.apply_move(record.grid, record.cell) {
                    writeln!(output, "{}", rejection(game, record))?;
                    continue;
                }
                debug!(%record, step = game.step(), "move played");
            }
            Command::Undo => match game.undo() {
                Some(record) => writeln!(output, "Took back {record}.")?,
                None => {
                    writeln!(output, "Nothing to undo.")?;
                    continue;
                }
            },
            Command::New => game.reset(),
            Command::History => {
                writeln!(output, "{}", history_text(game))?;
                continue;
            }
            Command::Help => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            Command::Quit => break,
        }

        writeln!(output, "{}", render(game, color))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use misere_core::{parse_moves, Cell, GridId, Mark, Outcome};

    fn session(game: &mut GameState, input: &str) -> String {
        let mut output = Vec::new();
        run(game, input.as_bytes(), &mut output, false).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_moves_and_undo() {
        let mut game = GameState::new();
        let out = session(&mut game, "first:4\nsecond 0\nundo\n");
        assert_eq!(game.history(), &[MoveRecord::new(GridId::First, Cell(4))]);
        assert_eq!(game.turn(), Mark::Second);
        assert!(out.contains("Took back second:0."));
        assert!(out.ends_with("O to move\n> \n"));
    }

    #[test]
    fn test_rejected_moves_leave_game_unchanged() {
        let mut game = GameState::new();
        let out = session(&mut game, "first:4\nfirst:4\n");
        assert!(out.contains("Cell 4 on the first grid is taken."));
        assert_eq!(game.step(), 1);

        let moves = parse_moves("first:0 second:0 first:1 second:1 first:2").unwrap();
        let mut game = GameState::replay(&moves).unwrap();
        let before = game.clone();
        let out = session(&mut game, "first:8\n");
        assert!(out.contains("The first grid already has a line"));
        assert_eq!(game, before);
    }

    #[test]
    fn test_bad_input_and_empty_undo() {
        let mut game = GameState::new();
        let out = session(&mut game, "\nfly\nfirst:12\nundo\n");
        assert!(out.contains("type a move like first:4, or help"));
        assert!(out.contains("expected <grid>:<cell>, got \"fly\""));
        assert!(out.contains("cell 12 is out of range (0-8)"));
        assert!(out.contains("Nothing to undo."));
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut game = GameState::new();
        session(&mut game, "third:0\nquit\nthird:1\n");
        assert_eq!(game.step(), 1);
    }

    #[test]
    fn test_new_history_help() {
        let mut game = GameState::new();
        let out = session(&mut game, "first:0\nhistory\nhelp\nnew\n");
        assert!(out.contains(" 1. X first:0"));
        assert!(out.contains("Commands:"));
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_final_move_reports_loser() {
        // Second and third grids full without a line, X's top row on the first
        // grid completed last.
        let moves = parse_moves(
            "first:0 first:3 first:1 first:4 \
             second:0 second:1 second:2 second:4 second:3 second:5 second:7 second:6 second:8 \
             third:0 third:1 third:2 third:4 third:3 third:5 third:7 third:6 third:8",
        )
        .unwrap();
        let mut game = GameState::replay(&moves).unwrap();
        let out = session(&mut game, "first:2\n");
        assert!(matches!(game.current_outcome(), Outcome::Loser { mark: Mark::First, .. }));
        assert!(out.contains("The loser is X"));
    }
}
