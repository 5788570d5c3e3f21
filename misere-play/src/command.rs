//! Commands typed at the game prompt.

use std::str::FromStr;

use derive_more::{Display, Error, From};
use misere_core::notation::{parse_cell, parse_grid};
use misere_core::{MoveRecord, ParseMoveError};

/// One line of player input.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Move(MoveRecord),
    Undo,
    New,
    History,
    Help,
    Quit,
}

/// Input that is not a command.
#[derive(Clone, PartialEq, Eq, Debug, Display, Error, From)]
pub enum CommandError {
    #[display("type a move like first:4, or help")]
    Empty,
    #[display("{_0}")]
    #[from]
    Move(ParseMoveError),
}

pub const HELP: &str = "\
Commands:
  <grid>:<cell>   place your mark, e.g. first:4 or 2:8 (also \"first 4\")
  undo, u         take back the last move
  new             start a new game
  history, h      list the moves so far
  help, ?         show this help
  quit, q         leave the game

Grids are first, second, third (or 1-3); cells are numbered 0-8:
  0 1 2
  3 4 5
  6 7 8

Whoever completes a line on the grid holding the final move loses.";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        match line.to_ascii_lowercase().as_str() {
            "" => return Err(CommandError::Empty),
            "undo" | "u" => return Ok(Command::Undo),
            "new" => return Ok(Command::New),
            "history" | "h" => return Ok(Command::History),
            "help" | "?" => return Ok(Command::Help),
            "quit" | "q" | "exit" => return Ok(Command::Quit),
            _ => {}
        }

        // "<grid> <cell>" is accepted alongside the notation form.
        let mut words = line.split_whitespace();
        if let (Some(grid), Some(cell), None) = (words.next(), words.next(), words.next()) {
            let record = MoveRecord::new(parse_grid(grid)?, parse_cell(cell)?);
            return Ok(Command::Move(record));
        }

        Ok(Command::Move(line.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use misere_core::{Cell, GridId};

    #[test]
    fn test_keywords() {
        assert_eq!("undo".parse(), Ok(Command::Undo));
        assert_eq!(" U ".parse(), Ok(Command::Undo));
        assert_eq!("new".parse(), Ok(Command::New));
        assert_eq!("h".parse(), Ok(Command::History));
        assert_eq!("?".parse(), Ok(Command::Help));
        assert_eq!("Quit".parse(), Ok(Command::Quit));
    }

    #[test]
    fn test_moves() {
        let expected = Command::Move(MoveRecord::new(GridId::Second, Cell(7)));
        assert_eq!("second:7".parse(), Ok(expected));
        assert_eq!("second 7".parse(), Ok(expected));
        assert_eq!("2 7".parse(), Ok(expected));
        assert_eq!("2:7".parse(), Ok(expected));
    }

    #[test]
    fn test_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "first 9".parse::<Command>(),
            Err(CommandError::Move(ParseMoveError::CellOutOfRange(9)))
        );
        assert_eq!(
            "jump".parse::<Command>(),
            Err(CommandError::Move(ParseMoveError::MissingSeparator("jump".to_string())))
        );
        assert_eq!(
            "fourth 1".parse::<Command>(),
            Err(CommandError::Move(ParseMoveError::UnknownGrid("fourth".to_string())))
        );
    }
}
