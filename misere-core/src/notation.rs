//! Text notation for moves: `<grid>:<cell>`, e.g. `first:4` or `2:8`.
//!
//! Grids are named `first`, `second`, `third` (any case) or numbered 1-3.
//! Cells are 0-8, row-major. Move sequences are separated by whitespace
//! and/or commas.

use std::fmt;
use std::str::FromStr;

use derive_more::{Display, Error};

use crate::game::{GridId, MoveRecord};
use crate::grid::Cell;

/// Why a move could not be parsed.
#[derive(Clone, PartialEq, Eq, Debug, Display, Error)]
pub enum ParseMoveError {
    #[display("expected <grid>:<cell>, got {_0:?}")]
    MissingSeparator(#[error(not(source))] String),
    #[display("unknown grid {_0:?} (expected first, second, third or 1-3)")]
    UnknownGrid(#[error(not(source))] String),
    #[display("invalid cell {_0:?}")]
    InvalidCell(#[error(not(source))] String),
    #[display("cell {_0} is out of range (0-8)")]
    CellOutOfRange(#[error(not(source))] u32),
}

/// Parse a grid name or 1-based number.
pub fn parse_grid(s: &str) -> Result<GridId, ParseMoveError> {
    let s = s.trim();
    match s {
        "1" => Ok(GridId::First),
        "2" => Ok(GridId::Second),
        "3" => Ok(GridId::Third),
        _ => s.parse().map_err(|_| ParseMoveError::UnknownGrid(s.to_string())),
    }
}

/// Parse a cell index (0-8).
pub fn parse_cell(s: &str) -> Result<Cell, ParseMoveError> {
    let s = s.trim();
    let value: u32 = s.parse().map_err(|_| ParseMoveError::InvalidCell(s.to_string()))?;
    if value >= 9 {
        return Err(ParseMoveError::CellOutOfRange(value));
    }
    Ok(Cell(value as u8))
}

impl FromStr for MoveRecord {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (grid, cell) = s
            .split_once(':')
            .ok_or_else(|| ParseMoveError::MissingSeparator(s.to_string()))?;
        Ok(MoveRecord::new(parse_grid(grid)?, parse_cell(cell)?))
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.grid, self.cell)
    }
}

/// Parse a sequence of moves separated by whitespace and/or commas.
pub fn parse_moves(s: &str) -> Result<Vec<MoveRecord>, ParseMoveError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

/// Format moves the way [`parse_moves`] reads them.
pub fn format_moves(moves: &[MoveRecord]) -> String {
    moves
        .iter()
        .map(MoveRecord::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
