//! A single 3x3 grid and its line evaluation.
//!
//! ```text
//!   0 1 2
//!   3 4 5
//!   6 7 8
//! ```

use serde::{Deserialize, Serialize};
use strum::Display;

/// A player's mark. `First` moves first and is shown as `X`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize, Display)]
pub enum Mark {
    #[serde(rename = "X")]
    #[strum(serialize = "X")]
    First,
    #[serde(rename = "O")]
    #[strum(serialize = "O")]
    Second,
}

impl Mark {
    /// The mark that plays the move at zero-based position `step`.
    #[inline]
    pub fn at_step(step: usize) -> Mark {
        if step % 2 == 0 {
            Mark::First
        } else {
            Mark::Second
        }
    }

    /// Numeric code used by the JS binding (1 or 2).
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Mark::First => 1,
            Mark::Second => 2,
        }
    }
}

/// Cell index on a grid (0-8, row-major).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cell(pub u8);

impl Cell {
    /// Create a cell from row and column (0-2 each).
    #[inline]
    pub fn from_row_col(row: u8, col: u8) -> Cell {
        debug_assert!(row < 3 && col < 3);
        Cell(row * 3 + col)
    }

    /// Get the row (0-2).
    #[inline]
    pub fn row(self) -> u8 {
        self.0 / 3
    }

    /// Get the column (0-2).
    #[inline]
    pub fn col(self) -> u8 {
        self.0 % 3
    }

    /// Check if this is a valid cell (0-8).
    #[inline]
    pub fn is_valid(self) -> bool {
        self.0 < 9
    }

    /// Iterate over all 9 cells.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..9).map(Cell)
    }

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The 8 lines in evaluation order: rows, columns, then diagonals.
pub const LINES: [[Cell; 3]; 8] = [
    [Cell(0), Cell(1), Cell(2)],
    [Cell(3), Cell(4), Cell(5)],
    [Cell(6), Cell(7), Cell(8)],
    [Cell(0), Cell(3), Cell(6)],
    [Cell(1), Cell(4), Cell(7)],
    [Cell(2), Cell(5), Cell(8)],
    [Cell(0), Cell(4), Cell(8)],
    [Cell(2), Cell(4), Cell(6)],
];

/// A completed line: the mark holding it and its three cells.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct LineResult {
    pub mark: Mark,
    pub line: [Cell; 3],
}

impl LineResult {
    /// Check if the cell is part of this line.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.line.contains(&cell)
    }
}

/// One 3x3 grid. `None` is an empty cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub struct Grid {
    cells: [Option<Mark>; 9],
}

impl Grid {
    /// Create an empty grid.
    pub fn new() -> Grid {
        Grid { cells: [None; 9] }
    }

    /// Get the mark at a cell. Out-of-range cells read as empty.
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<Mark> {
        self.cells.get(cell.index()).copied().flatten()
    }

    /// Check if the cell exists and holds no mark.
    #[inline]
    pub fn is_empty(&self, cell: Cell) -> bool {
        matches!(self.cells.get(cell.index()), Some(None))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Option<Mark>; 9] {
        &self.cells
    }

    /// Number of marks placed on this grid.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Check if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Find the first completed line in [`LINES`] order.
    pub fn evaluate(&self) -> Option<LineResult> {
        LINES.iter().find_map(|&line| {
            let [a, b, c] = line;
            let mark = self.get(a)?;
            (self.get(b) == Some(mark) && self.get(c) == Some(mark))
                .then_some(LineResult { mark, line })
        })
    }

    /// A grid is complete once it has a line or no empty cell.
    pub fn is_complete(&self) -> bool {
        self.evaluate().is_some() || self.is_full()
    }

    /// Write a mark. Callers guarantee the cell is valid.
    pub(crate) fn set(&mut self, cell: Cell, mark: Option<Mark>) {
        self.cells[cell.index()] = mark;
    }

    /// Build a grid from a 9-character pattern: `X`, `O`, anything else empty.
    #[cfg(test)]
    pub(crate) fn from_pattern(pattern: &str) -> Grid {
        let mut grid = Grid::new();
        for (i, ch) in pattern.chars().filter(|c| !c.is_whitespace()).take(9).enumerate() {
            let mark = match ch {
                'X' => Some(Mark::First),
                'O' => Some(Mark::Second),
                _ => None,
            };
            grid.set(Cell(i as u8), mark);
        }
        grid
    }
}
