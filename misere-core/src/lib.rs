//! Triple-grid misère tic-tac-toe game logic.
//!
//! Two players alternate placing marks on any of three 3x3 grids. A grid
//! stops accepting moves once it holds a line. When every grid has a line or
//! is full, the grid that received the last move is judged: the owner of a
//! line there loses, otherwise the game is a tie.
//!
//! # Layout
//!
//! ```text
//! Cell indices (row-major, per grid):
//!   0 1 2
//!   3 4 5
//!   6 7 8
//!
//! Grids: first, second, third
//! ```
//!
//! # Example
//!
//! ```
//! use misere_core::{Cell, GameState, GridId, Mark, Outcome};
//!
//! let mut game = GameState::new();
//! assert!(game.apply_move(GridId::First, Cell(4)));
//! assert_eq!(game.turn(), Mark::Second);
//! assert_eq!(game.current_outcome(), Outcome::InProgress);
//!
//! game.undo();
//! assert_eq!(game, GameState::new());
//! ```

pub mod game;
pub mod grid;
pub mod notation;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use game::{GameState, GridId, MoveRecord, Outcome, ReplayError, Snapshot};
pub use grid::{Cell, Grid, LineResult, Mark, LINES};
pub use notation::{format_moves, parse_moves, ParseMoveError};
