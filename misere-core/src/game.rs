//! Game state across the three grids: moves, undo and the misère outcome.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumString, IntoStaticStr};
use tracing::{debug, instrument, trace};

use crate::grid::{Cell, Grid, LineResult, Mark};

/// Which of the three grids a move targets.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    StrumDisplay,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GridId {
    First,
    Second,
    Third,
}

impl GridId {
    /// All grids in display order.
    pub const ALL: [GridId; 3] = [GridId::First, GridId::Second, GridId::Third];

    /// Position of this grid in [`GridId::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        match self {
            GridId::First => 0,
            GridId::Second => 1,
            GridId::Third => 2,
        }
    }

    /// Convert from index (0, 1, 2) to GridId.
    #[inline]
    pub fn from_index(idx: usize) -> Option<GridId> {
        GridId::ALL.get(idx).copied()
    }
}

/// Which cell on which grid a move filled.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    pub grid: GridId,
    pub cell: Cell,
}

impl MoveRecord {
    pub fn new(grid: GridId, cell: Cell) -> MoveRecord {
        MoveRecord { grid, cell }
    }
}

/// Result of the whole game, recomputed from the boards and history on demand.
///
/// Displays as the status line shown to players.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize, Display)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Outcome {
    /// At least one grid can still take a move.
    #[display("")]
    InProgress,
    /// Every grid is complete and the latest move's grid holds a line.
    /// The mark owning that line loses.
    #[display("The loser is {mark}")]
    Loser { mark: Mark, line: [Cell; 3] },
    /// Every grid is complete and the latest move's grid holds no line.
    #[display("It's a tie.")]
    Tie,
}

impl Outcome {
    /// Check if the game is over.
    #[inline]
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// A move in a replayed sequence was refused.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Display, Error)]
#[display("move {} ({record}) was rejected", index + 1)]
pub struct ReplayError {
    /// Zero-based position of the refused move in the sequence.
    pub index: usize,
    pub record: MoveRecord,
}

/// Serializable read model for presentation layers.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub boards: [[Option<Mark>; 9]; 3],
    /// Completed line on each grid, decisive or not.
    pub lines: [Option<LineResult>; 3],
    pub history: Vec<MoveRecord>,
    pub turn: Mark,
    pub step: usize,
    pub latest: Option<MoveRecord>,
    pub outcome: Outcome,
    pub status: String,
}

/// The full game: three grids and the move history.
///
/// Invalid moves and undo on an empty history are ignored, leaving the state
/// untouched. The side to move is derived from the history length.
#[derive(Clone, PartialEq, Eq, Debug, Default, Hash)]
pub struct GameState {
    boards: [Grid; 3],
    history: Vec<MoveRecord>,
}

impl GameState {
    /// Create a new game: empty grids, `X` to move.
    pub fn new() -> GameState {
        GameState::default()
    }

    /// Build a game by applying `moves` in order from the initial state.
    #[instrument(level = "debug", skip_all, fields(moves = moves.len()))]
    pub fn replay(moves: &[MoveRecord]) -> Result<GameState, ReplayError> {
        let mut game = GameState::new();
        for (index, &record) in moves.iter().enumerate() {
            if !game.apply_move(record.grid, record.cell) {
                return Err(ReplayError { index, record });
            }
        }
        Ok(game)
    }

    /// Start over with empty grids.
    pub fn reset(&mut self) {
        debug!(discarded = self.history.len(), "game reset");
        *self = GameState::new();
    }

    /// Place the current player's mark. Returns whether the move was applied.
    ///
    /// The move is ignored if the grid already holds a line or the cell is
    /// occupied or out of range.
    pub fn apply_move(&mut self, grid: GridId, cell: Cell) -> bool {
        let mark = self.turn();
        let target = &mut self.boards[grid.index()];

        if let Some(result) = target.evaluate() {
            debug!(%grid, %cell, owner = %result.mark, "move ignored: grid already has a line");
            return false;
        }
        if !target.is_empty(cell) {
            debug!(%grid, %cell, "move ignored: cell occupied or out of range");
            return false;
        }

        target.set(cell, Some(mark));
        self.history.push(MoveRecord { grid, cell });
        trace!(%grid, %cell, %mark, step = self.history.len(), "move applied");
        true
    }

    /// Take back the latest move, returning it.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        let Some(record) = self.history.pop() else {
            debug!("undo ignored: no moves to take back");
            return None;
        };

        // With the record popped, the turn is back to whoever made it.
        let mark = self.turn();
        let grid = &mut self.boards[record.grid.index()];
        debug_assert_eq!(grid.get(record.cell), Some(mark));
        grid.set(record.cell, None);

        trace!(grid = %record.grid, cell = %record.cell, step = self.history.len(), "move undone");
        Some(record)
    }

    /// Compute the game outcome.
    ///
    /// The game is decided once every grid is complete. Only the grid holding
    /// the latest move is judged: a line there loses for its owner, otherwise
    /// the game is a tie, even if another grid holds a line.
    pub fn current_outcome(&self) -> Outcome {
        let Some(latest) = self.latest_grid() else {
            return Outcome::InProgress;
        };
        if !self.boards.iter().all(Grid::is_complete) {
            return Outcome::InProgress;
        }

        match self.grid(latest).evaluate() {
            Some(LineResult { mark, line }) => Outcome::Loser { mark, line },
            None => Outcome::Tie,
        }
    }

    /// The mark that moves next.
    #[inline]
    pub fn turn(&self) -> Mark {
        Mark::at_step(self.history.len())
    }

    /// Number of moves made so far.
    #[inline]
    pub fn step(&self) -> usize {
        self.history.len()
    }

    pub fn boards(&self) -> &[Grid; 3] {
        &self.boards
    }

    pub fn grid(&self, id: GridId) -> &Grid {
        &self.boards[id.index()]
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// The most recent move, if any.
    pub fn latest_move(&self) -> Option<MoveRecord> {
        self.history.last().copied()
    }

    /// The grid that received the most recent move, if any.
    pub fn latest_grid(&self) -> Option<GridId> {
        self.latest_move().map(|m| m.grid)
    }

    /// The completed line on one grid, whether or not it decides the game.
    pub fn grid_line(&self, id: GridId) -> Option<LineResult> {
        self.grid(id).evaluate()
    }

    /// Check if a grid has a line or no empty cell.
    pub fn is_grid_decided(&self, id: GridId) -> bool {
        self.grid(id).is_complete()
    }

    /// The outcome once decided, otherwise whose turn it is.
    pub fn status_line(&self) -> String {
        match self.current_outcome() {
            Outcome::InProgress => format!("{} to move", self.turn()),
            outcome => outcome.to_string(),
        }
    }

    /// Capture the current state for rendering.
    pub fn snapshot(&self) -> Snapshot {
        let outcome = self.current_outcome();
        Snapshot {
            boards: self.boards.map(|g| *g.cells()),
            lines: self.boards.map(|g| g.evaluate()),
            history: self.history.clone(),
            turn: self.turn(),
            step: self.step(),
            latest: self.latest_move(),
            outcome,
            status: outcome.to_string(),
        }
    }
}
