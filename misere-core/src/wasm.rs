//! WASM bindings for misere-core
//!
//! Provides a JavaScript-friendly API for the game state. The page calls
//! `applyMove`/`undo` on clicks and re-reads `snapshot()` to render.

use wasm_bindgen::prelude::*;

use crate::notation::{format_moves, parse_moves};
use crate::{Cell, GameState, GridId, Mark};

/// WASM-friendly wrapper around GameState
#[wasm_bindgen]
pub struct WasmGame {
    inner: GameState,
}

#[wasm_bindgen]
impl WasmGame {
    /// Create a new game
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmGame {
        WasmGame { inner: GameState::new() }
    }

    /// Create a game from move notation, e.g. "first:0 second:4"
    #[wasm_bindgen(js_name = fromMoves)]
    pub fn from_moves(text: &str) -> Result<WasmGame, JsError> {
        let moves = parse_moves(text)?;
        let inner = GameState::replay(&moves)?;
        Ok(WasmGame { inner })
    }

    /// Place the current player's mark on grid 0-2, cell 0-8.
    /// Returns false if the move was ignored.
    #[wasm_bindgen(js_name = applyMove)]
    pub fn apply_move(&mut self, grid: u8, cell: u8) -> bool {
        match GridId::from_index(grid as usize) {
            Some(grid) => self.inner.apply_move(grid, Cell(cell)),
            None => false,
        }
    }

    /// Take back the latest move. Returns false if there was none.
    pub fn undo(&mut self) -> bool {
        self.inner.undo().is_some()
    }

    /// Start a new game
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Player to move (1 = X, 2 = O)
    #[wasm_bindgen(js_name = currentPlayer)]
    pub fn current_player(&self) -> u8 {
        self.inner.turn().code()
    }

    /// Number of moves made
    #[wasm_bindgen(js_name = stepNumber)]
    pub fn step_number(&self) -> usize {
        self.inner.step()
    }

    /// Cells of grid 0-2: 0 (empty), 1 (X) or 2 (O). Empty for unknown grids.
    pub fn cells(&self, grid: u8) -> Vec<u8> {
        let Some(id) = GridId::from_index(grid as usize) else {
            return vec![];
        };
        self.inner
            .grid(id)
            .cells()
            .iter()
            .map(|c| c.map_or(0, Mark::code))
            .collect()
    }

    /// Completed line on grid 0-2 as three cell indices, empty if none
    #[wasm_bindgen(js_name = winningLine)]
    pub fn winning_line(&self, grid: u8) -> Vec<u8> {
        GridId::from_index(grid as usize)
            .and_then(|id| self.inner.grid_line(id))
            .map(|result| result.line.iter().map(|c| c.0).collect())
            .unwrap_or_default()
    }

    /// Game outcome as `{ result: "in_progress" | "loser" | "tie", mark?, line? }`
    pub fn outcome(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.current_outcome())?)
    }

    /// Status line: "The loser is X", "It's a tie." or ""
    pub fn status(&self) -> String {
        self.inner.current_outcome().to_string()
    }

    /// Full read model for rendering
    pub fn snapshot(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.snapshot())?)
    }

    /// Move history in notation form
    pub fn history(&self) -> String {
        format_moves(self.inner.history())
    }
}

impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}
