//! WASM bindings for fox-geese-core
//!
//! Provides a JavaScript-friendly API over [`GameState`] for browser hosts.

use wasm_bindgen::prelude::*;

use crate::{ClickOutcome, GameState, GameStatus, Occupant, Side};

/// WASM-friendly wrapper around GameState
#[wasm_bindgen]
pub struct WasmGame {
    inner: GameState,
}

#[wasm_bindgen]
impl WasmGame {
    /// Start a new game
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmGame {
        WasmGame { inner: GameState::new() }
    }

    /// Select a piece. Returns true if the selection was accepted.
    #[wasm_bindgen(js_name = selectCell)]
    pub fn select_cell(&mut self, row: u8, col: u8) -> bool {
        self.inner.select_cell(row, col).is_ok()
    }

    /// Move the selected piece. Returns true if the move was applied.
    #[wasm_bindgen(js_name = applyMove)]
    pub fn apply_move(&mut self, row: u8, col: u8) -> bool {
        self.inner.apply_move_at(row, col).is_ok()
    }

    /// Pointer-style click: "selected", "moved", "deselected" or "rejected"
    pub fn click(&mut self, row: u8, col: u8) -> String {
        match self.inner.click(row, col) {
            Ok(ClickOutcome::Selected(_)) => "selected".to_string(),
            Ok(ClickOutcome::Moved(_)) => "moved".to_string(),
            Ok(ClickOutcome::Deselected) => "deselected".to_string(),
            Err(_) => "rejected".to_string(),
        }
    }

    /// Start over from the initial layout
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// 49 cell codes in row-major order: 0 empty, 1 fox, 2 goose, 3 out of play
    pub fn cells(&self) -> Vec<u8> {
        self.inner
            .board()
            .rows()
            .into_iter()
            .flatten()
            .map(|occupant| match occupant {
                Occupant::Empty => 0,
                Occupant::Fox => 1,
                Occupant::Goose => 2,
                Occupant::OutOfPlay => 3,
            })
            .collect()
    }

    /// Side to move: "fox" or "geese"
    #[wasm_bindgen(js_name = toMove)]
    pub fn to_move(&self) -> String {
        side_name(self.inner.to_move()).to_string()
    }

    /// Legal destinations of the selection as [row, col, row, col, ...]
    #[wasm_bindgen(js_name = legalDestinations)]
    pub fn legal_destinations(&self) -> Vec<u8> {
        self.inner
            .legal_destinations()
            .iter()
            .flat_map(|cell| [cell.row(), cell.col()])
            .collect()
    }

    /// Game result: "ongoing", "fox_wins" or "geese_wins"
    pub fn result(&self) -> String {
        match self.inner.status() {
            GameStatus::InProgress => "ongoing".to_string(),
            GameStatus::Won(side) => format!("{}_wins", side_name(side)),
        }
    }

    /// Geese still on the board
    #[wasm_bindgen(js_name = gooseCount)]
    pub fn goose_count(&self) -> usize {
        self.inner.goose_count()
    }

    /// Full state as a JS object (see `Snapshot`)
    pub fn snapshot(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.snapshot()).unwrap_or(JsValue::NULL)
    }
}

impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}

fn side_name(side: Side) -> &'static str {
    match side {
        Side::Fox => "fox",
        Side::Geese => "geese",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_cells() {
        let game = WasmGame::new();
        let cells = game.cells();
        assert_eq!(cells.len(), 49);
        assert_eq!(cells[0], 3);
        assert_eq!(cells[3 * 7 + 3], 1);
        assert_eq!(cells.iter().filter(|&&c| c == 2).count(), 13);
        assert_eq!(game.to_move(), "geese");
        assert_eq!(game.result(), "ongoing");
    }

    #[test]
    fn test_click_sequence() {
        let mut game = WasmGame::new();
        assert_eq!(game.click(3, 3), "rejected");
        assert_eq!(game.click(4, 0), "selected");
        assert_eq!(game.legal_destinations(), vec![3, 0, 3, 1]);
        assert_eq!(game.click(3, 1), "moved");
        assert_eq!(game.to_move(), "fox");
        assert_eq!(game.click(0, 0), "rejected");
        assert_eq!(game.click(3, 3), "selected");
        assert_eq!(game.click(0, 0), "deselected");
        assert!(game.legal_destinations().is_empty());
    }

    #[test]
    fn test_select_apply_and_reset() {
        let mut game = WasmGame::new();
        assert!(!game.apply_move(3, 0));
        assert!(game.select_cell(4, 0));
        assert!(game.apply_move(3, 0));
        assert_eq!(game.cells()[3 * 7], 2);
        assert_eq!(game.goose_count(), 13);
        game.reset();
        assert_eq!(game.cells(), WasmGame::new().cells());
    }
}
