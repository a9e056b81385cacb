//! WebAssembly bindings for the Jokerball engine.
//!
//! This module exposes the game to a browser view through wasm-bindgen. Every
//! transition returns the new snapshot as JSON so the page can redraw from it.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use crate::actions::GameAction;
#[cfg(feature = "wasm")]
use crate::game::{GameError, GameState};

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

#[cfg(feature = "wasm")]
fn to_js_error(e: GameError) -> JsValue {
    JsValue::from_str(&format!("Action failed: {}", e))
}

/// WASM-exposed game wrapper
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub struct WasmGame {
    state: GameState,
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl WasmGame {
    /// Create a new game. Pass a seed for reproducible dice.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u64>) -> Result<WasmGame, JsValue> {
        let state = match seed {
            Some(seed) => GameState::with_seed(seed),
            None => GameState::new(),
        }
        .map_err(to_js_error)?;

        Ok(WasmGame { state })
    }

    /// Get the current snapshot as JSON
    #[wasm_bindgen(js_name = getSnapshot)]
    pub fn get_snapshot(&self) -> String {
        serde_json::to_string(&self.state.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Get the current player ID
    #[wasm_bindgen(js_name = getCurrentPlayer)]
    pub fn get_current_player(&self) -> u8 {
        self.state.current_player()
    }

    /// Get the hex indices the player may click
    #[wasm_bindgen(js_name = getSelectable)]
    pub fn get_selectable(&self) -> Vec<usize> {
        self.state.selectable().to_vec()
    }

    /// Get the dice as [checker, ball] (empty before the first roll)
    #[wasm_bindgen(js_name = getDice)]
    pub fn get_dice(&self) -> Vec<u8> {
        self.state
            .dice()
            .map(|d| vec![d.checker, d.ball])
            .unwrap_or_default()
    }

    /// The OK button. Returns the new snapshot JSON.
    #[wasm_bindgen(js_name = pressOk)]
    pub fn press_ok(&mut self) -> Result<String, JsValue> {
        self.apply(GameAction::PressOk)
    }

    /// A click on a highlighted hex. Returns the new snapshot JSON.
    #[wasm_bindgen(js_name = selectSpace)]
    pub fn select_space(&mut self, index: usize) -> Result<String, JsValue> {
        self.apply(GameAction::SelectSpace(index))
    }

    /// Put back the picked checker. Returns the new snapshot JSON.
    #[wasm_bindgen(js_name = unselectChecker)]
    pub fn unselect_checker(&mut self) -> Result<String, JsValue> {
        self.apply(GameAction::UnselectChecker)
    }

    /// Apply an action from JSON, returns events JSON or error
    #[wasm_bindgen(js_name = applyAction)]
    pub fn apply_action(&mut self, action_json: &str) -> Result<String, JsValue> {
        let action: GameAction = serde_json::from_str(action_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid action JSON: {}", e)))?;

        let events = self.state.apply_action(action).map_err(to_js_error)?;
        Ok(serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string()))
    }

    /// Check if the game is finished
    #[wasm_bindgen(js_name = isFinished)]
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Get the winner (if game is finished)
    #[wasm_bindgen(js_name = getWinner)]
    pub fn get_winner(&self) -> Option<u8> {
        self.state.winner()
    }
}

#[cfg(feature = "wasm")]
impl WasmGame {
    fn apply(&mut self, action: GameAction) -> Result<String, JsValue> {
        self.state.apply_action(action).map_err(to_js_error)?;
        Ok(self.get_snapshot())
    }
}
