//! WASM bindings for a browser front end

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;
use crate::{describe_round, GameSession, Move, SeededRng, Strategy};

/// A game session held on the JS side
#[wasm_bindgen]
pub struct WasmSession {
    inner: GameSession<SeededRng>,
}

#[wasm_bindgen]
impl WasmSession {
    /// Start a session from a 32-byte seed
    #[wasm_bindgen(constructor)]
    pub fn new(seed: &[u8]) -> Result<WasmSession, JsError> {
        let seed_arr: [u8; 32] = seed.try_into()
            .map_err(|_| JsError::new("Seed must be exactly 32 bytes"))?;
        Ok(WasmSession { inner: GameSession::from_seed(&seed_arr) })
    }

    /// Start a session seeded from `Math.random()`
    pub fn random() -> WasmSession {
        let mut seed = [0u8; 32];
        for byte in seed.iter_mut() {
            *byte = (js_sys::Math::random() * 256.0) as u8;
        }
        WasmSession { inner: GameSession::from_seed(&seed) }
    }

    /// Play one round. `symbol` is "R", "P", "S" or a full move name.
    ///
    /// Returns the serialized RoundResult.
    pub fn play(&mut self, symbol: &str) -> Result<JsValue, JsError> {
        let result = self.inner.play_symbol(symbol)
            .map_err(|e| JsError::new(&e.to_string()))?;
        serde_wasm_bindgen::to_value(&result)
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    /// Scoreboard as `{player_wins, computer_wins, ties}`
    pub fn totals(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.inner.totals())
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    /// Scoreboard as a JSON string
    pub fn totals_json(&self) -> Result<String, JsError> {
        serde_json::to_string(&self.inner.totals())
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }
}

/// Describe an arbitrary pairing, e.g. for a rules panel
#[wasm_bindgen]
pub fn describe_moves(player: &str, computer: &str) -> Result<String, JsError> {
    let player: Move = player.parse().map_err(|e: crate::EngineError| JsError::new(&e.to_string()))?;
    let computer: Move = computer.parse().map_err(|e: crate::EngineError| JsError::new(&e.to_string()))?;
    Ok(describe_round(player, computer))
}

#[derive(serde::Serialize)]
struct StrategyInfo {
    id: String,
    name: String,
    description: String,
}

/// Get all computer strategies
#[wasm_bindgen]
pub fn get_strategy_types() -> Result<JsValue, JsError> {
    let types: Vec<StrategyInfo> = Strategy::ALL
        .iter()
        .map(|s| StrategyInfo {
            id: format!("{:?}", s),
            name: s.name().to_string(),
            description: s.describe().to_string(),
        })
        .collect();

    serde_wasm_bindgen::to_value(&types)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
