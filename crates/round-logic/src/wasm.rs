//! WASM bindings for the game screen

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::{ResolverConfig, RevealTimer, RoundResolver, MOVES};

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// One game screen's worth of state
///
/// Typical use from JS:
/// ```js
/// const round = game.pick(0);
/// if (round && round.timer) {
///   setTimeout(() => game.reveal(round.timer.round), round.timer.delayMs);
/// }
/// ```
#[wasm_bindgen]
pub struct Game {
    resolver: RoundResolver,
}

#[wasm_bindgen]
impl Game {
    /// Create a game. `config_json` is a ResolverConfig JSON, e.g.
    /// `{"shakeDurationMs": 1000}`; omit for the standard config.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<Game, JsError> {
        let config = match config_json {
            Some(json) => ResolverConfig::from_json(&json)
                .map_err(|e| JsError::new(&e.to_string()))?,
            None => ResolverConfig::standard(),
        };
        let resolver = RoundResolver::new(config)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Game { resolver })
    }

    /// Button press. Returns the started round, or `null` while shaking.
    pub fn pick(&mut self, index: usize) -> Result<JsValue, JsError> {
        match self.resolver.notify_player_choice(index) {
            Ok(Some(resolution)) => to_js(&resolution),
            Ok(None) => Ok(JsValue::NULL),
            Err(e) => Err(JsError::new(&e.to_string())),
        }
    }

    /// Fire the reveal timer for `round`. Returns false if it was stale.
    pub fn reveal(&mut self, round: u32) -> bool {
        let delay_ms = self.resolver.config().shake_duration_ms;
        self.resolver.reveal(RevealTimer { round, delay_ms })
    }

    /// Current snapshot for rendering
    pub fn snapshot(&self) -> Result<JsValue, JsError> {
        to_js(&self.resolver.snapshot())
    }

    /// Register a callback that receives a snapshot after every change
    pub fn subscribe(&mut self, callback: js_sys::Function) -> f64 {
        let id = self.resolver.subscribe(move |snapshot| {
            if let Ok(value) = serde_wasm_bindgen::to_value(snapshot) {
                // A throwing listener must not break the game
                let _ = callback.call1(&JsValue::NULL, &value);
            }
        });
        id as f64
    }

    pub fn unsubscribe(&mut self, id: f64) -> bool {
        self.resolver.unsubscribe(id as u64)
    }
}

#[derive(serde::Serialize)]
struct MoveInfo {
    index: usize,
    name: &'static str,
    glyph: &'static str,
    beats: &'static str,
}

/// Button table in display order
#[wasm_bindgen(js_name = getMoves)]
pub fn get_moves() -> Result<JsValue, JsError> {
    let moves: Vec<MoveInfo> = MOVES
        .iter()
        .map(|m| MoveInfo {
            index: m.index(),
            name: m.name(),
            glyph: m.glyph(),
            beats: m.beats().name(),
        })
        .collect();

    to_js(&moves)
}
