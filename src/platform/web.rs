//! Browser bindings
//!
//! The JS host owns the canvas, the pose classifier and the frame loop; it
//! calls into `WebGame` and draws from the JSON snapshot.

use wasm_bindgen::prelude::*;

use crate::game::CatchGame;
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
}

fn to_js<E: std::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct WebGame {
    game: CatchGame,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game, optionally with a JSON tuning override
    #[wasm_bindgen(constructor)]
    pub fn new(tuning_json: Option<String>) -> Result<WebGame, JsValue> {
        let tuning = match tuning_json {
            Some(json) => Tuning::from_json(&json).map_err(to_js)?,
            None => Tuning::default(),
        };
        let seed = js_sys::Date::now() as u64;
        Ok(Self {
            game: CatchGame::with_seed(seed, tuning).map_err(to_js)?,
        })
    }

    pub fn start(&mut self) {
        self.game.start();
    }

    pub fn stop(&mut self) {
        self.game.stop();
    }

    #[wasm_bindgen(js_name = onPoseDetected)]
    pub fn on_pose_detected(&mut self, label: &str) -> bool {
        self.game.on_pose_detected(label)
    }

    /// Advance one frame; returns the frame's events as JSON
    pub fn update(&mut self) -> Result<String, JsValue> {
        let events = self.game.update();
        serde_json::to_string(&events).map_err(to_js)
    }

    /// Snapshot of everything the renderer draws, as JSON
    #[wasm_bindgen(js_name = viewJson)]
    pub fn view_json(&self) -> Result<String, JsValue> {
        self.game.view().to_json().map_err(to_js)
    }

    #[wasm_bindgen(getter)]
    pub fn score(&self) -> f64 {
        self.game.session().score as f64
    }

    #[wasm_bindgen(getter)]
    pub fn level(&self) -> u32 {
        self.game.session().level
    }

    #[wasm_bindgen(getter)]
    pub fn playing(&self) -> bool {
        self.game.session().is_playing()
    }
}
