//! Browser bridge
//!
//! A `wasm-bindgen` handle for a JS host that owns the canvas, the GL
//! program and the animation frame loop. The host forwards key events and
//! frame timestamps, then draws the returned line list.

use wasm_bindgen::prelude::*;

use super::input::KeyState;
use crate::renderer;
use crate::settings::Settings;
use crate::sim::{FrameClock, FrameReport, GameState, tick};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        log::warn!("Logger already initialized: {e}");
    }
}

/// Game instance driven from JS
#[wasm_bindgen]
pub struct WebGame {
    state: GameState,
    settings: Settings,
    keys: KeyState,
    clock: FrameClock,
    last_report: FrameReport,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game; a missing seed uses the current time
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u64>) -> Result<WebGame, JsError> {
        let settings = Settings::default();
        let seed = seed
            .or(settings.seed)
            .unwrap_or_else(|| js_sys::Date::now() as u64);
        log::info!("Game initialized with seed: {}", seed);
        let state = GameState::new(seed, &settings)?;
        Ok(WebGame {
            state,
            settings,
            keys: KeyState::new(),
            clock: FrameClock::new(),
            last_report: FrameReport::default(),
        })
    }

    /// Forward a `keydown` (`pressed = true`) or `keyup` event
    pub fn key_changed(&mut self, key: &str, pressed: bool) {
        self.keys.key_changed(key, pressed);
    }

    /// Drop all held keys (window blur)
    pub fn release_keys(&mut self) {
        self.keys.clear();
    }

    /// Run one tick for an animation frame timestamp; returns the hit count
    pub fn frame(&mut self, timestamp_ms: f64) -> usize {
        let delta = self.clock.delta(timestamp_ms);
        let input = self.keys.snapshot();
        self.last_report = tick(
            &mut self.state,
            &input,
            delta,
            self.settings.max_frame_delta_ms,
            self.settings.margin,
        );
        self.last_report.hits.len()
    }

    /// Interleaved `x, y, r, g, b, a` line-list floats for every outline
    pub fn line_vertices(&self) -> Vec<f32> {
        renderer::line_vertices(&self.state)
            .iter()
            .flat_map(|v| v.position.into_iter().chain(v.color))
            .collect()
    }

    /// Last frame report as JSON
    pub fn report_json(&self) -> String {
        serde_json::to_string(&self.last_report).unwrap_or_default()
    }

    /// Clear color as `r, g, b, a`
    pub fn clear_color(&self) -> Vec<f32> {
        renderer::colors::BACKGROUND.to_vec()
    }

    pub fn line_width(&self) -> f32 {
        renderer::LINE_WIDTH
    }
}
