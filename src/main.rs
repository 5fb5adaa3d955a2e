//! VX Game entry point
//!
//! On the web the library's `WebGame` handle is driven by the JS host. The
//! native binary runs the simulation headless with a scripted pilot and
//! logs every collision.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use vx_game::Settings;
    use vx_game::sim::{FrameClock, GameState, TickInput, tick};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("VX Game (native) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let seed = settings.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    log::info!("Game initialized with seed: {}", seed);

    let mut state = match GameState::new(seed, &settings) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Failed to build game state: {e}");
            return;
        }
    };
    let mut clock = FrameClock::new();
    let frame_ms = 1000.0 / 60.0;
    let frames = 600;
    let mut total_hits = 0;

    for frame in 0..frames {
        // Thrust for a second, then circle to the right
        let input = TickInput {
            thrust: frame % 120 < 60,
            turn_right: frame >= 60,
            ..Default::default()
        };
        let delta = clock.delta(frame as f64 * frame_ms);
        let report = tick(
            &mut state,
            &input,
            delta,
            settings.max_frame_delta_ms,
            settings.margin,
        );
        total_hits += report.hits.len();
    }

    log::info!(
        "Simulated {} frames: ship at ({:.3}, {:.3}), {} collisions",
        frames,
        state.ship.pos.x,
        state.ship.pos.y,
        total_hits
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}
