//! Per-frame simulation tick
//!
//! Clamp the frame delta, apply the latest intent snapshot to the ship,
//! move every body, then check and report collisions.

use serde::{Deserialize, Serialize};

use super::collision::{CollisionHit, check_collisions};
use super::state::{Body, GameState, Ship, Turn};

/// Intent snapshot from the input collector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust: bool,
}

impl TickInput {
    /// Turn intent; left wins when both are held
    pub fn turn(&self) -> Turn {
        if self.turn_left {
            Turn::Left
        } else if self.turn_right {
            Turn::Right
        } else {
            Turn::None
        }
    }
}

/// Copy an intent snapshot onto the ship
pub fn apply_input(ship: &mut Ship, input: &TickInput) {
    ship.turn = input.turn();
    ship.thrust = input.thrust;
}

/// Cap `delta_ms` at `max_ms`; the flag is true when clamping happened
pub fn clamp_delta(delta_ms: f64, max_ms: f64) -> (f64, bool) {
    if delta_ms > max_ms {
        log::warn!("Frame delta too big: {delta_ms:.1}ms, clamping to {max_ms}ms");
        (max_ms, true)
    } else {
        (delta_ms, false)
    }
}

/// Turns frame timestamps into deltas
///
/// The first frame is measured from 0, so it is usually large and gets
/// clamped by [`clamp_delta`].
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_frame: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds since the previous timestamp
    pub fn delta(&mut self, timestamp_ms: f64) -> f64 {
        let delta = timestamp_ms - self.last_frame.unwrap_or(0.0);
        self.last_frame = Some(timestamp_ms);
        delta
    }

    pub fn reset(&mut self) {
        self.last_frame = None;
    }
}

/// Result of one tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    /// Tick counter after this tick
    pub tick: u64,
    /// Delta actually simulated (after clamping)
    pub delta_ms: f64,
    /// The incoming delta was over the cap
    pub clamped: bool,
    /// Every enemy touching the ship, in enemy order
    pub hits: Vec<CollisionHit>,
}

impl FrameReport {
    pub fn is_hit(&self) -> bool {
        !self.hits.is_empty()
    }
}

/// Move every body by `delta_ms` (enemies first, then the ship)
pub fn move_all(state: &mut GameState, delta_ms: f64, margin: f64) {
    for enemy in &mut state.enemies {
        enemy.advance(delta_ms, margin);
    }
    state.ship.advance(delta_ms, margin);
}

/// Advance the game by one frame
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    delta_ms: f64,
    max_delta_ms: f64,
    margin: f64,
) -> FrameReport {
    let (delta_ms, clamped) = clamp_delta(delta_ms, max_delta_ms);

    apply_input(&mut state.ship, input);
    move_all(state, delta_ms, margin);
    state.time_ticks += 1;

    let hits = check_collisions(&state.ship, &state.enemies);
    for hit in &hits {
        log::info!(
            "Ship hit by {} enemy {} at tick {}",
            hit.kind.as_str(),
            hit.enemy_id,
            state.time_ticks
        );
    }

    FrameReport {
        tick: state.time_ticks,
        delta_ms,
        clamped,
        hits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{ARENA_MARGIN, MAX_FRAME_DELTA_MS};
    use crate::settings::Settings;
    use crate::sim::shapes::{EnemyKind, ShapeLibrary};
    use crate::sim::state::Enemy;
    use glam::DVec2;
    use std::sync::Arc;

    fn run(state: &mut GameState, input: &TickInput, delta_ms: f64) -> FrameReport {
        tick(state, input, delta_ms, MAX_FRAME_DELTA_MS, ARENA_MARGIN)
    }

    #[test]
    fn test_input_turn_priority() {
        let both = TickInput {
            turn_left: true,
            turn_right: true,
            thrust: false,
        };
        assert_eq!(both.turn(), Turn::Left);

        let right = TickInput {
            turn_right: true,
            ..Default::default()
        };
        assert_eq!(right.turn(), Turn::Right);
        assert_eq!(TickInput::default().turn(), Turn::None);
    }

    #[test]
    fn test_clamp_delta() {
        assert_eq!(clamp_delta(16.0, 50.0), (16.0, false));
        assert_eq!(clamp_delta(50.0, 50.0), (50.0, false));
        assert_eq!(clamp_delta(250.0, 50.0), (50.0, true));
    }

    #[test]
    fn test_frame_clock() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.delta(1000.0), 1000.0);
        assert_eq!(clock.delta(1016.0), 16.0);
        assert_eq!(clock.delta(1050.0), 34.0);
        clock.reset();
        assert_eq!(clock.delta(2000.0), 2000.0);
    }

    #[test]
    fn test_tick_applies_input_and_counts() {
        let mut state = GameState::new(12345, &Settings::default()).unwrap();
        let input = TickInput {
            turn_right: true,
            thrust: true,
            ..Default::default()
        };

        let report = run(&mut state, &input, 10.0);
        assert_eq!(report.tick, 1);
        assert_eq!(state.time_ticks, 1);
        assert!(state.ship.thrust);
        assert_eq!(state.ship.turn, Turn::Right);
        assert!((state.ship.rotation - 32.0).abs() < 1e-12);
        assert!(state.ship.vel.length() > 0.0);
    }

    #[test]
    fn test_tick_clamps_large_delta() {
        let mut state = GameState::new(1, &Settings::default()).unwrap();
        let start = state.enemies[0].pos;
        let vel = state.enemies[0].vel;

        let report = run(&mut state, &TickInput::default(), 5000.0);
        assert!(report.clamped);
        assert_eq!(report.delta_ms, MAX_FRAME_DELTA_MS);

        // Enemies moved by the clamped delta, not the raw one
        let moved = state.enemies[0].pos;
        let expected = crate::sim::trunc_pos(start + vel * (MAX_FRAME_DELTA_MS * 1e-4), ARENA_MARGIN);
        assert!((moved - expected).length() < 1e-12);
    }

    #[test]
    fn test_overlap_reported_on_first_tick() {
        let shapes = ShapeLibrary::new().unwrap();
        let mut ship = Ship::new(DVec2::ZERO, DVec2::ZERO, 1.0, Arc::clone(&shapes.ship));
        ship.rotation = 0.0;
        let enemies = vec![
            Enemy::new(
                1,
                EnemyKind::Star,
                DVec2::new(0.03, 0.0),
                DVec2::ZERO,
                1.0,
                shapes.enemy(EnemyKind::Star),
            ),
            Enemy::new(
                2,
                EnemyKind::Cross,
                DVec2::new(0.7, 0.7),
                DVec2::ZERO,
                1.0,
                shapes.enemy(EnemyKind::Cross),
            ),
        ];
        let mut state = GameState::with_bodies(ship, enemies, shapes);

        let report = run(&mut state, &TickInput::default(), 16.0);
        assert!(report.is_hit());
        assert_eq!(report.hits.len(), 1);
        assert_eq!(report.hits[0].enemy_id, 1);

        // Still overlapping; reported again, not consumed
        let report = run(&mut state, &TickInput::default(), 16.0);
        assert_eq!(report.hits.len(), 1);
    }

    #[test]
    fn test_determinism() {
        let settings = Settings::default();
        let mut state1 = GameState::new(99999, &settings).unwrap();
        let mut state2 = GameState::new(99999, &settings).unwrap();

        let inputs = [
            TickInput {
                thrust: true,
                ..Default::default()
            },
            TickInput {
                turn_left: true,
                thrust: true,
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                turn_right: true,
                ..Default::default()
            },
        ];

        for input in inputs.iter().cycle().take(120) {
            let r1 = run(&mut state1, input, 16.7);
            let r2 = run(&mut state2, input, 16.7);
            assert_eq!(r1, r2);
        }

        assert_eq!(state1.ship.pos, state2.ship.pos);
        assert_eq!(state1.ship.rotation, state2.ship.rotation);
        for (a, b) in state1.enemies.iter().zip(&state2.enemies) {
            assert_eq!(a.pos, b.pos);
        }
    }
}
