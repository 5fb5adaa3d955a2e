//! Bodies and game state
//!
//! A ship and a fixed field of enemies drift through a toroidal arena.
//! Positions are plain 2D world coordinates; wrap-around is applied after
//! every move.

use std::sync::Arc;

use glam::{DMat3, DVec2, DVec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::{Segment, body_transform, mult, polygon_edges};
use super::shapes::{EnemyKind, ShapeLibrary, ShapeTemplate};
use crate::consts::*;
use crate::deg_to_rad;
use crate::error::ShapeError;
use crate::settings::Settings;

/// Wrap a position around the toroidal arena
///
/// Checks run in a fixed order on a single pass: x below, y below, x above,
/// y above. A coordinate pushed past the top by the first check is pulled
/// back by the second, so the effective arena is `[-(1 + margin), 1 + margin]`.
pub fn trunc_pos(mut pos: DVec2, margin: f64) -> DVec2 {
    let span = 2.0 + 2.0 * margin;
    if pos.x < -margin {
        pos.x += span;
    }
    if pos.y < -margin {
        pos.y += span;
    }
    if pos.x > 1.0 + margin {
        pos.x -= span;
    }
    if pos.y > 1.0 + margin {
        pos.y -= span;
    }
    pos
}

/// Shared capabilities of everything that moves and collides
pub trait Body {
    /// World position as a translation vector (z is always 0)
    fn position(&self) -> DVec3;
    /// Facing in degrees
    fn rotation(&self) -> f64;
    /// Uniform scale applied to the template
    fn size(&self) -> f64;
    fn template(&self) -> &ShapeTemplate;
    /// Advance by `delta_ms` and wrap inside `margin`
    fn advance(&mut self, delta_ms: f64, margin: f64);

    /// Rotate, scale, then translate
    fn transform(&self) -> DMat3 {
        body_transform(self.rotation(), self.size(), self.position())
    }

    /// Template vertices in world space (z dropped)
    fn world_vertices(&self) -> Vec<DVec2> {
        let m = self.transform();
        self.template()
            .vertices()
            .iter()
            .map(|&v| mult(m, v).truncate())
            .collect()
    }

    /// Closed polygon edges in world space
    fn world_edges(&self) -> Vec<Segment> {
        polygon_edges(&self.world_vertices())
    }
}

/// Turn intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Turn {
    #[default]
    None,
    Left,
    Right,
}

/// The player's ship
#[derive(Debug, Clone)]
pub struct Ship {
    pub pos: DVec2,
    pub vel: DVec2,
    pub size: f64,
    /// Facing (degrees, 0 = +Y, positive turns clockwise)
    pub rotation: f64,
    pub turn: Turn,
    pub thrust: bool,
    template: Arc<ShapeTemplate>,
}

impl Ship {
    pub fn new(pos: DVec2, vel: DVec2, size: f64, template: Arc<ShapeTemplate>) -> Self {
        Self {
            pos,
            vel,
            size,
            rotation: SHIP_START_ROTATION,
            turn: Turn::None,
            thrust: false,
            template,
        }
    }
}

impl Body for Ship {
    fn position(&self) -> DVec3 {
        self.pos.extend(0.0)
    }

    fn rotation(&self) -> f64 {
        self.rotation
    }

    fn size(&self) -> f64 {
        self.size
    }

    fn template(&self) -> &ShapeTemplate {
        &self.template
    }

    /// Velocity is per tick, not per millisecond: the position update is not
    /// scaled by `delta_ms`, unlike [`Enemy`]. Ship speed therefore depends
    /// on frame rate.
    fn advance(&mut self, delta_ms: f64, margin: f64) {
        match self.turn {
            Turn::Left => self.rotation -= delta_ms * SHIP_TURN_RATE,
            Turn::Right => self.rotation += delta_ms * SHIP_TURN_RATE,
            Turn::None => {}
        }

        let accel = if self.thrust { 1.0 } else { 0.0 };
        let theta = deg_to_rad(self.rotation);
        self.vel.x += accel * delta_ms * VELOCITY_SCALE * theta.sin();
        self.vel.y += accel * delta_ms * VELOCITY_SCALE * theta.cos();

        self.vel *= SHIP_DAMPING;

        self.pos += self.vel;
        self.pos = trunc_pos(self.pos, margin);
    }
}

/// A drifting enemy with a constant heading
#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: u32,
    pub kind: EnemyKind,
    pub pos: DVec2,
    pub vel: DVec2,
    pub size: f64,
    template: Arc<ShapeTemplate>,
}

impl Enemy {
    pub fn new(
        id: u32,
        kind: EnemyKind,
        pos: DVec2,
        vel: DVec2,
        size: f64,
        template: Arc<ShapeTemplate>,
    ) -> Self {
        Self {
            id,
            kind,
            pos,
            vel,
            size,
            template,
        }
    }
}

impl Body for Enemy {
    fn position(&self) -> DVec3 {
        self.pos.extend(0.0)
    }

    /// Enemies never rotate
    fn rotation(&self) -> f64 {
        0.0
    }

    fn size(&self) -> f64 {
        self.size
    }

    fn template(&self) -> &ShapeTemplate {
        &self.template
    }

    fn advance(&mut self, delta_ms: f64, margin: f64) {
        let d = delta_ms * VELOCITY_SCALE;
        self.pos.x += self.vel.x * d;
        self.pos.y += self.vel.y * d;
        self.pos = trunc_pos(self.pos, margin);
    }
}

/// RNG state wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub ship: Ship,
    /// Enemies, sorted by id
    pub enemies: Vec<Enemy>,
    pub shapes: ShapeLibrary,
}

impl GameState {
    /// Create a new game: ship at rest at the origin, enemies scattered
    ///
    /// Fails only if a built-in shape template is malformed.
    pub fn new(seed: u64, settings: &Settings) -> Result<Self, ShapeError> {
        let shapes = ShapeLibrary::new()?;
        let mut rng = RngState::new(seed).to_rng();

        let enemies = (0..settings.enemy_count)
            .map(|i| spawn_enemy(&mut rng, i as u32 + 1, &shapes, settings.mixed_enemies))
            .collect();

        let ship = Ship::new(
            DVec2::ZERO,
            DVec2::ZERO,
            SHIP_SIZE,
            Arc::clone(&shapes.ship),
        );

        Ok(Self {
            seed,
            time_ticks: 0,
            ship,
            enemies,
            shapes,
        })
    }

    /// Build a state from explicit bodies (scenarios and tests)
    pub fn with_bodies(ship: Ship, enemies: Vec<Enemy>, shapes: ShapeLibrary) -> Self {
        let mut state = Self {
            seed: 0,
            time_ticks: 0,
            ship,
            enemies,
            shapes,
        };
        state.normalize_order();
        state
    }

    /// Look up an enemy by id
    pub fn enemy(&self, id: u32) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }

    /// Ensure enemies are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.enemies.sort_by_key(|e| e.id);
    }
}

/// Random position in [-1, 1), random heading, size in [0.5, 1.0)
///
/// Every enemy is a star unless `mixed` is set, in which case the kind is
/// drawn after the size.
#[allow(clippy::approx_constant)]
fn spawn_enemy(rng: &mut Pcg32, id: u32, shapes: &ShapeLibrary, mixed: bool) -> Enemy {
    let pos = DVec2::new(
        rng.random::<f64>() * 2.0 - 1.0,
        rng.random::<f64>() * 2.0 - 1.0,
    );
    // 3.14, not PI: headings stop just short of a full turn
    let angle = rng.random::<f64>() * 3.14 * 2.0;
    let vel = DVec2::new(angle.sin(), angle.cos());
    let size = rng.random::<f64>() * 0.5 + 0.5;
    let kind = if mixed {
        EnemyKind::ALL[rng.random_range(0..EnemyKind::ALL.len())]
    } else {
        EnemyKind::Star
    };

    Enemy::new(id, kind, pos, vel, size, shapes.enemy(kind))
}
