//! VX Game - A toroidal vector-graphics arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, shapes, bodies, collisions, tick)
//! - `renderer`: Line-list vertex data for an external renderer
//! - `platform`: Input mapping and the browser bridge
//! - `settings`: JSON configuration

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{SettingsError, ShapeError};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Arena margin beyond the visible area before a body wraps
    pub const ARENA_MARGIN: f64 = 0.1;
    /// Frame deltas above this (ms) are clamped
    pub const MAX_FRAME_DELTA_MS: f64 = 50.0;

    /// Number of enemies spawned at start
    pub const ENEMY_COUNT: usize = 10;

    /// Scale applied to polar shape radii
    pub const SHAPE_SCALE: f64 = 0.1;

    /// Velocity units per millisecond
    pub const VELOCITY_SCALE: f64 = 0.0001;
    /// Ship turn rate (degrees per millisecond)
    pub const SHIP_TURN_RATE: f64 = 0.2;
    /// Ship velocity damping applied every tick
    pub const SHIP_DAMPING: f64 = 0.98;
    /// Ship initial facing (degrees)
    pub const SHIP_START_ROTATION: f64 = 30.0;
    /// Ship uniform scale
    pub const SHIP_SIZE: f64 = 1.0;
}

/// Degrees to radians as `deg * PI / 180`
///
/// Used for polar coordinates and the ship's thrust heading. Rotation
/// matrices use `to_radians` (`deg * (PI / 180)`) instead; the two can
/// differ in the last bit.
#[inline]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Convert polar (degrees measured clockwise from +Y, radius) to cartesian
#[inline]
pub fn polar_to_cartesian(angle_degrees: f64, radius: f64) -> glam::DVec2 {
    let theta = deg_to_rad(angle_degrees);
    glam::DVec2::new(theta.sin() * radius, theta.cos() * radius)
}
