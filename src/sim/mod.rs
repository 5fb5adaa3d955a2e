//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through the delta handed to `tick`
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod shapes;
pub mod state;
pub mod tick;

pub use collision::{CollisionHit, check_collisions, world_edges};
pub use geometry::{
    Segment, body_transform, collide, lines_collide, mult, polygon_edges, rotation_matrix,
    scale_matrix, translate_matrix,
};
pub use shapes::{EnemyKind, ShapeLibrary, ShapeTemplate, generate_shape};
pub use state::{Body, Enemy, GameState, Ship, Turn, trunc_pos};
pub use tick::{FrameClock, FrameReport, TickInput, apply_input, clamp_delta, move_all, tick};
