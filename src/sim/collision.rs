//! Ship versus enemy collision detection
//!
//! Each body's template is pushed through its rotate -> scale -> translate
//! transform into world-space edges, then every ship edge is tested against
//! every enemy edge.

use serde::{Deserialize, Serialize};

use super::geometry::{Segment, collide};
use super::shapes::EnemyKind;
use super::state::{Body, Enemy, Ship};

/// One enemy touching the ship this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionHit {
    pub enemy_id: u32,
    pub kind: EnemyKind,
}

/// World-space polygon edges of any body
#[inline]
pub fn world_edges(body: &impl Body) -> Vec<Segment> {
    body.world_edges()
}

/// Every enemy whose outline crosses the ship's, in enemy order
///
/// Does not stop at the first hit.
pub fn check_collisions(ship: &Ship, enemies: &[Enemy]) -> Vec<CollisionHit> {
    let ship_edges = ship.world_edges();
    enemies
        .iter()
        .filter(|enemy| collide(&ship_edges, &enemy.world_edges()))
        .map(|enemy| CollisionHit {
            enemy_id: enemy.id,
            kind: enemy.kind,
        })
        .collect()
}
