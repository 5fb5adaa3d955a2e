//! Render bridge
//!
//! The simulation does not draw. This module turns a finished tick into
//! plain data an external renderer can upload: per-body transforms and a
//! line-list vertex buffer of world-space outlines.

pub mod shapes;
pub mod vertex;

pub use vertex::{LINE_WIDTH, Vertex, colors};

use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};

use crate::sim::geometry::row_major;
use crate::sim::{Body, EnemyKind, GameState, Segment};

/// Which template a render item uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyKind {
    Ship,
    Enemy(EnemyKind),
}

/// Everything needed to draw one body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderItem {
    pub kind: BodyKind,
    pub position: DVec3,
    pub rotation: f64,
    pub size: f64,
    /// Full rotate -> scale -> translate transform, row-major
    pub transform: [f64; 9],
    /// Closed world-space outline
    pub edges: Vec<Segment>,
}

impl RenderItem {
    pub fn from_body(kind: BodyKind, body: &impl Body) -> Self {
        let transform: DMat3 = body.transform();
        Self {
            kind,
            position: body.position(),
            rotation: body.rotation(),
            size: body.size(),
            transform: row_major(&transform),
            edges: body.world_edges(),
        }
    }
}

/// Render items for every body: enemies in id order, then the ship
pub fn render_items(state: &GameState) -> Vec<RenderItem> {
    state
        .enemies
        .iter()
        .map(|e| RenderItem::from_body(BodyKind::Enemy(e.kind), e))
        .chain(std::iter::once(RenderItem::from_body(
            BodyKind::Ship,
            &state.ship,
        )))
        .collect()
}

/// One line-list buffer with every outline in the scene
pub fn line_vertices(state: &GameState) -> Vec<Vertex> {
    render_items(state)
        .iter()
        .flat_map(|item| shapes::segment_lines(&item.edges, colors::LINE))
        .collect()
}

/// Raw bytes of [`line_vertices`] for a GPU upload
pub fn line_vertex_bytes(state: &GameState) -> Vec<u8> {
    bytemuck::cast_slice(&line_vertices(state)).to_vec()
}
