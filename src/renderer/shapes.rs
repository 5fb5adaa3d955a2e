//! Line-list generation for body outlines

use glam::DVec2;

use super::vertex::Vertex;
use crate::sim::Segment;

/// Two vertices per segment, ready to draw as a line list
pub fn segment_lines(edges: &[Segment], color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(edges.len() * 2);
    for edge in edges {
        vertices.push(vertex_at(edge.start, color));
        vertices.push(vertex_at(edge.end, color));
    }
    vertices
}

#[inline]
fn vertex_at(p: DVec2, color: [f32; 4]) -> Vertex {
    Vertex::new(p.x as f32, p.y as f32, color)
}
