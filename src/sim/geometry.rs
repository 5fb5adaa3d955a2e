//! 2D affine transforms and segment intersection
//!
//! Transforms are 3x3 matrices read row-major, acting on column vectors:
//!
//! ```text
//! | m0 m1 m2 |   | x |
//! | m3 m4 m5 | * | y |
//! | m6 m7 m8 |   | z |
//! ```
//!
//! This is a 2D affine transform packed awkwardly into a 3x3: shape points
//! carry z = 1 so column 3 acts as translation, and the third row of a
//! rotation is all zeros. The arithmetic is kept exactly as is; do not
//! "fix" it into a proper homogeneous convention.
//!
//! glam stores `DMat3` column-major, so row `i` column `j` is `m.col(j)[i]`.

use glam::{DMat3, DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Rotation by `angle_degrees` (top-left 2x2 block), third row zeroed.
///
/// NaN is treated as 0.
pub fn rotation_matrix(angle_degrees: f64) -> DMat3 {
    let angle_degrees = if angle_degrees.is_nan() {
        0.0
    } else {
        angle_degrees
    };
    // `deg * (PI / 180)`, unlike the polar and thrust conversions
    let theta = angle_degrees.to_radians();
    let (sin, cos) = (theta.sin(), theta.cos());
    from_row_major([cos, -sin, 0.0, sin, cos, 0.0, 0.0, 0.0, 0.0])
}

/// Multiply every element of `m` by `factor`
#[inline]
pub fn scale_matrix(m: DMat3, factor: f64) -> DMat3 {
    m * factor
}

/// Add `v` to the third column (row 0 gets v.x, row 1 v.y, row 2 v.z)
///
/// Apply last in the rotate -> scale -> translate pipeline, otherwise the
/// offset ends up rotated and scaled.
#[inline]
pub fn translate_matrix(m: DMat3, v: DVec3) -> DMat3 {
    DMat3::from_cols(m.x_axis, m.y_axis, m.z_axis + v)
}

/// Matrix times column vector
#[inline]
pub fn mult(m: DMat3, v: DVec3) -> DVec3 {
    m * v
}

/// Compose the full body transform: rotate, then scale, then translate
pub fn body_transform(rotation_degrees: f64, size: f64, position: DVec3) -> DMat3 {
    let m = rotation_matrix(rotation_degrees);
    let m = scale_matrix(m, size);
    translate_matrix(m, position)
}

/// Build a matrix from nine row-major elements
pub fn from_row_major(m: [f64; 9]) -> DMat3 {
    DMat3::from_cols_array(&m).transpose()
}

/// Flatten a matrix into nine row-major elements
pub fn row_major(m: &DMat3) -> [f64; 9] {
    m.transpose().to_cols_array()
}

/// A line segment between two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: DVec2,
    pub end: DVec2,
}

impl Segment {
    pub const fn new(start: DVec2, end: DVec2) -> Self {
        Self { start, end }
    }
}

/// Connect vertices into a closed polygon (last vertex joins the first)
pub fn polygon_edges(vertices: &[DVec2]) -> Vec<Segment> {
    let n = vertices.len();
    (0..n)
        .map(|i| Segment::new(vertices[i], vertices[(i + 1) % n]))
        .collect()
}

/// True if the segments cross strictly inside both of them
///
/// Parallel and collinear segments (`det == 0.0`, exact comparison) never
/// collide, and touching at an endpoint does not count.
pub fn lines_collide(a: &Segment, b: &Segment) -> bool {
    let (ax, ay, bx, by) = (a.start.x, a.start.y, a.end.x, a.end.y);
    let (px, py, qx, qy) = (b.start.x, b.start.y, b.end.x, b.end.y);

    let det = (bx - ax) * (qy - py) - (qx - px) * (by - ay);
    if det == 0.0 {
        return false;
    }

    let lambda = ((qy - py) * (qx - ax) + (px - qx) * (qy - ay)) / det;
    let gamma = ((ay - by) * (qx - ax) + (bx - ax) * (qy - ay)) / det;

    (0.0 < lambda && lambda < 1.0) && (0.0 < gamma && gamma < 1.0)
}

/// True if any edge of `a` crosses any edge of `b`
pub fn collide(a: &[Segment], b: &[Segment]) -> bool {
    a.iter().any(|ea| b.iter().any(|eb| lines_collide(ea, eb)))
}
