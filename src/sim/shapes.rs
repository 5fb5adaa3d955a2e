//! Shape templates built from polar coordinates
//!
//! Templates are generated once at startup and shared by reference across
//! every body of the same kind.

use std::sync::Arc;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::consts::SHAPE_SCALE;
use crate::error::ShapeError;
use crate::polar_to_cartesian;

/// Closed polygon in local space; every vertex has z = 1
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeTemplate {
    vertices: Vec<DVec3>,
}

impl ShapeTemplate {
    /// Build from flat `x, y, z` components
    pub fn from_flat(components: &[f64]) -> Result<Self, ShapeError> {
        if components.len() % 3 != 0 {
            return Err(ShapeError::Malformed {
                components: components.len(),
            });
        }
        let vertices = components
            .chunks_exact(3)
            .map(|c| DVec3::new(c[0], c[1], c[2]))
            .collect();
        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Flat `x, y, z` components for `(angle_degrees, radius)` pairs
///
/// Each pair becomes `sin(a) * r * 0.1, cos(a) * r * 0.1, 1`.
pub fn polar_components(points: &[(f64, f64)]) -> Vec<f64> {
    points
        .iter()
        .flat_map(|&(angle, radius)| {
            let p = polar_to_cartesian(angle, 1.0);
            // sin(a) * r * scale, multiplied left to right
            [p.x * radius * SHAPE_SCALE, p.y * radius * SHAPE_SCALE, 1.0]
        })
        .collect()
}

/// Generate a template from `(angle_degrees, radius)` pairs
pub fn generate_shape(points: &[(f64, f64)]) -> Result<ShapeTemplate, ShapeError> {
    ShapeTemplate::from_flat(&polar_components(points))
}

/// Enemy silhouette variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Six-pointed star
    #[default]
    Star,
    /// Four-pointed star with thin waist
    Cross,
    /// Four-pointed star with wide waist
    Blade,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Star, EnemyKind::Cross, EnemyKind::Blade];

    pub fn as_str(&self) -> &'static str {
        match self {
            EnemyKind::Star => "star",
            EnemyKind::Cross => "cross",
            EnemyKind::Blade => "blade",
        }
    }
}

/// Waist radius of the star and cross silhouettes
const THIN_WAIST: f64 = 0.27;
/// Waist radius of the blade silhouette
const WIDE_WAIST: f64 = 0.55;

fn ship_points() -> [(f64, f64); 4] {
    [(0.0, 0.5), (150.0, 0.5), (180.0, 0.3), (210.0, 0.5)]
}

fn star_points() -> [(f64, f64); 6] {
    [
        (60.0, 1.0),
        (120.0, THIN_WAIST),
        (180.0, 1.0),
        (240.0, THIN_WAIST),
        (300.0, 1.0),
        (0.0, THIN_WAIST),
    ]
}

fn four_point_star(waist: f64) -> [(f64, f64); 8] {
    [
        (45.0, 1.0),
        (90.0, waist),
        (135.0, 1.0),
        (180.0, waist),
        (225.0, 1.0),
        (270.0, waist),
        (315.0, 1.0),
        (0.0, waist),
    ]
}

/// The fixed set of templates used by a simulation
///
/// Built explicitly and handed to entity constructors; there is no
/// process-wide cache.
#[derive(Debug, Clone)]
pub struct ShapeLibrary {
    pub ship: Arc<ShapeTemplate>,
    pub star: Arc<ShapeTemplate>,
    pub cross: Arc<ShapeTemplate>,
    pub blade: Arc<ShapeTemplate>,
}

impl ShapeLibrary {
    /// Build the built-in ship and enemy silhouettes
    pub fn new() -> Result<Self, ShapeError> {
        Self::from_flat(
            &polar_components(&ship_points()),
            &polar_components(&star_points()),
            &polar_components(&four_point_star(THIN_WAIST)),
            &polar_components(&four_point_star(WIDE_WAIST)),
        )
    }

    /// Build from flat `x, y, z` components; any malformed template fails
    pub fn from_flat(
        ship: &[f64],
        star: &[f64],
        cross: &[f64],
        blade: &[f64],
    ) -> Result<Self, ShapeError> {
        let library = Self {
            ship: Arc::new(ShapeTemplate::from_flat(ship)?),
            star: Arc::new(ShapeTemplate::from_flat(star)?),
            cross: Arc::new(ShapeTemplate::from_flat(cross)?),
            blade: Arc::new(ShapeTemplate::from_flat(blade)?),
        };
        log::debug!(
            "Shape library ready: ship {}, star {}, cross {}, blade {} vertices",
            library.ship.len(),
            library.star.len(),
            library.cross.len(),
            library.blade.len()
        );
        Ok(library)
    }

    /// Shared template for an enemy variant
    pub fn enemy(&self, kind: EnemyKind) -> Arc<ShapeTemplate> {
        match kind {
            EnemyKind::Star => Arc::clone(&self.star),
            EnemyKind::Cross => Arc::clone(&self.cross),
            EnemyKind::Blade => Arc::clone(&self.blade),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_shape_polar() {
        let shape = generate_shape(&[(0.0, 1.0), (90.0, 2.0)]).unwrap();
        let v = shape.vertices();
        assert_eq!(v.len(), 2);
        // 0 degrees points along +Y
        assert!(v[0].x.abs() < 1e-12);
        assert!((v[0].y - 0.1).abs() < 1e-12);
        // 90 degrees points along +X
        assert!((v[1].x - 0.2).abs() < 1e-12);
        assert!(v[1].y.abs() < 1e-12);
        assert!(v.iter().all(|p| p.z == 1.0));
    }

    #[test]
    fn test_generate_shape_deterministic() {
        assert_eq!(
            generate_shape(&star_points()).unwrap(),
            generate_shape(&star_points()).unwrap()
        );
    }

    #[test]
    fn test_library_vertex_counts() {
        let lib = ShapeLibrary::new().unwrap();
        assert_eq!(lib.ship.len(), 4);
        assert_eq!(lib.star.len(), 6);
        assert_eq!(lib.cross.len(), 8);
        assert_eq!(lib.blade.len(), 8);
        assert_eq!(polar_components(&ship_points()).len(), 12);
    }

    #[test]
    fn test_enemy_templates_shared() {
        let lib = ShapeLibrary::new().unwrap();
        let a = lib.enemy(EnemyKind::Cross);
        let b = lib.enemy(EnemyKind::Cross);
        assert!(Arc::ptr_eq(&a, &b));
        assert_ne!(*lib.enemy(EnemyKind::Cross), *lib.enemy(EnemyKind::Blade));
    }

    #[test]
    fn test_ship_nose_points_up() {
        let lib = ShapeLibrary::new().unwrap();
        let nose = lib.ship.vertices()[0];
        assert!(nose.x.abs() < 1e-12);
        assert!((nose.y - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_from_flat() {
        let shape = ShapeTemplate::from_flat(&[0.0, 1.0, 1.0, 1.0, 0.0, 1.0]).unwrap();
        assert_eq!(shape.len(), 2);
        assert_eq!(shape.vertices()[1], DVec3::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_from_flat_malformed() {
        let err = ShapeTemplate::from_flat(&[0.0, 1.0, 1.0, 1.0]).unwrap_err();
        assert_eq!(err, ShapeError::Malformed { components: 4 });
    }

    #[test]
    fn test_library_rejects_malformed_template() {
        let ship = polar_components(&ship_points());
        let star = polar_components(&star_points());
        let mut cross = polar_components(&four_point_star(THIN_WAIST));
        let blade = polar_components(&four_point_star(WIDE_WAIST));

        assert!(ShapeLibrary::from_flat(&ship, &star, &cross, &blade).is_ok());

        cross.pop();
        let err = ShapeLibrary::from_flat(&ship, &star, &cross, &blade).unwrap_err();
        assert_eq!(err, ShapeError::Malformed { components: 23 });
    }
}
