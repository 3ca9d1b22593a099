// src/math/geometry/polygon/validation.rs

use crate::math::error::{MathError, MathResult};
use crate::math::types::Point2D;
use crate::math::utils::constants;

/// Mindestanzahl unterschiedlicher Vertices für eine Fläche.
pub const MIN_DISTINCT_VERTICES: usize = 3;

/// Validator für rohe Vertex-Ringe, bevor daraus ein `Polygon` wird.
pub struct PolygonValidator;

impl PolygonValidator {
    /// Prüft einen Ring auf endliche Koordinaten und genügend unterschiedliche Punkte.
    /// Gibt die Anzahl unterschiedlicher Vertices zurück.
    pub fn validate_ring(vertices: &[Point2D]) -> MathResult<usize> {
        if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(MathError::NonFiniteCoordinate { index });
        }

        let distinct = Self::distinct_vertex_count(vertices);
        if distinct < MIN_DISTINCT_VERTICES {
            return Err(MathError::InsufficientPoints {
                expected: MIN_DISTINCT_VERTICES,
                actual: distinct,
            });
        }

        Ok(distinct)
    }

    /// Zählt die paarweise unterschiedlichen Vertices (Toleranz `EPSILON`).
    /// Erwartet endliche Koordinaten.
    pub fn distinct_vertex_count(vertices: &[Point2D]) -> usize {
        let mut unique_points = vertices.to_vec();
        unique_points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
        unique_points.dedup_by(|a, b| a.distance_squared(*b) < constants::EPSILON_SQUARED);
        unique_points.len()
    }
}
