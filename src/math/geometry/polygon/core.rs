// src/math/geometry/polygon/core.rs

use crate::math::geometry::polygon::validation::PolygonValidator;
use crate::math::{error::*, types::*};
use crate::math::utils::constants;
use std::fmt;

/// Geschlossener Polygonzug aus 2D-Punkten.
///
/// Die Vertices werden bei der Konstruktion normalisiert: Ist der Ring offen,
/// wird der erste Vertex am Ende angefügt, sodass immer `first == last` gilt.
/// Das Polygon darf konkav sein, muss aber mindestens 3 unterschiedliche Vertices haben.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2D>,
}

impl Polygon {
    /// Erstellt ein Polygon und schließt es bei Bedarf.
    pub fn closed(mut vertices: Vec<Point2D>) -> MathResult<Self> {
        PolygonValidator::validate_ring(&vertices)?;

        if let (Some(&first), Some(&last)) = (vertices.first(), vertices.last()) {
            if first.distance_squared(last) > constants::EPSILON_SQUARED {
                vertices.push(first);
            }
        }

        Ok(Self { vertices })
    }

    /// Gibt den geschlossenen Ring zurück (letzter Vertex == erster Vertex).
    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    /// Vertices ohne den duplizierten Schlusspunkt.
    pub fn unique_vertices(&self) -> &[Point2D] {
        &self.vertices[..self.vertices.len() - 1]
    }

    /// Anzahl der Vertices inklusive Schlusspunkt.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Ein gültiges Polygon ist nie leer.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iteriert über alle Kanten `(start, end)` des Rings.
    pub fn edges(&self) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
        self.vertices.windows(2).map(|w| (w[0], w[1]))
    }

    /// Berechnet die Bounding Box des Polygons.
    pub fn bounds(&self) -> Bounds2D {
        Bounds2D::from_points_iter(self.vertices.iter().copied()).unwrap_or(Bounds2D {
            min: Point2D::NAN,
            max: Point2D::NAN,
        })
    }

    /// Konvertiert in ein `geo::Polygon` ohne Löcher.
    pub fn to_geo(&self) -> geo::Polygon<f64> {
        let exterior: geo::LineString<f64> =
            self.vertices.iter().map(|&v| to_geo_coord(v)).collect();
        geo::Polygon::new(exterior, Vec::new())
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Polygon({} vertices, {})",
            self.unique_vertices().len(),
            self.bounds()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_appends_first_vertex() {
        let polygon = Polygon::closed(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(4.0, 0.0),
            Point2D::new(4.0, 3.0),
        ])
        .unwrap();

        assert_eq!(polygon.len(), 4);
        assert_eq!(polygon.vertices().first(), polygon.vertices().last());
        assert_eq!(polygon.unique_vertices().len(), 3);
        assert_eq!(polygon.edges().count(), 3);
    }

    #[test]
    fn test_already_closed_ring_is_kept() {
        let polygon = Polygon::closed(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(4.0, 0.0),
            Point2D::new(4.0, 3.0),
            Point2D::new(0.0, 0.0),
        ])
        .unwrap();

        assert_eq!(polygon.len(), 4);
    }

    #[test]
    fn test_degenerate_polygon_is_rejected() {
        let result = Polygon::closed(vec![Point2D::new(0.0, 0.0), Point2D::new(1.0, 0.0)]);
        assert!(matches!(
            result,
            Err(MathError::InsufficientPoints {
                expected: 3,
                actual: 2
            })
        ));
        assert!(Polygon::closed(Vec::new()).is_err());
    }

    #[test]
    fn test_bounds_and_geo_conversion() {
        let polygon = Polygon::closed(vec![
            Point2D::new(-1.0, 2.0),
            Point2D::new(5.0, 2.0),
            Point2D::new(2.0, 7.0),
        ])
        .unwrap();

        let bounds = polygon.bounds();
        assert_eq!(bounds.min, Point2D::new(-1.0, 2.0));
        assert_eq!(bounds.max, Point2D::new(5.0, 7.0));

        let geo_polygon = polygon.to_geo();
        assert_eq!(geo_polygon.exterior().0.len(), 4);
        assert!(geo_polygon.interiors().is_empty());
    }
}
