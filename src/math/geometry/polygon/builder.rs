// src/math/geometry/polygon/builder.rs

use crate::math::error::MathResult;
use crate::math::geometry::polygon::core::Polygon;
use crate::math::geometry::polygon::tessellation::Tessellator;
use crate::math::types::Point2D;

/// Builder für Polygone aus einzelnen Punkten.
#[derive(Debug, Default, Clone)]
pub struct PolygonBuilder {
    vertices: Vec<Point2D>,
}

impl PolygonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_point(mut self, x: f64, y: f64) -> Self {
        self.vertices.push(Point2D::new(x, y));
        self
    }

    pub fn add_vertices(mut self, vertices: impl IntoIterator<Item = Point2D>) -> Self {
        self.vertices.extend(vertices);
        self
    }

    /// Schließt den Ring und validiert ihn.
    pub fn build(self) -> MathResult<Polygon> {
        Polygon::closed(self.vertices)
    }
}

/// Generatoren für Standardformen.
pub struct ShapeGenerators;

impl ShapeGenerators {
    /// Achsenparalleles Rechteck, Vertices gegen den Uhrzeigersinn ab `min`.
    pub fn rectangle(min: Point2D, max: Point2D) -> MathResult<Polygon> {
        PolygonBuilder::new()
            .add_point(min.x, min.y)
            .add_point(max.x, min.y)
            .add_point(max.x, max.y)
            .add_point(min.x, max.y)
            .build()
    }

    /// Kreis, abgetastet mit dem Bogenlängen-Schritt des Tessellators.
    pub fn circle(center: Point2D, radius: f64, tessellator: &Tessellator) -> MathResult<Polygon> {
        Polygon::closed(tessellator.tessellate_circle(center, radius)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::geometry::polygon::properties::PolygonProperties;
    use approx::assert_relative_eq;

    #[test]
    fn test_rectangle() {
        let rect = ShapeGenerators::rectangle(Point2D::new(1.0, 2.0), Point2D::new(4.0, 6.0))
            .unwrap();
        assert_eq!(rect.unique_vertices().len(), 4);
        assert_relative_eq!(rect.area(), 12.0);
        assert!(rect.signed_area() > 0.0);
    }

    #[test]
    fn test_zero_size_rectangle_is_rejected() {
        assert!(ShapeGenerators::rectangle(Point2D::ZERO, Point2D::ZERO).is_err());
    }

    #[test]
    fn test_circle_area_approximates_pi_r_squared() {
        let circle =
            ShapeGenerators::circle(Point2D::new(10.0, 10.0), 5.0, &Tessellator::default())
                .unwrap();
        let expected = std::f64::consts::PI * 25.0;
        assert_relative_eq!(circle.area(), expected, max_relative = 0.01);
    }

    #[test]
    fn test_builder() {
        let triangle = PolygonBuilder::new()
            .add_point(0.0, 0.0)
            .add_vertices([Point2D::new(2.0, 0.0), Point2D::new(1.0, 1.0)])
            .build()
            .unwrap();
        assert_relative_eq!(triangle.area(), 1.0);
    }
}
