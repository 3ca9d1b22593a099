// src/math/geometry/polygon/properties.rs

use crate::math::geometry::polygon::core::Polygon;
use crate::math::types::Point2D;
use crate::math::utils::{comparison, constants, distance};

/// Lage eines Punktes relativ zu einem Polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointLocation {
    Inside,
    /// Auf einer Kante oder einem Vertex (innerhalb von `EPSILON`).
    OnBoundary,
    Outside,
}

/// Trait für geometrische Eigenschaften von Polygonen.
pub trait PolygonProperties {
    /// Vorzeichenbehaftete Fläche (Shoelace). Positiv bei Gegen-Uhrzeigersinn.
    fn signed_area(&self) -> f64;

    /// Betrag der Fläche.
    fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Dreiwertige Klassifikation eines Punktes.
    fn classify_point(&self, point: Point2D) -> PointLocation;

    /// Prüft, ob ein Punkt im Polygon liegt. Randpunkte zählen als enthalten
    /// (geschlossene Punktmenge).
    fn contains_point(&self, point: Point2D) -> bool {
        self.classify_point(point) != PointLocation::Outside
    }

    /// Prüft, ob ein Punkt echt im Inneren liegt (Rand ausgeschlossen).
    fn interior_contains_point(&self, point: Point2D) -> bool {
        self.classify_point(point) == PointLocation::Inside
    }
}

impl PolygonProperties for Polygon {
    fn signed_area(&self) -> f64 {
        let twice_area: f64 = self
            .edges()
            .map(|(p1, p2)| (p1.x * p2.y) - (p2.x * p1.y))
            .sum();
        twice_area * 0.5
    }

    fn classify_point(&self, point: Point2D) -> PointLocation {
        classify_point(self.vertices(), point)
    }
}

/// Ray-Casting mit halboffener Kantenregel.
///
/// Ein horizontaler Strahl wird vom Testpunkt nach +X geschickt. Eine Kante `(j, i)` ist
/// Kandidat, wenn genau einer ihrer Endpunkte `y >= point.y` hat (ein Vergleich `<`, einer
/// `>=`), sodass gemeinsame Vertices nicht doppelt gezählt werden. Liegt der X-Schnitt der
/// Kante strikt links vom Punkt, kippt das Ergebnis.
///
/// Ringe mit weniger als 3 Punkten enthalten nie etwas. Das Ergebnis für Punkte exakt auf
/// dem Rand ist durch die Halboffenheit bestimmt; `classify_point` behandelt den Rand vorab.
pub fn ray_cast(ring: &[Point2D], point: Point2D) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let vi = ring[i];
        let vj = ring[j];

        if (vi.y < point.y && vj.y >= point.y) || (vj.y < point.y && vi.y >= point.y) {
            // vj.y != vi.y ist durch die Kandidatenbedingung garantiert
            let t = (point.y - vi.y) / (vj.y - vi.y);
            let x_intercept = comparison::lerp(vi.x, vj.x, t);
            if x_intercept < point.x {
                inside = !inside;
            }
        }
        j = i;
    }

    inside
}

/// Prüft, ob ein Punkt auf einer Kante des Rings liegt.
pub fn on_boundary(ring: &[Point2D], point: Point2D, tolerance: f64) -> bool {
    let n = ring.len();
    if n == 0 {
        return false;
    }

    let mut j = n - 1;
    for i in 0..n {
        if distance::point_segment_distance(point, ring[j], ring[i]) <= tolerance {
            return true;
        }
        j = i;
    }
    false
}

/// Klassifiziert einen Punkt gegenüber einem (geschlossenen oder offenen) Ring.
pub fn classify_point(ring: &[Point2D], point: Point2D) -> PointLocation {
    if ring.len() < 3 {
        return PointLocation::Outside;
    }
    if on_boundary(ring, point, constants::EPSILON) {
        return PointLocation::OnBoundary;
    }
    if ray_cast(ring, point) {
        PointLocation::Inside
    } else {
        PointLocation::Outside
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::geometry::polygon::builder::ShapeGenerators;
    use approx::assert_relative_eq;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn square(size: f64) -> Polygon {
        ShapeGenerators::rectangle(Point2D::ZERO, Point2D::new(size, size)).unwrap()
    }

    /// U-förmiges (konkaves) Polygon: Öffnung nach oben zwischen x=2 und x=4.
    fn u_shape() -> Polygon {
        Polygon::closed(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(6.0, 0.0),
            Point2D::new(6.0, 6.0),
            Point2D::new(4.0, 6.0),
            Point2D::new(4.0, 2.0),
            Point2D::new(2.0, 2.0),
            Point2D::new(2.0, 6.0),
            Point2D::new(0.0, 6.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_convex_inside_outside() {
        let polygon = square(10.0);
        assert!(polygon.contains_point(Point2D::new(5.0, 5.0)));
        assert!(polygon.contains_point(Point2D::new(0.1, 9.9)));
        assert!(!polygon.contains_point(Point2D::new(-0.1, 5.0)));
        assert!(!polygon.contains_point(Point2D::new(5.0, 10.1)));
        assert!(!polygon.contains_point(Point2D::new(50.0, 50.0)));
    }

    #[test]
    fn test_concave_notch_is_outside() {
        let polygon = u_shape();
        assert!(polygon.contains_point(Point2D::new(1.0, 5.0)));
        assert!(polygon.contains_point(Point2D::new(5.0, 5.0)));
        assert!(polygon.contains_point(Point2D::new(3.0, 1.0)));
        // In der Kerbe
        assert!(!polygon.contains_point(Point2D::new(3.0, 4.0)));
        // Strahl durch die Kerbe, Punkt links davon
        assert!(polygon.contains_point(Point2D::new(1.0, 3.0)));
    }

    #[test]
    fn test_ray_through_vertex_is_counted_once() {
        // Raute: der Strahl von (0,0) trifft genau den rechten Vertex (2,0)
        let diamond = Polygon::closed(vec![
            Point2D::new(0.0, -2.0),
            Point2D::new(2.0, 0.0),
            Point2D::new(0.0, 2.0),
            Point2D::new(-2.0, 0.0),
        ])
        .unwrap();
        assert!(ray_cast(diamond.vertices(), Point2D::new(0.0, 0.0)));
        assert!(!ray_cast(diamond.vertices(), Point2D::new(-3.0, 0.0)));
    }

    #[test]
    fn test_boundary_points_are_contained() {
        let polygon = square(10.0);
        for p in [
            Point2D::new(0.0, 0.0),
            Point2D::new(0.0, 5.0),
            Point2D::new(10.0, 5.0),
            Point2D::new(5.0, 10.0),
            Point2D::new(5.0, 0.0),
        ] {
            assert_eq!(polygon.classify_point(p), PointLocation::OnBoundary);
            assert!(polygon.contains_point(p));
            assert!(!polygon.interior_contains_point(p));
        }
    }

    #[test]
    fn test_degenerate_rings_contain_nothing() {
        let p = Point2D::new(0.0, 0.0);
        assert!(!ray_cast(&[], p));
        assert!(!ray_cast(&[Point2D::new(-1.0, -1.0)], p));
        assert!(!ray_cast(&[Point2D::new(-1.0, -1.0), Point2D::new(1.0, 1.0)], p));
        assert_eq!(
            classify_point(&[Point2D::new(-1.0, 0.0), Point2D::new(1.0, 0.0)], p),
            PointLocation::Outside
        );
    }

    #[test]
    fn test_random_points_match_rectangle_test() {
        let polygon = ShapeGenerators::rectangle(Point2D::new(-3.0, 2.0), Point2D::new(7.0, 5.0))
            .unwrap();
        let bounds = polygon.bounds();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..2_000 {
            let p = Point2D::new(rng.random_range(-10.0..15.0), rng.random_range(-5.0..10.0));
            let expected = p.x > bounds.min.x
                && p.x < bounds.max.x
                && p.y > bounds.min.y
                && p.y < bounds.max.y;
            if expected {
                assert!(polygon.interior_contains_point(p), "{p:?} should be inside");
            } else if !bounds.contains_point(p) {
                assert!(!polygon.contains_point(p), "{p:?} should be outside");
            }
        }
    }

    #[test]
    fn test_area() {
        assert_relative_eq!(square(10.0).area(), 100.0);
        assert_relative_eq!(u_shape().area(), 28.0);
        assert!(square(1.0).signed_area() > 0.0);
    }
}
