// src/layout/placement.rs
use crate::layout::tracker::PlacementKind;
use crate::math::geometry::region::rectangle_corners;
use crate::math::types::{Bounds2D, Point2D};
use serde::{Deserialize, Serialize};

/// Ein platzierter Tracker: achsenparalleles Rechteck um `center`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementRectangle {
    center: Point2D,
    /// Ausdehnung in Y
    length: f64,
    /// Ausdehnung in X
    width: f64,
    kind: PlacementKind,
}

impl PlacementRectangle {
    pub fn new(center: Point2D, length: f64, width: f64, kind: PlacementKind) -> Self {
        Self {
            center,
            length,
            width,
            kind,
        }
    }

    pub fn center(&self) -> Point2D {
        self.center
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn kind(&self) -> PlacementKind {
        self.kind
    }

    /// Südkante
    pub fn min_y(&self) -> f64 {
        self.center.y - self.length / 2.0
    }

    /// Nordkante
    pub fn max_y(&self) -> f64 {
        self.center.y + self.length / 2.0
    }

    /// Umriss als geschlossene Polylinie: unten-links, unten-rechts, oben-rechts, oben-links.
    pub fn corners(&self) -> [Point2D; 4] {
        rectangle_corners(self.center, self.length, self.width)
    }

    pub fn bounds(&self) -> Bounds2D {
        Bounds2D::from_center_size(self.center, Point2D::new(self.width, self.length))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_extent_and_corners() {
        let rect = PlacementRectangle::new(Point2D::new(1.0, 2.0), 4.0, 2.0, PlacementKind::Long);
        assert_relative_eq!(rect.min_y(), 0.0);
        assert_relative_eq!(rect.max_y(), 4.0);
        assert_eq!(rect.corners()[0], Point2D::new(0.0, 0.0));
        assert_eq!(rect.corners()[2], Point2D::new(2.0, 4.0));

        let bounds = rect.bounds();
        assert_eq!(bounds.min, Point2D::new(0.0, 0.0));
        assert_eq!(bounds.max, Point2D::new(2.0, 4.0));
        assert_eq!(rect.kind(), PlacementKind::Long);
    }
}
