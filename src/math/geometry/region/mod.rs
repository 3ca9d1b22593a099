// src/math/geometry/region/mod.rs

//! Gültigkeitsbereiche für die Platzierung: "Darf an diesem Punkt gebaut werden?"
//!
//! Zwei Implementierungen hinter einem Trait:
//! - [`PolygonSetDomain`]: Nettofläche plus einzeln getestete Ausschlusspolygone (Ray-Casting).
//! - [`CombinedRegionDomain`]: eine vorab berechnete Region (Nettofläche minus Ausschlüsse)
//!   mit toleranter Enthaltenseins-Abfrage.
//!
//! Abseits von Rändern liefern beide dasselbe Ergebnis.

pub mod combined;
pub mod polygon_set;

pub use self::combined::CombinedRegionDomain;
pub use self::polygon_set::PolygonSetDomain;

use crate::math::error::MathResult;
use crate::math::types::{Bounds2D, Point2D};

/// Read-only Snapshot der bebaubaren Fläche für einen Layout-Lauf.
pub trait ValidityDomain {
    /// Bounding Box der Nettofläche. Fehler bedeutet: Geometrie nicht lesbar.
    fn bounds(&self) -> MathResult<Bounds2D>;

    /// Liegt der Punkt in der Nettofläche und außerhalb aller Ausschlüsse?
    fn is_point_valid(&self, point: Point2D) -> bool;

    /// Eckpunkt-Test für ein achsenparalleles Rechteck.
    ///
    /// Nur die vier Ecken werden geprüft. Ein Rechteck, dessen Ecken gültig sind, dessen
    /// Kanten aber über eine konkave Grenze hinausragen oder einen schmalen Ausschluss
    /// schneiden, gilt als gültig.
    fn is_rectangle_valid(&self, center: Point2D, length: f64, width: f64) -> bool {
        rectangle_corners(center, length, width)
            .into_iter()
            .all(|corner| self.is_point_valid(corner))
    }
}

impl<D: ValidityDomain + ?Sized> ValidityDomain for &D {
    fn bounds(&self) -> MathResult<Bounds2D> {
        (**self).bounds()
    }

    fn is_point_valid(&self, point: Point2D) -> bool {
        (**self).is_point_valid(point)
    }
}

impl<D: ValidityDomain + ?Sized> ValidityDomain for Box<D> {
    fn bounds(&self) -> MathResult<Bounds2D> {
        (**self).bounds()
    }

    fn is_point_valid(&self, point: Point2D) -> bool {
        (**self).is_point_valid(point)
    }
}

/// Ecken eines Rechtecks mit Länge in Y und Breite in X, in der Reihenfolge
/// unten-links, unten-rechts, oben-rechts, oben-links.
pub fn rectangle_corners(center: Point2D, length: f64, width: f64) -> [Point2D; 4] {
    let half_len = length / 2.0;
    let half_wid = width / 2.0;
    [
        Point2D::new(center.x - half_wid, center.y - half_len),
        Point2D::new(center.x + half_wid, center.y - half_len),
        Point2D::new(center.x + half_wid, center.y + half_len),
        Point2D::new(center.x - half_wid, center.y + half_len),
    ]
}
