// src/math/geometry/region/polygon_set.rs

use crate::math::error::{MathError, MathResult};
use crate::math::geometry::polygon::{Polygon, PolygonProperties};
use crate::math::geometry::region::ValidityDomain;
use crate::math::types::{Bounds2D, Point2D};

/// Nettofläche plus Ausschlusspolygone, jeweils per Ray-Casting getestet.
///
/// Randkonvention: Punkte auf dem Rand der Nettofläche sind gültig, Punkte auf dem Rand
/// eines Ausschlusses ebenfalls (nur das Innere eines Ausschlusses ist gesperrt). Damit ist
/// die bebaubare Menge abgeschlossen, genau wie bei [`super::CombinedRegionDomain`].
#[derive(Debug, Clone)]
pub struct PolygonSetDomain {
    net_area: Polygon,
    exclusions: Vec<(Polygon, Bounds2D)>,
}

impl PolygonSetDomain {
    pub fn new(net_area: Polygon, exclusions: Vec<Polygon>) -> Self {
        let exclusions = exclusions
            .into_iter()
            .map(|polygon| {
                let bounds = polygon.bounds();
                (polygon, bounds)
            })
            .collect();

        Self {
            net_area,
            exclusions,
        }
    }

    pub fn net_area(&self) -> &Polygon {
        &self.net_area
    }

    pub fn exclusions(&self) -> impl Iterator<Item = &Polygon> {
        self.exclusions.iter().map(|(polygon, _)| polygon)
    }

    pub fn exclusion_count(&self) -> usize {
        self.exclusions.len()
    }
}

impl ValidityDomain for PolygonSetDomain {
    fn bounds(&self) -> MathResult<Bounds2D> {
        let bounds = self.net_area.bounds();
        if !bounds.is_valid() {
            return Err(MathError::GeometricFailure {
                operation: format!("net area bounds are not finite: {bounds}"),
            });
        }
        Ok(bounds)
    }

    fn is_point_valid(&self, point: Point2D) -> bool {
        // Bedingung 1: in der Nettofläche
        if !self.net_area.contains_point(point) {
            return false;
        }

        // Bedingung 2: in keinem Ausschluss; erster Treffer entscheidet
        !self.exclusions.iter().any(|(exclusion, bounds)| {
            bounds.contains_point(point) && exclusion.interior_contains_point(point)
        })
    }
}
