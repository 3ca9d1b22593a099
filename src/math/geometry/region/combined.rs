// src/math/geometry/region/combined.rs

use crate::math::error::{MathError, MathResult};
use crate::math::geometry::polygon::Polygon;
use crate::math::geometry::region::ValidityDomain;
use crate::math::types::{Bounds2D, Point2D, from_geo_coord, to_geo_coord};
use crate::math::utils::{constants, distance};
use geo::{BooleanOps, BoundingRect, Contains, MultiPolygon};

/// Vorab kombinierte Region (Nettofläche minus Ausschlüsse) mit einer einzigen
/// Enthaltenseins-Abfrage pro Punkt.
///
/// Die Boolean-Differenz übernimmt `geo`. Punkte im Abstand `tolerance` zum Rand der
/// Region gelten als enthalten, um Rundungsrauschen der Differenzbildung abzufangen.
#[derive(Debug, Clone)]
pub struct CombinedRegionDomain {
    region: MultiPolygon<f64>,
    bounds: Bounds2D,
    tolerance: f64,
}

impl CombinedRegionDomain {
    /// Bildet `net_area - exclusions[0] - exclusions[1] - ...` mit Standardtoleranz.
    pub fn from_polygons(net_area: &Polygon, exclusions: &[Polygon]) -> MathResult<Self> {
        let mut region = MultiPolygon::new(vec![net_area.to_geo()]);
        for exclusion in exclusions {
            region = region.difference(&exclusion.to_geo());
        }

        Ok(Self {
            region,
            bounds: net_area.bounds(),
            tolerance: constants::REGION_TOLERANCE,
        })
    }

    /// Übernimmt eine bereits berechnete Region; die Bounding Box stammt aus der Region.
    pub fn from_region(region: MultiPolygon<f64>) -> MathResult<Self> {
        let rect = region
            .bounding_rect()
            .ok_or_else(|| MathError::GeometricFailure {
                operation: "bounding box of empty region".to_string(),
            })?;

        Ok(Self {
            bounds: Bounds2D::from_points(from_geo_coord(rect.min()), from_geo_coord(rect.max())),
            region,
            tolerance: constants::REGION_TOLERANCE,
        })
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> MathResult<Self> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(MathError::InvalidConfiguration {
                message: format!("Region tolerance must be non-negative, got {tolerance}"),
            });
        }
        self.tolerance = tolerance;
        Ok(self)
    }

    pub fn region(&self) -> &MultiPolygon<f64> {
        &self.region
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Liegt der Punkt höchstens `tolerance` vom Rand der Region entfernt?
    fn is_near_boundary(&self, point: Point2D) -> bool {
        self.region
            .iter()
            .flat_map(|polygon| std::iter::once(polygon.exterior()).chain(polygon.interiors()))
            .flat_map(|ring| ring.lines())
            .any(|line| {
                distance::point_segment_distance(
                    point,
                    from_geo_coord(line.start),
                    from_geo_coord(line.end),
                ) <= self.tolerance
            })
    }
}

impl ValidityDomain for CombinedRegionDomain {
    fn bounds(&self) -> MathResult<Bounds2D> {
        if !self.bounds.is_valid() {
            return Err(MathError::GeometricFailure {
                operation: format!("region bounds are not finite: {}", self.bounds),
            });
        }
        Ok(self.bounds)
    }

    fn is_point_valid(&self, point: Point2D) -> bool {
        if !self.bounds.expand(self.tolerance).contains_point(point) {
            return false;
        }
        let geo_point = geo::Point::from(to_geo_coord(point));
        self.region.contains(&geo_point) || self.is_near_boundary(point)
    }
}
