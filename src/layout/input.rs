// src/layout/input.rs
use crate::layout::config::LayoutConfig;
use crate::layout::error::LayoutError;
use crate::layout::result::LayoutResult;
use crate::layout::scanner::GridScanner;
use crate::layout::tracker::TrackerSpec;
use crate::math::geometry::polygon::Polygon;
use crate::math::geometry::region::{CombinedRegionDomain, PolygonSetDomain, ValidityDomain};
use crate::math::types::Point2D;
use crate::math::utils::constants;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Welche Implementierung des Gültigkeitsbereichs gebaut wird.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum ContainmentStrategy {
    /// Ray-Casting gegen Nettofläche und jeden Ausschluss einzeln.
    #[default]
    PolygonSet,
    /// Vorab berechnete Differenz mit toleranter Abfrage.
    CombinedRegion { tolerance: f64 },
}

impl ContainmentStrategy {
    pub fn combined() -> Self {
        ContainmentStrategy::CombinedRegion {
            tolerance: constants::REGION_TOLERANCE,
        }
    }

    /// Die Toleranz ist ein Parameter, kein Geometriefehler.
    pub fn validate(&self) -> Result<(), LayoutError> {
        match *self {
            ContainmentStrategy::PolygonSet => Ok(()),
            ContainmentStrategy::CombinedRegion { tolerance } => {
                if !tolerance.is_finite() || tolerance < 0.0 {
                    return Err(LayoutError::Configuration {
                        message: format!("Region tolerance must be non-negative, got {tolerance}"),
                    });
                }
                Ok(())
            }
        }
    }
}

/// Normalisierte Eingabegeometrie eines Laufs.
#[derive(Debug, Clone)]
pub struct LayoutInput {
    net_area: Polygon,
    exclusions: Vec<Polygon>,
    skipped_exclusions: usize,
}

impl LayoutInput {
    /// Schließt offene Ringe. Eine unbrauchbare Nettofläche ist fatal, unbrauchbare
    /// Ausschlüsse werden übersprungen.
    pub fn from_rings<R>(
        net_area_ring: &[Point2D],
        exclusion_rings: &[R],
    ) -> Result<Self, LayoutError>
    where
        R: AsRef<[Point2D]>,
    {
        let net_area = Polygon::closed(net_area_ring.to_vec())?;

        let mut exclusions = Vec::with_capacity(exclusion_rings.len());
        let mut skipped_exclusions = 0;
        for (index, ring) in exclusion_rings.iter().enumerate() {
            match Polygon::closed(ring.as_ref().to_vec()) {
                Ok(polygon) => exclusions.push(polygon),
                Err(err) => {
                    warn!("Skipping exclusion #{}: {}", index, err);
                    skipped_exclusions += 1;
                }
            }
        }

        debug!(
            "Prepared layout input: net area with {} vertices, {} exclusions ({} skipped)",
            net_area.unique_vertices().len(),
            exclusions.len(),
            skipped_exclusions
        );

        Ok(Self {
            net_area,
            exclusions,
            skipped_exclusions,
        })
    }

    pub fn net_area(&self) -> &Polygon {
        &self.net_area
    }

    pub fn exclusions(&self) -> &[Polygon] {
        &self.exclusions
    }

    pub fn skipped_exclusions(&self) -> usize {
        self.skipped_exclusions
    }

    pub fn build_domain(
        &self,
        strategy: ContainmentStrategy,
    ) -> Result<Box<dyn ValidityDomain>, LayoutError> {
        strategy.validate()?;
        let domain: Box<dyn ValidityDomain> = match strategy {
            ContainmentStrategy::PolygonSet => Box::new(PolygonSetDomain::new(
                self.net_area.clone(),
                self.exclusions.clone(),
            )),
            ContainmentStrategy::CombinedRegion { tolerance } => Box::new(
                CombinedRegionDomain::from_polygons(&self.net_area, &self.exclusions)?
                    .with_tolerance(tolerance)
                    .map_err(|err| LayoutError::Configuration {
                        message: err.to_string(),
                    })?,
            ),
        };
        Ok(domain)
    }
}

/// Kompletter Lauf aus Rohringen: Parameter prüfen, Geometrie normalisieren, scannen.
pub fn run_layout<R>(
    net_area_ring: &[Point2D],
    exclusion_rings: &[R],
    tracker: &TrackerSpec,
    config: &LayoutConfig,
    strategy: ContainmentStrategy,
) -> Result<LayoutResult, LayoutError>
where
    R: AsRef<[Point2D]>,
{
    let scanner = GridScanner::new(*tracker, *config)?;
    strategy.validate()?;
    let input = LayoutInput::from_rings(net_area_ring, exclusion_rings)?;
    let domain = input.build_domain(strategy)?;
    scanner.scan(&domain)
}
