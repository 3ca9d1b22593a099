// src/layout/scanner.rs
use crate::layout::config::LayoutConfig;
use crate::layout::error::LayoutError;
use crate::layout::placement::PlacementRectangle;
use crate::layout::result::{LayoutAccumulator, LayoutResult};
use crate::layout::tracker::{PlacementKind, TrackerSpec};
use crate::math::geometry::region::ValidityDomain;
use crate::math::types::Point2D;
use tracing::{debug, info, warn};

/// Gieriger Spalten-Scan: pro Spalte von Süd nach Nord zuerst den langen Tracker
/// versuchen, dann den kurzen, sonst um den Fallback-Schritt vorrücken.
///
/// Die Schrittweite in Y hängt davon ab, was platziert wurde; es ist kein festes Raster.
#[derive(Debug, Clone, Copy)]
pub struct GridScanner {
    tracker: TrackerSpec,
    config: LayoutConfig,
}

impl GridScanner {
    /// Prüft Tracker und Konfiguration, bevor irgendein Scan beginnt.
    pub fn new(tracker: TrackerSpec, config: LayoutConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        tracker.validate()?;
        Ok(Self { tracker, config })
    }

    pub fn tracker(&self) -> &TrackerSpec {
        &self.tracker
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn scan<D>(&self, domain: &D) -> Result<LayoutResult, LayoutError>
    where
        D: ValidityDomain + ?Sized,
    {
        let bounds = domain.bounds()?;
        info!(
            "Starting layout scan over {} (pitch {}, N-S clearance {}, tracker {}x{}/{})",
            bounds,
            self.config.pitch,
            self.config.clearance_ns,
            self.tracker.width_ns,
            self.tracker.length_long,
            self.tracker.length_short
        );

        let mut accumulator = LayoutAccumulator::new();
        let mut x = bounds.min.x;
        while x < bounds.max.x {
            let placed_before = accumulator.len();
            let mut y = bounds.min.y;
            while y < bounds.max.y {
                let step = self.place_at(domain, x, y, &mut accumulator);
                y = advance('y', y, step)?;
            }
            debug!(
                "Column x = {:.3}: {} placements",
                x,
                accumulator.len() - placed_before
            );
            x = advance('x', x, self.config.pitch)?;
        }

        let result = accumulator.finish(self.config.clearance_ns);
        if result.is_empty() {
            warn!("Layout scan finished without placing a single tracker");
        } else {
            info!(
                "Layout scan finished: {} trackers ({} long, {} short)",
                result.total_count(),
                result.long_count(),
                result.short_count()
            );
        }
        Ok(result)
    }

    /// Versucht eine Platzierung mit Unterkante `y` und liefert den Vorschub in Y.
    fn place_at<D: ValidityDomain + ?Sized>(
        &self,
        domain: &D,
        x: f64,
        y: f64,
        accumulator: &mut LayoutAccumulator,
    ) -> f64 {
        if let Some(placement) = self.candidate(domain, x, y, PlacementKind::Long) {
            accumulator.push(placement);
            return self.tracker.length_long + self.config.clearance_ns;
        }

        if self.tracker.has_short_variant(self.config.min_short_length) {
            if let Some(placement) = self.candidate(domain, x, y, PlacementKind::Short) {
                accumulator.push(placement);
                return self.tracker.length_short + self.config.clearance_ns;
            }
        }

        self.config.fallback_step
    }

    fn candidate<D: ValidityDomain + ?Sized>(
        &self,
        domain: &D,
        x: f64,
        y: f64,
        kind: PlacementKind,
    ) -> Option<PlacementRectangle> {
        let length = self.tracker.length(kind);
        let width = self.tracker.width_ns;
        let center = Point2D::new(x + width / 2.0, y + length / 2.0);

        domain
            .is_rectangle_valid(center, length, width)
            .then(|| PlacementRectangle::new(center, length, width, kind))
    }
}

/// Einstiegspunkt für einen einzelnen Layout-Lauf.
pub fn layout<D: ValidityDomain + ?Sized>(
    domain: &D,
    tracker: &TrackerSpec,
    config: &LayoutConfig,
) -> Result<LayoutResult, LayoutError> {
    GridScanner::new(*tracker, *config)?.scan(domain)
}

/// Rückt einen Cursor vor; bleibt er stehen, wird der Lauf abgebrochen.
fn advance(axis: char, position: f64, step: f64) -> Result<f64, LayoutError> {
    let next = position + step;
    if next > position {
        Ok(next)
    } else {
        Err(LayoutError::Stalled { axis, position })
    }
}
