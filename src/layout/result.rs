// src/layout/result.rs
use crate::layout::placement::PlacementRectangle;
use crate::layout::tracker::PlacementKind;
use serde::Serialize;
use std::fmt;

/// Sammelt Platzierungen während eines Scans. Nur Anhängen, kein Entfernen.
#[derive(Debug, Default)]
pub struct LayoutAccumulator {
    placements: Vec<PlacementRectangle>,
    long_count: usize,
    short_count: usize,
}

impl LayoutAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, placement: PlacementRectangle) {
        match placement.kind() {
            PlacementKind::Long => self.long_count += 1,
            PlacementKind::Short => self.short_count += 1,
        }
        self.placements.push(placement);
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Schließt den Lauf ab; die Gesamtzahl wird genau hier berechnet.
    pub fn finish(self, clearance_ns: f64) -> LayoutResult {
        LayoutResult {
            clearance_ns,
            total_count: self.long_count + self.short_count,
            long_count: self.long_count,
            short_count: self.short_count,
            placements: self.placements,
        }
    }
}

/// Unveränderliches Ergebnis eines Layout-Laufs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutResult {
    clearance_ns: f64,
    total_count: usize,
    long_count: usize,
    short_count: usize,
    placements: Vec<PlacementRectangle>,
}

impl LayoutResult {
    pub fn clearance_ns(&self) -> f64 {
        self.clearance_ns
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn long_count(&self) -> usize {
        self.long_count
    }

    pub fn short_count(&self) -> usize {
        self.short_count
    }

    /// Platzierungen in Scan-Reihenfolge (Spalte für Spalte, jeweils von Süd nach Nord).
    pub fn placements(&self) -> &[PlacementRectangle] {
        &self.placements
    }

    pub fn placements_of(&self, kind: PlacementKind) -> impl Iterator<Item = &PlacementRectangle> {
        self.placements.iter().filter(move |p| p.kind() == kind)
    }

    /// Erfolgreicher Lauf ohne eine einzige Platzierung.
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}

impl fmt::Display for LayoutResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Layout summary")?;
        writeln!(f, "  N-S clearance: {:.2}", self.clearance_ns)?;
        writeln!(f, "  Total trackers: {}", self.total_count)?;
        writeln!(f, "  Long trackers: {}", self.long_count)?;
        write!(f, "  Short trackers: {}", self.short_count)
    }
}
