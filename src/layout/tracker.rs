// src/layout/tracker.rs
use crate::layout::error::LayoutError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Footprint eines Trackers: eine Breite (X), zwei mögliche Längen (Y).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackerSpec {
    /// Breite quer zur Nord-Süd-Achse.
    pub width_ns: f64,
    pub length_long: f64,
    /// Länge der kurzen Variante; 0 deaktiviert sie.
    pub length_short: f64,
}

impl TrackerSpec {
    pub fn new(width_ns: f64, length_long: f64, length_short: f64) -> Result<Self, LayoutError> {
        let spec = Self {
            width_ns,
            length_long,
            length_short,
        };
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.width_ns.is_finite() || self.width_ns <= 0.0 {
            return Err(LayoutError::Configuration {
                message: format!("Tracker width must be positive, got {}", self.width_ns),
            });
        }
        if !self.length_long.is_finite() || self.length_long <= 0.0 {
            return Err(LayoutError::Configuration {
                message: format!("Long tracker length must be positive, got {}", self.length_long),
            });
        }
        if !self.length_short.is_finite() || self.length_short < 0.0 {
            return Err(LayoutError::Configuration {
                message: format!(
                    "Short tracker length must not be negative, got {}",
                    self.length_short
                ),
            });
        }
        Ok(())
    }

    /// Ist die kurze Variante nutzbar (Länge über dem Schwellwert)?
    pub fn has_short_variant(&self, min_short_length: f64) -> bool {
        self.length_short > min_short_length
    }

    pub fn length(&self, kind: PlacementKind) -> f64 {
        match kind {
            PlacementKind::Long => self.length_long,
            PlacementKind::Short => self.length_short,
        }
    }
}

/// Variante eines platzierten Trackers; bestimmt nur das Styling beim Zeichnen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementKind {
    Long,
    Short,
}

impl PlacementKind {
    /// Ziel-Layer im Host-Dokument.
    pub fn layer_name(self) -> &'static str {
        match self {
            PlacementKind::Long => "TRACKERS_LONG",
            PlacementKind::Short => "TRACKERS_SHORT",
        }
    }

    /// Layer-Farbe als RGB.
    pub fn color(self) -> [u8; 3] {
        match self {
            PlacementKind::Long => [0, 100, 255],
            PlacementKind::Short => [255, 100, 0],
        }
    }

    /// Farbe als CSS-Hex-String, z.B. für SVG.
    pub fn color_hex(self) -> String {
        let [r, g, b] = self.color();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl fmt::Display for PlacementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementKind::Long => write!(f, "long"),
            PlacementKind::Short => write!(f, "short"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_tracker() {
        let spec = TrackerSpec::new(2.0, 4.0, 2.0).unwrap();
        assert!(spec.has_short_variant(0.01));
        assert_eq!(spec.length(PlacementKind::Long), 4.0);
        assert_eq!(spec.length(PlacementKind::Short), 2.0);
    }

    #[test]
    fn test_short_variant_threshold() {
        let spec = TrackerSpec::new(2.0, 4.0, 0.0).unwrap();
        assert!(!spec.has_short_variant(0.01));
        let tiny = TrackerSpec::new(2.0, 4.0, 0.01).unwrap();
        assert!(!tiny.has_short_variant(0.01));
    }

    #[test]
    fn test_invalid_specs() {
        assert!(TrackerSpec::new(0.0, 4.0, 2.0).is_err());
        assert!(TrackerSpec::new(2.0, 0.0, 2.0).is_err());
        assert!(TrackerSpec::new(2.0, 4.0, -1.0).is_err());
        assert!(TrackerSpec::new(f64::INFINITY, 4.0, 2.0).is_err());
    }

    #[test]
    fn test_kind_styling() {
        assert_eq!(PlacementKind::Long.layer_name(), "TRACKERS_LONG");
        assert_eq!(PlacementKind::Long.color_hex(), "#0064ff");
        assert_eq!(PlacementKind::Short.color_hex(), "#ff6400");
        assert_eq!(PlacementKind::Short.to_string(), "short");
    }

    #[test]
    fn test_deserialize_catalog_entry() {
        let json = r#"{ "width_ns": 2.4, "length_long": 45.0, "length_short": 22.5 }"#;
        let spec: TrackerSpec = serde_json::from_str(json).unwrap();
        assert!(spec.validate().is_ok());
        assert_eq!(spec.length_short, 22.5);
    }
}
