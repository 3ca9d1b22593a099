// src/layout/config.rs
use crate::layout::error::LayoutError;
use serde::{Deserialize, Serialize};

/// Parameter eines Layout-Laufs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Achsabstand der Reihen in Ost-West-Richtung (X).
    pub pitch: f64,
    /// Freier Abstand zwischen zwei Trackern einer Reihe in Nord-Süd-Richtung (Y).
    pub clearance_ns: f64,
    /// Vorschub in Y, wenn weder der lange noch der kurze Tracker passt.
    pub fallback_step: f64,
    /// Kurze Tracker bis zu dieser Länge gelten als nicht vorhanden.
    pub min_short_length: f64,
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pitch(mut self, pitch: f64) -> Self {
        self.pitch = pitch;
        self
    }

    pub fn with_clearance_ns(mut self, clearance_ns: f64) -> Self {
        self.clearance_ns = clearance_ns;
        self
    }

    pub fn with_fallback_step(mut self, fallback_step: f64) -> Self {
        self.fallback_step = fallback_step;
        self
    }

    pub fn with_min_short_length(mut self, min_short_length: f64) -> Self {
        self.min_short_length = min_short_length;
        self
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.pitch.is_finite() || self.pitch <= 0.0 {
            return Err(LayoutError::Configuration {
                message: format!("Pitch must be positive, got {}", self.pitch),
            });
        }

        if !self.clearance_ns.is_finite() || self.clearance_ns < 0.0 {
            return Err(LayoutError::Configuration {
                message: format!("N-S clearance must not be negative, got {}", self.clearance_ns),
            });
        }

        if !self.fallback_step.is_finite() || self.fallback_step <= 0.0 {
            return Err(LayoutError::Configuration {
                message: format!("Fallback step must be positive, got {}", self.fallback_step),
            });
        }

        if !self.min_short_length.is_finite() || self.min_short_length < 0.0 {
            return Err(LayoutError::Configuration {
                message: format!(
                    "Minimum short length must not be negative, got {}",
                    self.min_short_length
                ),
            });
        }

        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            pitch: 10.0,
            clearance_ns: 0.5,
            fallback_step: 1.0,
            min_short_length: 0.01,
        }
    }
}
