// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    /// Toleranz für Punkt-auf-Kante-Tests (in Koordinateneinheiten, i.d.R. Meter)
    pub const EPSILON: f64 = 1e-9;
    pub const EPSILON_SQUARED: f64 = EPSILON * EPSILON;
    /// Toleranz der Regionsabfrage, fängt Rundungsrauschen der Boolean-Operation ab
    pub const REGION_TOLERANCE: f64 = 1e-6;
    /// Abtastschritt entlang gekrümmter Grenzen
    pub const TESSELLATION_STEP: f64 = 0.5;
}

/// Vergleichsfunktionen mit Toleranz
pub mod comparison {
    use super::constants::EPSILON;

    /// Prüft ob Float (nahezu) Null ist
    pub fn nearly_zero(a: f64) -> bool {
        a.abs() < EPSILON
    }

    /// Lineare Interpolation
    pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
        a + (b - a) * t
    }
}

/// Abstands-Hilfsfunktionen
pub mod distance {
    use crate::math::types::Point2D;

    /// Kürzester Abstand eines Punktes zu einem Liniensegment.
    /// Entartete Segmente (Länge ~0) werden wie ein Punkt behandelt.
    pub fn point_segment_distance(point: Point2D, start: Point2D, end: Point2D) -> f64 {
        let segment = end - start;
        let length_squared = segment.length_squared();
        if length_squared <= f64::EPSILON {
            return point.distance(start);
        }

        let t = ((point - start).dot(segment) / length_squared).clamp(0.0, 1.0);
        point.distance(start + segment * t)
    }
}
