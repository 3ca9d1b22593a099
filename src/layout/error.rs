// src/layout/error.rs
use crate::math::error::MathError;
use thiserror::Error;

/// Fehler eines Layout-Laufs. Ein Fehler bedeutet immer: kein Ergebnis, auch kein teilweises.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Ungültige Parameter, vor dem Scan abgelehnt.
    #[error("Invalid layout configuration: {message}")]
    Configuration { message: String },

    /// Nettofläche oder Ausschlüsse nicht lesbar bzw. entartet.
    #[error("Input geometry error: {0}")]
    InputGeometry(#[from] MathError),

    /// Der Scan-Cursor kommt nicht mehr voran (Gleitkomma-Sättigung bei riesigen Koordinaten).
    #[error("Scan cursor stalled on {axis} axis at {position}")]
    Stalled { axis: char, position: f64 },
}
