// src/math/types/mod.rs
pub mod bounds;

pub use bounds::*;

// Re-export häufig verwendete externe Typen
pub use glam::DVec2;

// Einheitliche Typen für das gesamte Modul.
// Doppelte Genauigkeit, da Parzellenkoordinaten (UTM o.ä.) schnell sechsstellig werden.
pub type Point2D = DVec2;

/// Konvertiert einen Punkt in eine `geo`-Koordinate.
pub fn to_geo_coord(point: Point2D) -> geo::Coord<f64> {
    geo::Coord {
        x: point.x,
        y: point.y,
    }
}

/// Konvertiert eine `geo`-Koordinate zurück in einen Punkt.
pub fn from_geo_coord(coord: geo::Coord<f64>) -> Point2D {
    Point2D::new(coord.x, coord.y)
}
