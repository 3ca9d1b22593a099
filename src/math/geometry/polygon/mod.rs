// src/math/geometry/polygon/mod.rs

// Deklaration der Untermodule für Polygon-spezifische Funktionalität
pub mod builder;
pub mod core; // Enthält die Polygon-Struktur selbst
pub mod properties; // Punkt-in-Polygon, Fläche
pub mod tessellation; // Bogenlängen-Abtastung von Grenzlinien
pub mod validation;

// Re-Exporte für den einfachen Zugriff auf die wichtigsten Polygon-Elemente
pub use self::builder::{PolygonBuilder, ShapeGenerators};
pub use self::core::Polygon;
pub use self::properties::{PointLocation, PolygonProperties, classify_point, ray_cast};
pub use self::tessellation::Tessellator;
pub use self::validation::PolygonValidator;
