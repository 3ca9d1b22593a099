// src/math/geometry/mod.rs

// Deklaration der Haupt-Geometriemodule
pub mod polygon;
pub mod region;

// Polygon-Exporte
pub use self::polygon::{
    PointLocation, Polygon, PolygonBuilder, PolygonProperties, PolygonValidator,
    ShapeGenerators, Tessellator,
};

// Regions-Exporte
pub use self::region::{CombinedRegionDomain, PolygonSetDomain, ValidityDomain};
