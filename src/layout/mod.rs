// src/layout/mod.rs

//! Platzierung von Trackern auf einer Nettofläche per gierigem Spalten-Scan.

pub mod config;
pub mod error;
pub mod input;
pub mod placement;
pub mod result;
pub mod scanner;
pub mod tracker;

pub use self::config::LayoutConfig;
pub use self::error::LayoutError;
pub use self::input::{ContainmentStrategy, LayoutInput, run_layout};
pub use self::placement::PlacementRectangle;
pub use self::result::{LayoutAccumulator, LayoutResult};
pub use self::scanner::{GridScanner, layout};
pub use self::tracker::{PlacementKind, TrackerSpec};
