// src/lib.rs

//! Greedy placement of rectangular trackers on a buildable net area with exclusion zones.

pub mod debug;
pub mod layout;
pub mod math;

pub mod prelude {
    pub use crate::layout::{
        ContainmentStrategy, GridScanner, LayoutConfig, LayoutError, LayoutInput, LayoutResult,
        PlacementKind, PlacementRectangle, TrackerSpec, layout, run_layout,
    };
    pub use crate::math::prelude::*;
}
