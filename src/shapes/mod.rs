//! Stamp shapes and their rasterisation into opacity masks

/// Continuous footprints and vertex construction
pub mod geometry;
/// Shape enum, factory and record conversion
pub mod kind;
/// Per-variant configuration structs
pub mod params;
/// Footprint to mask rasterisation
pub mod raster;

pub use geometry::{CellPlacement, Footprint};
pub use kind::{SHAPE_NAMES, Shape};
pub use raster::{CanvasSize, Mask};
