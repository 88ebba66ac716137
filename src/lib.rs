//! Stylised image reconstruction from overlapping, colour-blended shapes
//!
//! A source image is split into a grid of cells, each cell gets its mean
//! colour, and the output is rebuilt by stamping one shape per cell. Shapes
//! bleed into their neighbours and overlapping coverage is averaged by mask
//! weight, giving a soft mosaic whose fidelity is measured by mean squared
//! error against the source.

#![deny(unsafe_code)]

/// Grid planning, canvas layout and colour sampling
pub mod grid;
/// File handling, command-line interface and error types
pub mod io;
/// Mask compositing and fidelity measurement
pub mod render;
/// Stamp shapes and mask rasterisation
pub mod shapes;

pub use grid::{GridCell, GridLayout, GridSpec, plan_grid};
pub use io::error::{MosaicError, Result};
pub use render::{MosaicCompositor, mean_squared_error, render};
pub use shapes::Shape;
