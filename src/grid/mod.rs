//! Grid planning, canvas layout and source sampling
//!
//! This module contains the grid-side stages of a reconstruction:
//! - Choosing a column/row count from a shape budget
//! - Partitioning the source image and averaging cell colours
//! - Deriving the canvas layout from sampled cells

/// Grid cells and pixel rectangles
pub mod cell;
/// Canvas offsets derived from cell sizes
pub mod layout;
/// Column/row planning from a shape budget
pub mod planner;
/// Image partition and colour averaging
pub mod sampling;

pub use cell::{CellBounds, GridCell, PixelRect};
pub use layout::GridLayout;
pub use planner::{GridSpec, plan_grid};
