//! Compositing and fidelity measurement

/// Weighted mask accumulation into the output image
pub mod compositor;
/// Mean squared error between images
pub mod fidelity;

pub use compositor::{MosaicCompositor, render};
pub use fidelity::{image_mse, mean_squared_error};
