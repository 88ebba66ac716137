//! Weighted blending of overlapping shape masks into an RGB image
//!
//! Every cell adds `mask * colour` to a colour sum and `mask` to a weight
//! sum. The image is resolved once at the end by dividing the two, so
//! overlapping shapes average by coverage instead of painting over each
//! other, and the result does not depend on the order of the cells.

use crate::grid::cell::GridCell;
use crate::grid::layout::GridLayout;
use crate::io::configuration::{DEFAULT_SUPERSAMPLING, MAX_SUPERSAMPLING, WEIGHT_FLOOR};
use crate::io::error::{Result, invalid_parameter};
use crate::shapes::geometry::CellPlacement;
use crate::shapes::kind::Shape;
use crate::shapes::raster::{CanvasSize, Mask};
use image::{Rgb, RgbImage};
use ndarray::{Array2, Array3, Axis};

/// Renders sampled cells with one configured shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MosaicCompositor {
    shape: Shape,
    supersampling: u32,
}

impl MosaicCompositor {
    /// Compositor with hard-edged masks
    pub const fn new(shape: Shape) -> Self {
        Self {
            shape,
            supersampling: DEFAULT_SUPERSAMPLING,
        }
    }

    /// Use `samples x samples` coverage sampling per pixel
    ///
    /// # Errors
    ///
    /// Returns [`crate::MosaicError::InvalidParameter`] unless
    /// `1 <= samples <= MAX_SUPERSAMPLING`
    pub fn with_supersampling(mut self, samples: u32) -> Result<Self> {
        if !(1..=MAX_SUPERSAMPLING).contains(&samples) {
            return Err(invalid_parameter(
                "supersampling",
                &samples,
                &format!("must be between 1 and {MAX_SUPERSAMPLING}"),
            ));
        }
        self.supersampling = samples;
        Ok(self)
    }

    /// Shape stamped on every cell
    pub const fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Sub-pixel samples per axis
    pub const fn supersampling(&self) -> u32 {
        self.supersampling
    }

    /// Render cells onto a `width x height` canvas
    pub fn render(&self, cells: &[GridCell], width: u32, height: u32) -> RgbImage {
        self.render_with_progress(cells, width, height, |_| {})
    }

    /// Render cells, reporting the number of cells handled after each one
    ///
    /// An empty cell list yields a black canvas. Cells whose clipped canvas
    /// rectangle is empty are skipped but still counted.
    pub fn render_with_progress<F>(
        &self,
        cells: &[GridCell],
        width: u32,
        height: u32,
        mut on_cell: F,
    ) -> RgbImage
    where
        F: FnMut(usize),
    {
        if cells.is_empty() {
            return RgbImage::new(width, height);
        }

        let canvas = CanvasSize::new(width, height);
        let layout = GridLayout::from_cells(cells);
        let mut buffer = AccumulationBuffer::new(canvas);

        for (done, cell) in cells.iter().enumerate() {
            match layout
                .cell_rect(cell, width, height)
                .filter(|rect| !rect.is_empty())
            {
                Some(rect) => {
                    let placement = CellPlacement::from_rect(&rect, cell.row);
                    let mask = self.shape.create_mask_supersampled(
                        canvas,
                        &placement,
                        self.supersampling,
                    );
                    buffer.accumulate(&mask, cell.color);
                }
                None => {
                    log::debug!(
                        "skipping cell ({}, {}): empty on {width}x{height} canvas",
                        cell.row,
                        cell.col
                    );
                }
            }
            on_cell(done + 1);
        }

        buffer.into_image()
    }
}

/// Render cells with a default-configured shape chosen by name
///
/// # Errors
///
/// Returns [`crate::MosaicError::InvalidShapeType`] for an unknown shape name
pub fn render(cells: &[GridCell], width: u32, height: u32, shape_type: &str) -> Result<RgbImage> {
    let shape = Shape::from_name(shape_type)?;
    Ok(MosaicCompositor::new(shape).render(cells, width, height))
}

struct AccumulationBuffer {
    color_sum: Array3<f32>,
    weight_sum: Array2<f32>,
}

impl AccumulationBuffer {
    fn new(canvas: CanvasSize) -> Self {
        let (rows, cols) = (canvas.height as usize, canvas.width as usize);
        Self {
            color_sum: Array3::zeros((rows, cols, 3)),
            weight_sum: Array2::zeros((rows, cols)),
        }
    }

    fn accumulate(&mut self, mask: &Mask, color: [u8; 3]) {
        for (channel, &value) in color.iter().enumerate() {
            self.color_sum
                .index_axis_mut(Axis(2), channel)
                .scaled_add(f32::from(value), mask);
        }
        self.weight_sum += mask;
    }

    fn into_image(mut self) -> RgbImage {
        self.weight_sum.mapv_inplace(|w| w.max(WEIGHT_FLOOR));
        let (rows, cols) = self.weight_sum.dim();
        let normalized = &self.color_sum / &self.weight_sum.insert_axis(Axis(2));

        RgbImage::from_fn(cols as u32, rows as u32, |x, y| {
            let (row, col) = (y as usize, x as usize);
            Rgb(std::array::from_fn(|channel| {
                normalized
                    .get((row, col, channel))
                    .copied()
                    .map_or(0, to_channel)
            }))
        })
    }
}

fn to_channel(value: f32) -> u8 {
    value.clamp(0.0, 255.0).round() as u8
}
