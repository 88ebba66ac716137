//! Footprint rasterisation into full-canvas opacity masks

use crate::io::configuration::MAX_SUPERSAMPLING;
use crate::shapes::geometry::Footprint;
use ndarray::{Array2, s};

/// Per-pixel opacity in `[0, 1]`, indexed `(row, col)` over the whole canvas
pub type Mask = Array2<f32>;

/// Output canvas dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl CanvasSize {
    /// Create a canvas size
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Rasterise a footprint over the full canvas
///
/// Each pixel is sampled on a `samples x samples` sub-pixel grid and its
/// value is the fraction of samples inside the footprint. One sample per
/// pixel tests the pixel centre only, giving hard edges. `samples` is
/// clamped to `1..=MAX_SUPERSAMPLING`. Only pixels inside the footprint's
/// bounding box are sampled; all others stay zero.
pub fn rasterize(footprint: &Footprint, canvas: CanvasSize, samples: u32) -> Mask {
    let mut mask = Mask::zeros((canvas.height as usize, canvas.width as usize));
    let Some(bounds) = footprint.bounds() else {
        return mask;
    };

    let x0 = clamp_to_axis(bounds.left.floor(), canvas.width);
    let x1 = clamp_to_axis(bounds.right.ceil(), canvas.width);
    let y0 = clamp_to_axis(bounds.top.floor(), canvas.height);
    let y1 = clamp_to_axis(bounds.bottom.ceil(), canvas.height);
    if x0 >= x1 || y0 >= y1 {
        return mask;
    }

    let samples = samples.clamp(1, MAX_SUPERSAMPLING);
    let step = 1.0 / f64::from(samples);
    let total = f64::from(samples * samples);

    let mut window = mask.slice_mut(s![y0 as usize..y1 as usize, x0 as usize..x1 as usize]);
    for ((dy, dx), value) in window.indexed_iter_mut() {
        let px = f64::from(x0) + dx as f64;
        let py = f64::from(y0) + dy as f64;

        let mut hits = 0u32;
        for sy in 0..samples {
            let y = (f64::from(sy) + 0.5).mul_add(step, py);
            for sx in 0..samples {
                let x = (f64::from(sx) + 0.5).mul_add(step, px);
                if footprint.contains(x, y) {
                    hits += 1;
                }
            }
        }

        if hits > 0 {
            *value = (f64::from(hits) / total) as f32;
        }
    }

    mask
}

fn clamp_to_axis(coordinate: f64, limit: u32) -> u32 {
    if coordinate.is_nan() || coordinate <= 0.0 {
        0
    } else {
        (coordinate as u32).min(limit)
    }
}
