//! Mean squared error between a source image and its reconstruction

use crate::io::error::{MosaicError, Result, computation_error};
use image::RgbImage;
use ndarray::{Array3, ArrayBase, Data, Dimension, Zip};
use num_traits::AsPrimitive;

/// Mean of squared element differences, computed in `f64`
///
/// Works on any two arrays of the same dimensionality and numeric element
/// type. Empty arrays of equal shape compare as `0.0`.
///
/// # Errors
///
/// Returns [`MosaicError::ShapeMismatch`] when the array shapes differ
pub fn mean_squared_error<A, S1, S2, D>(a: &ArrayBase<S1, D>, b: &ArrayBase<S2, D>) -> Result<f64>
where
    A: AsPrimitive<f64>,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    D: Dimension,
{
    if a.shape() != b.shape() {
        return Err(MosaicError::ShapeMismatch {
            left: a.shape().to_vec(),
            right: b.shape().to_vec(),
        });
    }
    if a.is_empty() {
        return Ok(0.0);
    }

    let total = Zip::from(a).and(b).fold(0.0_f64, |acc, &x, &y| {
        let diff = x.as_() - y.as_();
        diff.mul_add(diff, acc)
    });
    Ok(total / a.len() as f64)
}

/// View an RGB image as a `(height, width, 3)` array
///
/// # Errors
///
/// Returns [`MosaicError::Computation`] if the pixel buffer does not match
/// the image dimensions
pub fn image_array(image: &RgbImage) -> Result<Array3<u8>> {
    let (width, height) = image.dimensions();
    Array3::from_shape_vec(
        (height as usize, width as usize, 3),
        image.as_raw().clone(),
    )
    .map_err(|e| computation_error("image_array", &e))
}

/// Mean squared error between two RGB images
///
/// # Errors
///
/// Returns [`MosaicError::ShapeMismatch`] when the image sizes differ
pub fn image_mse(source: &RgbImage, reconstruction: &RgbImage) -> Result<f64> {
    mean_squared_error(&image_array(source)?, &image_array(reconstruction)?)
}
