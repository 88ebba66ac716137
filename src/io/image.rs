//! Image loading, saving and the grayscale pre-filter

use crate::io::error::{MosaicError, Result};
use image::{DynamicImage, RgbImage};
use std::path::Path;

/// Decode an image file into 8-bit RGB
///
/// # Errors
///
/// Returns [`MosaicError::ImageLoad`] if the file cannot be opened or decoded
pub fn load_rgb_image(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|e| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgb8())
}

/// Save an image, creating parent directories as needed
///
/// The format follows the path's extension.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_image(image: &RgbImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image.save(path).map_err(|e| MosaicError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Replace each pixel by its luma, keeping three channels
pub fn to_grayscale(image: &RgbImage) -> RgbImage {
    DynamicImage::ImageLuma8(image::imageops::grayscale(image)).to_rgb8()
}
