//! Source partition and per-cell colour averaging

use crate::grid::cell::{CellBounds, GridCell, PixelRect};
use crate::io::error::{Result, invalid_grid};
use image::RgbImage;

/// Split a `width x height` image into `cols x rows` contiguous cells
///
/// Each span is `width / cols` pixels wide (at least one); the last column
/// absorbs the remainder of the integer division, and rows are split the
/// same way. Every pixel belongs to exactly one cell. Cells are returned in
/// row-major order.
///
/// # Errors
///
/// Returns [`crate::MosaicError::InvalidGridSpec`] when `cols` or `rows` is
/// zero or exceeds the image dimension it partitions
pub fn partition_cells(
    width: u32,
    height: u32,
    cols: usize,
    rows: usize,
) -> Result<Vec<CellBounds>> {
    let cols_i = i64::try_from(cols).unwrap_or(i64::MAX);
    let rows_i = i64::try_from(rows).unwrap_or(i64::MAX);
    if cols == 0 || rows == 0 {
        return Err(invalid_grid(
            cols_i,
            rows_i,
            &"columns and rows must be positive",
        ));
    }
    let (Ok(cols_u), Ok(rows_u)) = (u32::try_from(cols), u32::try_from(rows)) else {
        return Err(invalid_grid(cols_i, rows_i, &"grid exceeds the image size"));
    };
    if cols_u > width || rows_u > height {
        return Err(invalid_grid(
            cols_i,
            rows_i,
            &format!("grid exceeds the {width}x{height} image"),
        ));
    }

    let cell_width = (width / cols_u).max(1);
    let cell_height = (height / rows_u).max(1);

    let mut bounds = Vec::with_capacity(cols * rows);
    for row in 0..rows_u {
        let top = row * cell_height;
        let bottom = if row == rows_u - 1 {
            height
        } else {
            (row + 1) * cell_height
        };
        for col in 0..cols_u {
            let left = col * cell_width;
            let right = if col == cols_u - 1 {
                width
            } else {
                (col + 1) * cell_width
            };
            bounds.push(CellBounds {
                row: row as usize,
                col: col as usize,
                rect: PixelRect {
                    left,
                    top,
                    right,
                    bottom,
                },
            });
        }
    }

    Ok(bounds)
}

/// Partition an image and give each cell its mean colour
///
/// Channel means are rounded to the nearest byte.
///
/// # Errors
///
/// Returns [`crate::MosaicError::InvalidGridSpec`] when the grid cannot
/// partition the image (see [`partition_cells`])
pub fn sample_cells(image: &RgbImage, cols: usize, rows: usize) -> Result<Vec<GridCell>> {
    let (width, height) = image.dimensions();
    let bounds = partition_cells(width, height, cols, rows)?;

    Ok(bounds
        .iter()
        .map(|cell| GridCell {
            row: cell.row,
            col: cell.col,
            color: average_color(image, &cell.rect),
            cell_width: cell.rect.width(),
            cell_height: cell.rect.height(),
        })
        .collect())
}

fn average_color(image: &RgbImage, rect: &PixelRect) -> [u8; 3] {
    let mut sums = [0u64; 3];
    let mut count = 0u64;

    for y in rect.top..rect.bottom {
        for x in rect.left..rect.right {
            if let Some(pixel) = image.get_pixel_checked(x, y) {
                for (sum, &channel) in sums.iter_mut().zip(pixel.0.iter()) {
                    *sum += u64::from(channel);
                }
                count += 1;
            }
        }
    }

    if count == 0 {
        return [0, 0, 0];
    }
    sums.map(|sum| ((sum + count / 2) / count).min(255) as u8)
}
