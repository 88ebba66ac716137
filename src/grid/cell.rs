//! Coloured grid cells and their pixel rectangles

/// One sampled cell of the source image
///
/// Identity is the `(row, col)` pair, which is unique within a single render.
/// The size is the cell's own footprint in the source partition; the
/// compositor derives canvas offsets from the per-column and per-row maxima.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    /// Zero-based row index
    pub row: usize,
    /// Zero-based column index
    pub col: usize,
    /// Representative RGB colour
    pub color: [u8; 3],
    /// Cell width in pixels
    pub cell_width: u32,
    /// Cell height in pixels
    pub cell_height: u32,
}

impl GridCell {
    /// Create a cell at `(row, col)` with the given colour and size
    pub const fn new(
        row: usize,
        col: usize,
        color: [u8; 3],
        cell_width: u32,
        cell_height: u32,
    ) -> Self {
        Self {
            row,
            col,
            color,
            cell_width,
            cell_height,
        }
    }
}

/// Half-open pixel rectangle `[left, right) x [top, bottom)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelRect {
    /// First column (inclusive)
    pub left: u32,
    /// First row (inclusive)
    pub top: u32,
    /// Last column (exclusive)
    pub right: u32,
    /// Last row (exclusive)
    pub bottom: u32,
}

impl PixelRect {
    /// Width in pixels, zero when the rectangle is inverted
    pub const fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    /// Height in pixels, zero when the rectangle is inverted
    pub const fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// True when the rectangle covers no pixel
    pub const fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Geometric centre in continuous pixel coordinates
    pub fn center(&self) -> (f64, f64) {
        (
            (f64::from(self.left) + f64::from(self.right)) / 2.0,
            (f64::from(self.top) + f64::from(self.bottom)) / 2.0,
        )
    }
}

/// Pixel bounds of one cell produced by the source partition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellBounds {
    /// Zero-based row index
    pub row: usize,
    /// Zero-based column index
    pub col: usize,
    /// Pixel rectangle covered by the cell
    pub rect: PixelRect,
}
