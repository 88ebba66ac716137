//! Canvas layout derived from the sizes carried by grid cells
//!
//! Column widths are the widest cell in each column and row heights the
//! tallest cell in each row. Cumulative offsets place every cell on the
//! output canvas independently of the order the cells arrive in.

use crate::grid::cell::{GridCell, PixelRect};

/// Column and row extents with cumulative pixel offsets
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridLayout {
    column_widths: Vec<u32>,
    row_heights: Vec<u32>,
    x_offsets: Vec<u32>,
    y_offsets: Vec<u32>,
}

impl GridLayout {
    /// Derive the layout from a set of cells
    ///
    /// An empty slice yields a layout with no columns or rows. Columns or rows
    /// that no cell occupies get zero extent.
    pub fn from_cells(cells: &[GridCell]) -> Self {
        let cols = cells.iter().map(|c| c.col + 1).max().unwrap_or(0);
        let rows = cells.iter().map(|c| c.row + 1).max().unwrap_or(0);

        let mut column_widths = vec![0u32; cols];
        let mut row_heights = vec![0u32; rows];
        for cell in cells {
            if let Some(width) = column_widths.get_mut(cell.col) {
                *width = (*width).max(cell.cell_width);
            }
            if let Some(height) = row_heights.get_mut(cell.row) {
                *height = (*height).max(cell.cell_height);
            }
        }

        let x_offsets = cumulative_offsets(&column_widths);
        let y_offsets = cumulative_offsets(&row_heights);

        Self {
            column_widths,
            row_heights,
            x_offsets,
            y_offsets,
        }
    }

    /// Number of columns
    pub const fn cols(&self) -> usize {
        self.column_widths.len()
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.row_heights.len()
    }

    /// Widest cell per column
    pub fn column_widths(&self) -> &[u32] {
        &self.column_widths
    }

    /// Tallest cell per row
    pub fn row_heights(&self) -> &[u32] {
        &self.row_heights
    }

    /// Horizontal offsets, `cols + 1` entries starting at zero
    pub fn x_offsets(&self) -> &[u32] {
        &self.x_offsets
    }

    /// Vertical offsets, `rows + 1` entries starting at zero
    pub fn y_offsets(&self) -> &[u32] {
        &self.y_offsets
    }

    /// Canvas rectangle of a cell, clipped to `canvas_width x canvas_height`
    ///
    /// The rectangle starts at the cell's column and row offsets and spans the
    /// cell's own size. Returns `None` for a cell outside this layout; the
    /// returned rectangle may be empty when clipping removes it entirely.
    pub fn cell_rect(
        &self,
        cell: &GridCell,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Option<PixelRect> {
        let x = *self.x_offsets.get(cell.col)?;
        let y = *self.y_offsets.get(cell.row)?;
        if cell.col >= self.cols() || cell.row >= self.rows() {
            return None;
        }

        let left = x.min(canvas_width);
        let top = y.min(canvas_height);
        Some(PixelRect {
            left,
            top,
            right: x.saturating_add(cell.cell_width).min(canvas_width),
            bottom: y.saturating_add(cell.cell_height).min(canvas_height),
        })
    }
}

fn cumulative_offsets(extents: &[u32]) -> Vec<u32> {
    let mut offsets = Vec::with_capacity(extents.len() + 1);
    let mut total = 0u32;
    offsets.push(total);
    for extent in extents {
        total = total.saturating_add(*extent);
        offsets.push(total);
    }
    offsets
}
