//! Continuous shape footprints and point containment
//!
//! Footprints live in canvas pixel coordinates, where pixel `(x, y)` spans
//! `[x, x + 1) x [y, y + 1)` and its centre sits at `(x + 0.5, y + 0.5)`.

use crate::grid::cell::PixelRect;
use std::f64::consts::{FRAC_PI_2, PI};

/// Centre and size of the cell a shape is stamped on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPlacement {
    /// Horizontal centre in pixels
    pub center_x: f64,
    /// Vertical centre in pixels
    pub center_y: f64,
    /// Cell width in pixels
    pub cell_width: f64,
    /// Cell height in pixels
    pub cell_height: f64,
    /// Grid row of the cell
    pub row: usize,
}

impl CellPlacement {
    /// Placement covering a clipped canvas rectangle
    pub fn from_rect(rect: &PixelRect, row: usize) -> Self {
        let (center_x, center_y) = rect.center();
        Self {
            center_x,
            center_y,
            cell_width: f64::from(rect.width()),
            cell_height: f64::from(rect.height()),
            row,
        }
    }

    /// Larger of the two cell dimensions
    pub fn extent(&self) -> f64 {
        self.cell_width.max(self.cell_height)
    }
}

/// Axis-aligned bounding box in continuous coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Smallest x
    pub left: f64,
    /// Smallest y
    pub top: f64,
    /// Largest x
    pub right: f64,
    /// Largest y
    pub bottom: f64,
}

/// Region of the canvas covered by one stamped shape
#[derive(Debug, Clone, PartialEq)]
pub enum Footprint {
    /// Half-open box `[left, right) x [top, bottom)`
    Box(Bounds),
    /// Closed disc
    Disc {
        /// Horizontal centre
        center_x: f64,
        /// Vertical centre
        center_y: f64,
        /// Radius in pixels
        radius: f64,
    },
    /// Polygon filled with the even-odd rule
    Polygon(Vec<[f64; 2]>),
}

impl Footprint {
    /// Test whether a point lies inside the footprint
    pub fn contains(&self, x: f64, y: f64) -> bool {
        match self {
            Self::Box(b) => x >= b.left && x < b.right && y >= b.top && y < b.bottom,
            Self::Disc {
                center_x,
                center_y,
                radius,
            } => {
                let dx = x - center_x;
                let dy = y - center_y;
                dx.mul_add(dx, dy * dy) <= radius * radius
            }
            Self::Polygon(vertices) => polygon_contains(vertices, x, y),
        }
    }

    /// Bounding box, or `None` for a polygon without vertices
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Self::Box(b) => Some(*b),
            Self::Disc {
                center_x,
                center_y,
                radius,
            } => Some(Bounds {
                left: center_x - radius,
                top: center_y - radius,
                right: center_x + radius,
                bottom: center_y + radius,
            }),
            Self::Polygon(vertices) => {
                let &[x0, y0] = vertices.first()?;
                let initial = Bounds {
                    left: x0,
                    top: y0,
                    right: x0,
                    bottom: y0,
                };
                Some(vertices.iter().fold(initial, |b, &[x, y]| Bounds {
                    left: b.left.min(x),
                    top: b.top.min(y),
                    right: b.right.max(x),
                    bottom: b.bottom.max(y),
                }))
            }
        }
    }
}

// Crossing-number test; each edge counts when the scanline passes between its endpoints
fn polygon_contains(vertices: &[[f64; 2]], x: f64, y: f64) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let previous = vertices.iter().cycle().skip(vertices.len() - 1);
    let mut inside = false;
    for (&[xi, yi], &[xj, yj]) in vertices.iter().zip(previous) {
        if (yi > y) != (yj > y) {
            let crossing = (xj - xi) * (y - yi) / (yj - yi) + xi;
            if x < crossing {
                inside = !inside;
            }
        }
    }
    inside
}

/// Box around the cell grown by `overlap` of the cell size, half on each side
pub fn expanded_box(placement: &CellPlacement, overlap: f64) -> Bounds {
    let half_width = placement.cell_width * (1.0 + overlap) / 2.0;
    let half_height = placement.cell_height * (1.0 + overlap) / 2.0;
    Bounds {
        left: placement.center_x - half_width,
        top: placement.center_y - half_height,
        right: placement.center_x + half_width,
        bottom: placement.center_y + half_height,
    }
}

/// Apex-up triangle of side `size` centred on the cell
pub fn triangle_vertices(center_x: f64, center_y: f64, size: f64) -> Vec<[f64; 2]> {
    let half = size / 2.0;
    vec![
        [center_x, center_y - half],
        [center_x - half, center_y + half],
        [center_x + half, center_y + half],
    ]
}

/// Rhombus listed top, right, bottom, left
pub fn diamond_vertices(center_x: f64, center_y: f64, half_diagonal: f64) -> Vec<[f64; 2]> {
    vec![
        [center_x, center_y - half_diagonal],
        [center_x + half_diagonal, center_y],
        [center_x, center_y + half_diagonal],
        [center_x - half_diagonal, center_y],
    ]
}

/// Star polygon with `2 * points` vertices alternating outer and inner radius
///
/// The first vertex points straight up and consecutive vertices are
/// `PI / points` apart.
pub fn star_vertices(
    center_x: f64,
    center_y: f64,
    outer_radius: f64,
    inner_radius: f64,
    points: u32,
) -> Vec<[f64; 2]> {
    let step = PI / f64::from(points.max(1));
    (0..points.saturating_mul(2))
        .map(|i| {
            let radius = if i % 2 == 0 {
                outer_radius
            } else {
                inner_radius
            };
            let angle = f64::from(i).mul_add(step, -FRAC_PI_2);
            [
                radius.mul_add(angle.cos(), center_x),
                radius.mul_add(angle.sin(), center_y),
            ]
        })
        .collect()
}
