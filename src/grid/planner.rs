//! Grid sizing from a shape budget and the image aspect ratio
//!
//! A budget of `N` shapes is turned into a `(cols, rows)` pair. Exact
//! factorisations of `N` always win because their product is the largest
//! achievable; among pairs with equal product the one closest to the image
//! aspect ratio is chosen, and remaining ties go to the wider grid.

use crate::io::configuration::{DEFAULT_COLS, DEFAULT_ROWS};
use crate::io::error::{MosaicError, Result, invalid_grid, invalid_parameter};
use std::cmp::Ordering;
use std::str::FromStr;

/// Caller-facing grid selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridSpec {
    /// Default 16x16 grid
    #[default]
    Auto,
    /// Target number of shapes; zero or negative falls back to the default grid
    Budget(i64),
    /// Explicit column and row counts
    Explicit {
        /// Number of columns
        cols: i64,
        /// Number of rows
        rows: i64,
    },
}

impl GridSpec {
    /// Resolve the selector into concrete `(cols, rows)` for an image
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::InvalidGridSpec`] when an explicit column or
    /// row count is zero or negative
    pub fn resolve(self, width: u32, height: u32) -> Result<(usize, usize)> {
        match self {
            Self::Auto => Ok((DEFAULT_COLS, DEFAULT_ROWS)),
            Self::Budget(budget) => Ok(plan_grid(
                Some(budget),
                width,
                height,
                DEFAULT_COLS,
                DEFAULT_ROWS,
            )),
            Self::Explicit { cols, rows } => {
                if cols <= 0 || rows <= 0 {
                    return Err(invalid_grid(
                        cols,
                        rows,
                        &"columns and rows must be positive",
                    ));
                }
                Ok((cols as usize, rows as usize))
            }
        }
    }
}

impl FromStr for GridSpec {
    type Err = MosaicError;

    /// Accepts `auto`, a shape budget such as `300`, or `COLSxROWS`
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }

        if let Some((cols, rows)) = trimmed.split_once(['x', 'X']) {
            let cols = cols
                .trim()
                .parse::<i64>()
                .map_err(|e| invalid_parameter("grid", &s, &e))?;
            let rows = rows
                .trim()
                .parse::<i64>()
                .map_err(|e| invalid_parameter("grid", &s, &e))?;
            if cols <= 0 || rows <= 0 {
                return Err(invalid_grid(
                    cols,
                    rows,
                    &"columns and rows must be positive",
                ));
            }
            return Ok(Self::Explicit { cols, rows });
        }

        trimmed
            .parse::<i64>()
            .map(Self::Budget)
            .map_err(|e| invalid_parameter("grid", &s, &e))
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    cols: usize,
    rows: usize,
    deviation: f64,
}

impl Candidate {
    fn new(cols: usize, rows: usize, aspect_ratio: f64) -> Self {
        Self {
            cols,
            rows,
            deviation: (cols as f64 / rows as f64 - aspect_ratio).abs(),
        }
    }

    const fn product(&self) -> usize {
        self.cols * self.rows
    }

    // Larger product, then smaller aspect deviation, then more columns
    fn rank(&self, other: &Self) -> Ordering {
        self.product()
            .cmp(&other.product())
            .then_with(|| other.deviation.total_cmp(&self.deviation))
            .then_with(|| self.cols.cmp(&other.cols))
    }
}

/// Choose grid dimensions for a requested shape budget
///
/// Without a positive budget the default grid is returned. Otherwise every
/// column count up to the budget is paired with the most rows that keep the
/// product within budget, subject to each cell spanning at least one pixel
/// (`cols <= width`, `rows <= height`). Never returns a zero dimension.
pub fn plan_grid(
    requested: Option<i64>,
    width: u32,
    height: u32,
    default_cols: usize,
    default_rows: usize,
) -> (usize, usize) {
    let Some(budget) = requested.filter(|&n| n > 0) else {
        return (default_cols.max(1), default_rows.max(1));
    };
    let budget = usize::try_from(budget).unwrap_or(usize::MAX);

    let max_cols = (width as usize).max(1);
    let max_rows = (height as usize).max(1);
    let aspect_ratio = if height == 0 {
        1.0
    } else {
        f64::from(width) / f64::from(height)
    };

    let mut best: Option<Candidate> = None;
    for cols in 1..=budget.min(max_cols) {
        let rows = (budget / cols).min(max_rows);
        let candidate = Candidate::new(cols, rows, aspect_ratio);
        if best.is_none_or(|current| candidate.rank(&current).is_gt()) {
            best = Some(candidate);
        }
    }

    let (cols, rows) = best.map_or((1, 1), |c| (c.cols, c.rows));
    log::debug!("planned {cols}x{rows} grid for budget {budget} on {width}x{height} image");
    (cols, rows)
}
