//! Per-variant shape configuration with documented defaults
//!
//! Every struct deserialises with missing fields taking their default, so a
//! bare `{"type": "circle"}` record yields the default circle.

use crate::io::configuration::{
    DEFAULT_CIRCLE_RADIUS_MULTIPLIER, DEFAULT_DIAMOND_SIZE_MULTIPLIER, DEFAULT_RECTANGLE_OVERLAP,
    DEFAULT_STAR_POINTS, DEFAULT_STAR_SIZE_MULTIPLIER, DEFAULT_TRIANGLE_FIRST_ROW_MULTIPLIER,
    DEFAULT_TRIANGLE_SIZE_MULTIPLIER, MAX_STAR_POINTS, MIN_STAR_POINTS,
};
use crate::io::error::{Result, invalid_parameter};
use serde::{Deserialize, Deserializer, Serialize};

/// Axis-aligned box grown beyond the cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RectangleParams {
    /// Growth as a fraction of the cell size, split evenly on both sides (default 1.0)
    pub overlap: f64,
}

impl Default for RectangleParams {
    fn default() -> Self {
        Self {
            overlap: DEFAULT_RECTANGLE_OVERLAP,
        }
    }
}

/// Apex-up triangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriangleParams {
    /// Side length relative to the larger cell dimension (default 3.5)
    pub size_multiplier: f64,
    /// Side length used on row 0 (default 4.5)
    pub first_row_multiplier: f64,
}

impl Default for TriangleParams {
    fn default() -> Self {
        Self {
            size_multiplier: DEFAULT_TRIANGLE_SIZE_MULTIPLIER,
            first_row_multiplier: DEFAULT_TRIANGLE_FIRST_ROW_MULTIPLIER,
        }
    }
}

/// Disc centred on the cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleParams {
    /// Radius relative to the larger cell dimension (default 1.2)
    pub radius_multiplier: f64,
}

impl Default for CircleParams {
    fn default() -> Self {
        Self {
            radius_multiplier: DEFAULT_CIRCLE_RADIUS_MULTIPLIER,
        }
    }
}

/// Rhombus with vertical and horizontal diagonals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiamondParams {
    /// Full diagonal relative to the larger cell dimension (default 1.8)
    pub size_multiplier: f64,
}

impl Default for DiamondParams {
    fn default() -> Self {
        Self {
            size_multiplier: DEFAULT_DIAMOND_SIZE_MULTIPLIER,
        }
    }
}

/// Star polygon with alternating outer and inner vertices
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarParams {
    /// Outer diameter relative to the larger cell dimension (default 1.6)
    pub size_multiplier: f64,
    /// Number of tips (default 5)
    ///
    /// Records may give the count as an integer or an integral float such
    /// as `6.0`.
    #[serde(deserialize_with = "deserialize_count")]
    pub points: u32,
}

impl Default for StarParams {
    fn default() -> Self {
        Self {
            size_multiplier: DEFAULT_STAR_SIZE_MULTIPLIER,
            points: DEFAULT_STAR_POINTS,
        }
    }
}

impl RectangleParams {
    /// Check the overlap is finite and non-negative
    ///
    /// # Errors
    ///
    /// Returns [`crate::MosaicError::InvalidParameter`] naming the bad field
    pub fn validate(&self) -> Result<()> {
        check_multiplier("overlap", self.overlap)
    }
}

impl TriangleParams {
    /// Check both multipliers are finite and non-negative
    ///
    /// # Errors
    ///
    /// Returns [`crate::MosaicError::InvalidParameter`] naming the bad field
    pub fn validate(&self) -> Result<()> {
        check_multiplier("size_multiplier", self.size_multiplier)?;
        check_multiplier("first_row_multiplier", self.first_row_multiplier)
    }
}

impl CircleParams {
    /// Check the radius multiplier is finite and non-negative
    ///
    /// # Errors
    ///
    /// Returns [`crate::MosaicError::InvalidParameter`] naming the bad field
    pub fn validate(&self) -> Result<()> {
        check_multiplier("radius_multiplier", self.radius_multiplier)
    }
}

impl DiamondParams {
    /// Check the size multiplier is finite and non-negative
    ///
    /// # Errors
    ///
    /// Returns [`crate::MosaicError::InvalidParameter`] naming the bad field
    pub fn validate(&self) -> Result<()> {
        check_multiplier("size_multiplier", self.size_multiplier)
    }
}

impl StarParams {
    /// Check the size multiplier and the tip count
    ///
    /// # Errors
    ///
    /// Returns [`crate::MosaicError::InvalidParameter`] for a bad multiplier
    /// or a tip count outside `MIN_STAR_POINTS..=MAX_STAR_POINTS`
    pub fn validate(&self) -> Result<()> {
        check_multiplier("size_multiplier", self.size_multiplier)?;
        if !(MIN_STAR_POINTS..=MAX_STAR_POINTS).contains(&self.points) {
            return Err(invalid_parameter(
                "points",
                &self.points,
                &format!("a star needs between {MIN_STAR_POINTS} and {MAX_STAR_POINTS} points"),
            ));
        }
        Ok(())
    }
}

fn check_multiplier(parameter: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(invalid_parameter(
            parameter,
            &value,
            &"must be a finite, non-negative number",
        ));
    }
    Ok(())
}

fn deserialize_count<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.fract() != 0.0 || !(0.0..=f64::from(u32::MAX)).contains(&value) {
        return Err(serde::de::Error::custom(format!(
            "expected a non-negative whole number, found {value}"
        )));
    }
    Ok(value as u32)
}
