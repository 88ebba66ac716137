//! The closed set of stamp shapes, their factory and record conversion

use crate::io::configuration::{
    DEFAULT_SUPERSAMPLING, MAX_STAR_POINTS, MIN_STAR_POINTS, STAR_INNER_RATIO,
};
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::shapes::geometry::{
    CellPlacement, Footprint, diamond_vertices, expanded_box, star_vertices, triangle_vertices,
};
use crate::shapes::params::{
    CircleParams, DiamondParams, RectangleParams, StarParams, TriangleParams,
};
use crate::shapes::raster::{CanvasSize, Mask, rasterize};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Names accepted by [`Shape::from_name`]
pub const SHAPE_NAMES: [&str; 5] = ["rectangle", "triangle", "circle", "diamond", "star"];

/// A stamp shape together with its configuration
///
/// Serialises as a record tagged by `type`, for example
/// `{"type": "star", "size_multiplier": 1.6, "points": 5}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    /// Axis-aligned box
    Rectangle(RectangleParams),
    /// Apex-up triangle
    Triangle(TriangleParams),
    /// Disc
    Circle(CircleParams),
    /// Rhombus
    Diamond(DiamondParams),
    /// Star polygon
    Star(StarParams),
}

impl Default for Shape {
    fn default() -> Self {
        Self::Rectangle(RectangleParams::default())
    }
}

impl Shape {
    /// Default-configured shape for a name, ignoring ASCII case
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::InvalidShapeType`] for any name outside
    /// [`SHAPE_NAMES`]
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "rectangle" => Ok(Self::Rectangle(RectangleParams::default())),
            "triangle" => Ok(Self::Triangle(TriangleParams::default())),
            "circle" => Ok(Self::Circle(CircleParams::default())),
            "diamond" => Ok(Self::Diamond(DiamondParams::default())),
            "star" => Ok(Self::Star(StarParams::default())),
            _ => Err(MosaicError::InvalidShapeType {
                name: name.to_string(),
            }),
        }
    }

    /// Lowercase name used as the record tag
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rectangle(_) => "rectangle",
            Self::Triangle(_) => "triangle",
            Self::Circle(_) => "circle",
            Self::Diamond(_) => "diamond",
            Self::Star(_) => "star",
        }
    }

    /// Check the variant's parameters
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::InvalidParameter`] for a negative or
    /// non-finite multiplier, or a star with fewer than two points
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Rectangle(p) => p.validate(),
            Self::Triangle(p) => p.validate(),
            Self::Circle(p) => p.validate(),
            Self::Diamond(p) => p.validate(),
            Self::Star(p) => p.validate(),
        }
    }

    /// Convert to a `type`-tagged key-value record
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::MalformedRecord`] if serialisation fails
    pub fn to_record(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Rebuild a shape from a `type`-tagged record
    ///
    /// The tag is matched like [`Shape::from_name`]. Absent parameters take
    /// their defaults and unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// - [`MosaicError::InvalidParameter`] when the record is not an object
    ///   with a string `type`, or a parameter fails validation
    /// - [`MosaicError::InvalidShapeType`] for an unknown `type`
    /// - [`MosaicError::MalformedRecord`] when a parameter has the wrong type
    pub fn from_record(record: &Value) -> Result<Self> {
        let Some(fields) = record.as_object() else {
            return Err(invalid_parameter(
                "record",
                record,
                &"shape record must be a JSON object",
            ));
        };
        let Some(tag) = fields.get("type").and_then(Value::as_str) else {
            return Err(invalid_parameter(
                "type",
                record,
                &"shape record needs a string 'type' field",
            ));
        };

        let canonical = Self::from_name(tag)?.name();
        let mut normalized = fields.clone();
        normalized.insert("type".to_string(), Value::from(canonical));

        let shape: Self = serde_json::from_value(Value::Object(normalized))?;
        shape.validate()?;
        Ok(shape)
    }

    /// Parse a JSON document holding one shape record
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::MalformedRecord`] for invalid JSON, and the
    /// errors of [`Shape::from_record`] otherwise
    pub fn from_record_str(json: &str) -> Result<Self> {
        let record: Value = serde_json::from_str(json)?;
        Self::from_record(&record)
    }

    /// Continuous region this shape covers for a cell
    pub fn footprint(&self, placement: &CellPlacement) -> Footprint {
        let extent = placement.extent();
        let (cx, cy) = (placement.center_x, placement.center_y);

        match self {
            Self::Rectangle(p) => Footprint::Box(expanded_box(placement, p.overlap)),
            Self::Triangle(p) => {
                // Row 0 has no row above to overlap it, so it draws larger
                let multiplier = if placement.row == 0 {
                    p.first_row_multiplier
                } else {
                    p.size_multiplier
                };
                Footprint::Polygon(triangle_vertices(cx, cy, extent * multiplier))
            }
            Self::Circle(p) => Footprint::Disc {
                center_x: cx,
                center_y: cy,
                radius: extent * p.radius_multiplier,
            },
            Self::Diamond(p) => {
                Footprint::Polygon(diamond_vertices(cx, cy, extent * p.size_multiplier / 2.0))
            }
            Self::Star(p) => {
                let outer = extent * p.size_multiplier / 2.0;
                Footprint::Polygon(star_vertices(
                    cx,
                    cy,
                    outer,
                    outer * STAR_INNER_RATIO,
                    p.points.clamp(MIN_STAR_POINTS, MAX_STAR_POINTS),
                ))
            }
        }
    }

    /// Hard-edged full-canvas mask for a cell
    pub fn create_mask(&self, canvas: CanvasSize, placement: &CellPlacement) -> Mask {
        self.create_mask_supersampled(canvas, placement, DEFAULT_SUPERSAMPLING)
    }

    /// Full-canvas mask with `samples x samples` coverage sampling per pixel
    pub fn create_mask_supersampled(
        &self,
        canvas: CanvasSize,
        placement: &CellPlacement,
        samples: u32,
    ) -> Mask {
        rasterize(&self.footprint(placement), canvas, samples)
    }
}

impl FromStr for Shape {
    type Err = MosaicError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
