//! Error types shared by planning, rasterisation, compositing and file handling

use std::fmt;
use std::path::PathBuf;

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a reconstructed image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Grid dimensions cannot partition the canvas
    ///
    /// Raised for explicit column or row counts of zero or below, and for
    /// grids with more columns (rows) than the canvas has pixels.
    InvalidGridSpec {
        /// Requested column count
        cols: i64,
        /// Requested row count
        rows: i64,
        /// Explanation of why the grid is invalid
        reason: String,
    },

    /// Shape name is not one of the supported primitives
    InvalidShapeType {
        /// The rejected name
        name: String,
    },

    /// Two arrays compared for fidelity have different shapes
    ShapeMismatch {
        /// Shape of the left operand
        left: Vec<usize>,
        /// Shape of the right operand
        right: Vec<usize>,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A shape record could not be decoded
    MalformedRecord {
        /// Underlying decoding error
        source: serde_json::Error,
    },

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidGridSpec { cols, rows, reason } => {
                write!(f, "Invalid grid {cols}x{rows}: {reason}")
            }
            Self::InvalidShapeType { name } => {
                write!(
                    f,
                    "Unknown shape type '{name}' (expected one of: rectangle, triangle, circle, diamond, star)"
                )
            }
            Self::ShapeMismatch { left, right } => {
                write!(f, "Array shapes differ: {left:?} vs {right:?}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::MalformedRecord { source } => {
                write!(f, "Malformed shape record: {source}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::MalformedRecord { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

impl From<std::io::Error> for MosaicError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for MosaicError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedRecord { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid grid error
pub fn invalid_grid(cols: i64, rows: i64, reason: &impl ToString) -> MosaicError {
    MosaicError::InvalidGridSpec {
        cols,
        rows,
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> MosaicError {
    MosaicError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
