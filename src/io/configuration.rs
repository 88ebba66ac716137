//! Rendering constants and runtime configuration defaults

// Grid defaults used when no shape budget is requested
/// Default number of grid columns
pub const DEFAULT_COLS: usize = 16;
/// Default number of grid rows
pub const DEFAULT_ROWS: usize = 16;

/// Lower bound applied to accumulated mask weight before normalisation
pub const WEIGHT_FLOOR: f32 = 1e-6;

/// Shape used when none is requested
pub const DEFAULT_SHAPE: &str = "rectangle";

// Per-variant geometry defaults
/// Rectangle growth relative to the cell size
pub const DEFAULT_RECTANGLE_OVERLAP: f64 = 1.0;
/// Triangle side relative to the larger cell dimension
pub const DEFAULT_TRIANGLE_SIZE_MULTIPLIER: f64 = 3.5;
/// Triangle side on the first row, which has no row above to overlap it
pub const DEFAULT_TRIANGLE_FIRST_ROW_MULTIPLIER: f64 = 4.5;
/// Circle radius relative to the larger cell dimension
pub const DEFAULT_CIRCLE_RADIUS_MULTIPLIER: f64 = 1.2;
/// Diamond diagonal relative to the larger cell dimension
pub const DEFAULT_DIAMOND_SIZE_MULTIPLIER: f64 = 1.8;
/// Star outer diameter relative to the larger cell dimension
pub const DEFAULT_STAR_SIZE_MULTIPLIER: f64 = 1.6;
/// Number of star tips
pub const DEFAULT_STAR_POINTS: u32 = 5;
/// Inner star radius as a fraction of the outer radius
pub const STAR_INNER_RATIO: f64 = 0.4;
/// Fewest tips a star polygon can have
pub const MIN_STAR_POINTS: u32 = 2;
/// Most tips a star polygon can have
pub const MAX_STAR_POINTS: u32 = 64;

// Rasterisation
/// Sub-pixel samples per axis when none are requested (hard edges)
pub const DEFAULT_SUPERSAMPLING: u32 = 1;
/// Upper limit on sub-pixel samples per axis
pub const MAX_SUPERSAMPLING: u32 = 8;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to output filenames, followed by the shape name
pub const OUTPUT_SUFFIX: &str = "_mosaic";
/// Extension of reconstructed images
pub const OUTPUT_EXTENSION: &str = "png";
/// Input file extensions picked up in directory mode
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "bmp"];
