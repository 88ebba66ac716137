//! File handling, command-line processing and shared configuration

/// Command-line arguments and batch file processing
pub mod cli;
/// Rendering constants and defaults
pub mod configuration;
/// Error types for all mosaic operations
pub mod error;
/// Image decode, encode and grayscale conversion
pub mod image;
/// Terminal progress display
pub mod progress;
