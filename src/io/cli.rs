//! Command-line interface for batch mosaic reconstruction of image files

use crate::grid::planner::GridSpec;
use crate::grid::sampling::sample_cells;
use crate::io::configuration::{
    DEFAULT_SHAPE, DEFAULT_SUPERSAMPLING, OUTPUT_EXTENSION, OUTPUT_SUFFIX, SUPPORTED_EXTENSIONS,
};
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::io::image::{load_rgb_image, save_image, to_grayscale};
use crate::io::progress::ProgressManager;
use crate::render::compositor::MosaicCompositor;
use crate::render::fidelity::image_mse;
use crate::shapes::kind::Shape;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "polymosaic")]
#[command(
    author,
    version,
    about = "Rebuild images from overlapping blended geometric shapes"
)]
/// Command-line arguments for the reconstruction tool
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Shape stamped on every cell (rectangle, triangle, circle, diamond, star)
    #[arg(short, long, default_value = DEFAULT_SHAPE)]
    pub shape: Shape,

    /// JSON shape record overriding --shape, e.g. {"type": "star", "points": 6}
    #[arg(short = 'c', long, value_name = "FILE")]
    pub shape_config: Option<PathBuf>,

    /// Shape budget: "auto" for a 16x16 grid, or the number of shapes to use
    #[arg(short = 'n', long, default_value = "auto")]
    pub shapes: GridSpec,

    /// Explicit column count (requires --rows)
    #[arg(long, requires = "rows", allow_negative_numbers = true)]
    pub cols: Option<i64>,

    /// Explicit row count (requires --cols)
    #[arg(long, requires = "cols", allow_negative_numbers = true)]
    pub rows: Option<i64>,

    /// Sub-pixel samples per axis for anti-aliased edges (1 = hard edges)
    #[arg(short, long, default_value_t = DEFAULT_SUPERSAMPLING)]
    pub antialias: u32,

    /// Convert the source to grayscale before sampling
    #[arg(short, long)]
    pub grayscale: bool,

    /// Directory for reconstructed images (defaults to beside each input)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Suppress progress and result output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Grid selector, with explicit columns and rows taking precedence
    pub const fn grid_spec(&self) -> GridSpec {
        match (self.cols, self.rows) {
            (Some(cols), Some(rows)) => GridSpec::Explicit { cols, rows },
            _ => self.shapes,
        }
    }

    /// Shape to stamp, loaded from the shape record file when one is given
    ///
    /// # Errors
    ///
    /// Returns an error if the record file cannot be read or does not hold a
    /// valid shape record
    pub fn resolve_shape(&self) -> Result<Shape> {
        let Some(path) = &self.shape_config else {
            return Ok(self.shape);
        };
        let json = std::fs::read_to_string(path).map_err(|e| MosaicError::FileSystem {
            path: path.clone(),
            operation: "read shape config",
            source: e,
        })?;
        Shape::from_record_str(&json)
    }
}

/// Summary of one reconstructed file
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    /// Where the reconstruction was written
    pub output_path: PathBuf,
    /// Grid columns used
    pub cols: usize,
    /// Grid rows used
    pub rows: usize,
    /// Mean squared error against the (possibly grayscale) source
    pub mse: f64,
}

/// Orchestrates batch reconstruction with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, shape resolution or file
    /// processing fails
    pub fn process(&mut self) -> Result<Vec<FileReport>> {
        let shape = self.cli.resolve_shape()?;
        let compositor = MosaicCompositor::new(shape).with_supersampling(self.cli.antialias)?;
        let files = self.collect_files(compositor.shape())?;

        if files.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut reports = Vec::with_capacity(files.len());
        for (index, file) in files.iter().enumerate() {
            let report = self.process_file(file, index, &compositor)?;
            self.announce(&report);
            reports.push(report);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(reports)
    }

    fn collect_files(&self, shape: &Shape) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !is_supported_image(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &format!("must be one of: {}", SUPPORTED_EXTENSIONS.join(", ")),
                ));
            }
            if self.should_process_file(target, shape) {
                Ok(vec![target.clone()])
            } else {
                Ok(vec![])
            }
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|e| MosaicError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;
            let mut files = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if is_supported_image(&path)
                    && !is_mosaic_output(&path)
                    && self.should_process_file(&path, shape)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be an image file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path, shape: &Shape) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.output_path(input_path, shape);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(
        &mut self,
        input_path: &Path,
        index: usize,
        compositor: &MosaicCompositor,
    ) -> Result<FileReport> {
        let start_time = Instant::now();
        let output_path = self.output_path(input_path, compositor.shape());

        let mut source = load_rgb_image(input_path)?;
        if self.cli.grayscale {
            source = to_grayscale(&source);
        }

        let (width, height) = source.dimensions();
        let (cols, rows) = self.cli.grid_spec().resolve(width, height)?;
        let cells = sample_cells(&source, cols, rows)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, cells.len());
        }

        let output = compositor.render_with_progress(&cells, width, height, |done| {
            if let Some(ref mut pm) = self.progress_manager {
                pm.update_cells(index, done);
            }
        });

        save_image(&output, &output_path)?;
        let mse = image_mse(&source, &output)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        log::info!(
            "{} -> {} ({cols}x{rows} {}, mse {mse:.3}) in {:.2?}",
            input_path.display(),
            output_path.display(),
            compositor.shape(),
            start_time.elapsed()
        );

        Ok(FileReport {
            output_path,
            cols,
            rows,
            mse,
        })
    }

    // Allow print for the per-file result line
    #[allow(clippy::print_stdout)]
    fn announce(&self, report: &FileReport) {
        if !self.cli.quiet {
            println!(
                "{} ({}x{} grid) MSE: {:.3}",
                report.output_path.display(),
                report.cols,
                report.rows,
                report.mse
            );
        }
    }

    fn output_path(&self, input_path: &Path, shape: &Shape) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{}_{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            shape.name(),
            OUTPUT_EXTENSION
        );

        match (&self.cli.output_dir, input_path.parent()) {
            (Some(dir), _) => dir.join(output_name),
            (None, Some(parent)) => parent.join(output_name),
            (None, None) => PathBuf::from(output_name),
        }
    }
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

fn is_mosaic_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| stem.contains(&format!("{OUTPUT_SUFFIX}_")))
}
