//! CLI entry point for shape mosaic reconstruction

use clap::Parser;
use polymosaic::io::cli::{Cli, FileProcessor};

fn main() -> polymosaic::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process().map(|_| ())
}
