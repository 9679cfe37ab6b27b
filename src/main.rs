//! CLI entry point for batch artwork generation

use bauhausgen::io::cli::{BatchProcessor, Cli};
use clap::Parser;

fn main() -> bauhausgen::Result<()> {
    let cli = Cli::parse();
    let mut processor = BatchProcessor::new(cli);
    processor.process()
}
