//! Command-line interface for batch artwork generation

use crate::compose::ArtConfig;
use crate::io::configuration::{
    DEFAULT_BATCH_SIZE, DEFAULT_COMPLEXITY, DEFAULT_HEIGHT, DEFAULT_SHAPE_COUNT_MAX,
    DEFAULT_SHAPE_COUNT_MIN, DEFAULT_WIDTH,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::export::export_bundle;
use crate::io::progress::ProgressManager;
use crate::palette::{ColorPalette, find_palette, palette_names};
use crate::pipeline::batch::run_batch_with;
use crate::pipeline::generate::Generator;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bauhausgen")]
#[command(
    author,
    version,
    about = "Generate batches of Bauhaus-style abstract artwork assets"
)]
/// Command-line arguments for the artwork generation tool
pub struct Cli {
    /// Number of assets to generate
    #[arg(short, long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub count: usize,

    /// Built-in palette name to theme the batch with
    #[arg(short, long, default_value = "Bauhaus Classic")]
    pub palette: String,

    /// Canvas width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Minimum primitives per composition
    #[arg(long, default_value_t = DEFAULT_SHAPE_COUNT_MIN)]
    pub min_shapes: u32,

    /// Maximum primitives per composition
    #[arg(long, default_value_t = DEFAULT_SHAPE_COUNT_MAX)]
    pub max_shapes: u32,

    /// Reserved tuning value in [0.1, 1.0]
    #[arg(long, default_value_t = DEFAULT_COMPLEXITY)]
    pub complexity: f64,

    /// Random seed for reproducible batches (defaults to OS entropy)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output directory for the export bundle
    #[arg(short, long, default_value = "bauhaus_assets")]
    pub output: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build the generation configuration from the flags
    pub const fn art_config(&self) -> ArtConfig {
        ArtConfig {
            width: self.width,
            height: self.height,
            shape_count_min: self.min_shapes,
            shape_count_max: self.max_shapes,
            complexity: self.complexity,
        }
    }
}

/// Orchestrates one batch run: palette lookup, generation, and export
pub struct BatchProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BatchProcessor {
    /// Create a new batch processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self {
            cli,
            progress_manager: None,
        }
    }

    fn resolve_palette(&self) -> Result<ColorPalette> {
        find_palette(&self.cli.palette).cloned().ok_or_else(|| {
            invalid_parameter(
                "palette",
                &self.cli.palette,
                &format!("must be one of: {}", palette_names().join(", ")),
            )
        })
    }

    /// Run the batch according to the CLI arguments
    ///
    /// Individual generation failures are reported and skipped; the
    /// bundle is exported with every asset that succeeded.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown palette name, invalid
    /// configuration, or a failure writing the export bundle.
    // Allow print for per-index failure diagnostics
    #[allow(clippy::print_stderr)]
    pub fn process(&mut self) -> Result<()> {
        let palette = self.resolve_palette()?;
        let config = self.cli.art_config();
        config.validate()?;

        // The display only comes up once the run is known to be viable
        self.progress_manager = self
            .cli
            .should_show_progress()
            .then(|| ProgressManager::new(self.cli.count));

        let mut generator = self
            .cli
            .seed
            .map_or_else(Generator::from_entropy, Generator::from_seed);

        let outcome = run_batch_with(self.cli.count, |index| {
            let result = generator.generate(&config, &palette);
            if let Some(ref pm) = self.progress_manager {
                match &result {
                    Ok(asset) => pm.asset_completed(&asset.filename),
                    Err(_) => pm.asset_failed(index),
                }
            }
            result
        });

        for failure in &outcome.failures {
            eprintln!(
                "Generation failed for index {}: {}",
                failure.index, failure.error
            );
        }

        if !outcome.assets.is_empty() {
            export_bundle(&outcome.assets, &self.cli.output)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish(outcome.assets.len(), self.cli.count);
        }

        Ok(())
    }
}
