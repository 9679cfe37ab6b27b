//! Batch orchestration with partial-success semantics
//!
//! A batch is a caller-driven sequence of independent generation calls.
//! A failure at one index is recorded and never aborts the remainder, and
//! already-completed assets are always preserved.

use crate::compose::ArtConfig;
use crate::io::error::{GenerationError, Result};
use crate::palette::ColorPalette;
use crate::pipeline::generate::{GeneratedAsset, Generator};

/// A recorded failure for one index of a batch
#[derive(Debug)]
pub struct BatchFailure {
    /// Zero-based index of the failed generation call
    pub index: usize,
    /// The error that call produced
    pub error: GenerationError,
}

/// Outcome of a batch: the assets that succeeded plus per-index failures
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Successfully generated assets, in generation order
    pub assets: Vec<GeneratedAsset>,
    /// Failures recorded per index, in generation order
    pub failures: Vec<BatchFailure>,
}

impl BatchOutcome {
    /// Total number of generation calls the batch attempted
    pub fn attempted(&self) -> usize {
        self.assets.len() + self.failures.len()
    }
}

/// Run a batch against an arbitrary per-index producer
///
/// This is the orchestration seam: production code passes the real
/// generator, tests can inject failures without breaking a drawing
/// surface.
pub fn run_batch_with<F>(count: usize, mut produce: F) -> BatchOutcome
where
    F: FnMut(usize) -> Result<GeneratedAsset>,
{
    let mut outcome = BatchOutcome::default();

    for index in 0..count {
        match produce(index) {
            Ok(asset) => outcome.assets.push(asset),
            Err(error) => outcome.failures.push(BatchFailure { index, error }),
        }
    }

    outcome
}

/// Run a batch of independent generation calls with one configuration
pub fn run_batch(
    generator: &mut Generator,
    count: usize,
    config: &ArtConfig,
    palette: &ColorPalette,
) -> BatchOutcome {
    run_batch_with(count, |_| generator.generate(config, palette))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::error::GenerationError;
    use crate::pipeline::generate::asset_filename;
    use chrono::Utc;
    use uuid::Uuid;

    fn dummy_asset() -> GeneratedAsset {
        let id = Uuid::new_v4();
        GeneratedAsset {
            id,
            full_image: vec![1, 2, 3],
            preview_image: vec![4, 5],
            palette_name: "Test".to_string(),
            filename: asset_filename(id),
            timestamp: Utc::now(),
            shapes_drawn: 1,
        }
    }

    #[test]
    fn test_failure_does_not_abort_remaining_calls() {
        let outcome = run_batch_with(3, |index| {
            if index == 1 {
                Err(GenerationError::ContextAcquisition {
                    width: 100,
                    height: 100,
                })
            } else {
                Ok(dummy_asset())
            }
        });

        assert_eq!(outcome.assets.len(), 2);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures.first().map(|f| f.index), Some(1));
        assert_eq!(outcome.attempted(), 3);
    }

    #[test]
    fn test_empty_batch_is_empty_outcome() {
        let outcome = run_batch_with(0, |_| Ok(dummy_asset()));
        assert!(outcome.assets.is_empty());
        assert!(outcome.failures.is_empty());
    }
}
