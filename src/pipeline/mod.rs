//! Generation pipeline from composition to export-ready assets
//!
//! Strict producer -> post-processor -> derivative flow: the compositor
//! produces a raster, the grain pass mutates it in place, and the
//! derivative producer reads the final raster for both payloads.

/// Batch orchestration with partial-success semantics
pub mod batch;
/// Full and preview payload encoding
pub mod derivative;
/// Single-asset generation calls
pub mod generate;

pub use batch::{BatchFailure, BatchOutcome, run_batch, run_batch_with};
pub use derivative::{Derivatives, finalize, preview_dimensions};
pub use generate::{GeneratedAsset, Generator, asset_filename};
