//! Input/output operations: CLI, configuration, progress, export, errors

/// Command-line interface and batch processor
pub mod cli;
/// Tuning constants and runtime defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Export bundle assembly
pub mod export;
/// Batch progress display
pub mod progress;
