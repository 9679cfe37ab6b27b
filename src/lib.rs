//! Procedural generation of Bauhaus-style abstract artwork for stock asset batches
//!
//! The system composites randomly parameterized geometric primitives onto a
//! palette-themed canvas, applies a grain texture pass, and produces a
//! lossless full-resolution payload plus a low-resolution preview per
//! asset. Batches of independent generation calls feed an export bundle of
//! named image payloads and a descriptive metadata table.

#![forbid(unsafe_code)]

/// Primitive composition, shape geometry, and the grain pass
pub mod compose;
/// Input/output operations and error handling
pub mod io;
/// Palette definitions and color handling
pub mod palette;
/// Generation pipeline and batch orchestration
pub mod pipeline;

pub use io::error::{GenerationError, Result};
