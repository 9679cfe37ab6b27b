//! Primitive composition and raster post-processing
//!
//! This module contains the drawing core: the randomized compositor, the
//! shape geometry it draws from, the surface it draws onto, and the grain
//! pass applied to the finished raster.

/// Randomized composition of primitives onto a canvas
pub mod compositor;
/// Pixel-level grain texture pass
pub mod grain;
/// Shape variants and path construction
pub mod shapes;
/// Owned drawing surface with per-primitive transforms
pub mod surface;

pub use compositor::{ArtConfig, Composed, compose};
pub use grain::apply_grain;
pub use shapes::ShapeType;
