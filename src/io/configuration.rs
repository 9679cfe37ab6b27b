//! Tuning constants and runtime configuration defaults

// Primitive appearance ranges, matched to the perceptual tuning of the
// original compositions
/// Lower bound of the fill alpha range
pub const FILL_ALPHA_MIN: f64 = 0.4;
/// Upper bound of the fill alpha range
pub const FILL_ALPHA_MAX: f64 = 0.9;
/// Added to the fill alpha for the paired stroke color (capped at 1.0)
pub const STROKE_ALPHA_BOOST: f64 = 0.2;
/// Fixed stroke alpha for arc primitives, overriding the paired rule
pub const ARC_STROKE_ALPHA: f64 = 0.8;

/// Default stroke width range in pixels (inclusive)
pub const STROKE_WIDTH_RANGE: (u32, u32) = (10, 50);
/// Stroke width range for line primitives, thinner than other shapes
pub const LINE_STROKE_WIDTH_RANGE: (u32, u32) = (2, 20);
/// Stroke width range for arc primitives
pub const ARC_STROKE_WIDTH_RANGE: (u32, u32) = (20, 80);

/// Primitive scale lower bound as a fraction of canvas width
pub const SCALE_FRACTION_MIN: f64 = 0.05;
/// Primitive scale upper bound as a fraction of canvas width
pub const SCALE_FRACTION_MAX: f64 = 0.4;

/// Probability that a circle is filled rather than stroked
pub const CIRCLE_FILL_PROBABILITY: f64 = 0.7;
/// Probability that a rectangle takes the rotated, center-anchored branch
pub const RECTANGLE_ROTATED_PROBABILITY: f64 = 0.5;

// Post-processing
/// Grain noise intensity as a fraction of full channel range
pub const GRAIN_INTENSITY: f64 = 0.03;

// Derivative production
/// Preview downsampling factor applied to both dimensions
pub const PREVIEW_SCALE: f64 = 0.1;
/// JPEG quality for the preview payload, on the encoder's 0-100 scale
pub const PREVIEW_JPEG_QUALITY: u8 = 80;

// Default values for configurable parameters
/// Default full-resolution canvas width
pub const DEFAULT_WIDTH: u32 = 4500;
/// Default full-resolution canvas height
pub const DEFAULT_HEIGHT: u32 = 3000;
/// Default minimum primitives per composition
pub const DEFAULT_SHAPE_COUNT_MIN: u32 = 12;
/// Default maximum primitives per composition
pub const DEFAULT_SHAPE_COUNT_MAX: u32 = 24;
/// Default complexity value (reserved, not consumed by drawing)
pub const DEFAULT_COMPLEXITY: f64 = 0.7;
/// Default number of assets per batch
pub const DEFAULT_BATCH_SIZE: usize = 5;

// Canvas dimensions below this cannot produce a non-empty preview raster
/// Minimum allowed canvas dimension
pub const MIN_CANVAS_DIMENSION: u32 = 10;

// Export settings
/// Prefix for generated asset filenames
pub const FILENAME_PREFIX: &str = "abstract_bg";
/// Column header of the export metadata table
pub const METADATA_COLUMNS: [&str; 5] =
    ["Filename", "Title", "Keywords", "Palette", "Date Created"];
/// Boilerplate title attached to every exported asset
pub const STOCK_TITLE: &str = "Modern Abstract Geometric Background - Minimalist Design";
/// Boilerplate keyword list attached to every exported asset
pub const STOCK_KEYWORDS: &str = "abstract, geometric, background, bauhaus, minimalist, texture, wallpaper, 4k, corporate, design, pattern, shapes, modern, artistic, generated";
/// Name of the metadata table file inside an export bundle
pub const METADATA_FILENAME: &str = "metadata.csv";

// Progress bar display settings
/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
