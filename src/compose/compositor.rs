//! Randomized primitive composition onto a background-filled canvas
//!
//! The compositor is a pure function of its configuration, palette, and
//! injected random source. Each call allocates a fresh surface, fills the
//! background, overlays a random number of primitives in draw order (later
//! primitives occlude earlier ones), and hands the raster back.

use crate::compose::shapes::{
    ShapeType, arc_path, circle_path, line_path, rect_path, triangle_path,
};
use crate::compose::surface::Surface;
use crate::io::configuration::{
    ARC_STROKE_ALPHA, ARC_STROKE_WIDTH_RANGE, CIRCLE_FILL_PROBABILITY, DEFAULT_COMPLEXITY,
    DEFAULT_HEIGHT, DEFAULT_SHAPE_COUNT_MAX, DEFAULT_SHAPE_COUNT_MIN, DEFAULT_WIDTH,
    FILL_ALPHA_MAX, FILL_ALPHA_MIN, LINE_STROKE_WIDTH_RANGE, MIN_CANVAS_DIMENSION,
    RECTANGLE_ROTATED_PROBABILITY, SCALE_FRACTION_MAX, SCALE_FRACTION_MIN, STROKE_ALPHA_BOOST,
    STROKE_WIDTH_RANGE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::palette::ColorPalette;
use crate::palette::color::Rgb;
use rand::Rng;
use rand::seq::IndexedRandom;
use tiny_skia::{Pixmap, Transform};

/// Immutable parameters for a single generation call
#[derive(Clone, Copy, Debug)]
pub struct ArtConfig {
    /// Full-resolution canvas width in pixels
    pub width: u32,
    /// Full-resolution canvas height in pixels
    pub height: u32,
    /// Inclusive lower bound on the number of primitives drawn
    pub shape_count_min: u32,
    /// Inclusive upper bound on the number of primitives drawn
    pub shape_count_max: u32,
    /// Reserved tuning value in [0.1, 1.0]; validated but not yet consumed
    /// by any drawing rule
    pub complexity: f64,
}

impl Default for ArtConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            shape_count_min: DEFAULT_SHAPE_COUNT_MIN,
            shape_count_max: DEFAULT_SHAPE_COUNT_MAX,
            complexity: DEFAULT_COMPLEXITY,
        }
    }
}

impl ArtConfig {
    /// Validate all configuration invariants
    ///
    /// # Errors
    ///
    /// Returns [`crate::GenerationError::InvalidParameter`] if a dimension
    /// is below the minimum, the shape-count bounds are inverted, or the
    /// complexity value is outside [0.1, 1.0].
    pub fn validate(&self) -> Result<()> {
        if self.width < MIN_CANVAS_DIMENSION {
            return Err(invalid_parameter(
                "width",
                &self.width,
                &format!("must be at least {MIN_CANVAS_DIMENSION}"),
            ));
        }
        if self.height < MIN_CANVAS_DIMENSION {
            return Err(invalid_parameter(
                "height",
                &self.height,
                &format!("must be at least {MIN_CANVAS_DIMENSION}"),
            ));
        }
        if self.shape_count_min > self.shape_count_max {
            return Err(invalid_parameter(
                "shape_count_min",
                &self.shape_count_min,
                &format!("must not exceed shape_count_max ({})", self.shape_count_max),
            ));
        }
        if !(0.1..=1.0).contains(&self.complexity) {
            return Err(invalid_parameter(
                "complexity",
                &self.complexity,
                &"must lie in [0.1, 1.0]",
            ));
        }
        Ok(())
    }
}

/// A finished composition raster plus drawing statistics
pub struct Composed {
    /// The fully opaque, background-filled and primitive-overlaid raster
    pub pixmap: Pixmap,
    /// Number of primitives actually drawn
    pub shapes_drawn: u32,
}

/// Compose a full-resolution raster from random primitives
///
/// Draws `N` primitives with `N` uniform over the configured inclusive
/// shape-count range. The output raster has exactly the configured
/// dimensions; primitives may be clipped by the canvas bounds.
///
/// # Errors
///
/// Returns an error if the configuration or palette is invalid, or if the
/// drawing surface cannot be acquired.
pub fn compose<R: Rng>(
    config: &ArtConfig,
    palette: &ColorPalette,
    rng: &mut R,
) -> Result<Composed> {
    config.validate()?;
    let (colors, background) = palette.decode()?;

    let mut surface = Surface::new(config.width, config.height)?;
    surface.fill_background(background.opaque());

    let shapes_drawn = rng.random_range(config.shape_count_min..=config.shape_count_max);
    for _ in 0..shapes_drawn {
        draw_primitive(&mut surface, &colors, rng);
    }

    Ok(Composed {
        pixmap: surface.into_pixmap(),
        shapes_drawn,
    })
}

const FALLBACK_COLOR: Rgb = Rgb { r: 0, g: 0, b: 0 };

// Scale is sampled from the canvas width alone, so portrait and landscape
// canvases get the same absolute shape sizes
fn sample_scale<R: Rng>(width: u32, rng: &mut R) -> u32 {
    let min = ((f64::from(width) * SCALE_FRACTION_MIN).floor() as u32).max(1);
    let max = ((f64::from(width) * SCALE_FRACTION_MAX).floor() as u32).max(min);
    rng.random_range(min..=max)
}

fn draw_primitive<R: Rng>(surface: &mut Surface, colors: &[Rgb], rng: &mut R) {
    let width = surface.width();
    let height = surface.height();

    // The slices are never empty, so the fallbacks are unreachable
    let shape = ShapeType::ALL
        .choose(rng)
        .copied()
        .unwrap_or(ShapeType::Circle);
    let base = colors.choose(rng).copied().unwrap_or(FALLBACK_COLOR);

    let alpha = rng
        .random::<f64>()
        .mul_add(FILL_ALPHA_MAX - FILL_ALPHA_MIN, FILL_ALPHA_MIN);
    let fill = base.with_alpha(alpha);
    let stroke = base.with_alpha((alpha + STROKE_ALPHA_BOOST).min(1.0));
    let stroke_width = rng.random_range(STROKE_WIDTH_RANGE.0..=STROKE_WIDTH_RANGE.1) as f32;

    // Anchors are unconstrained within the canvas; shapes may clip
    let x = rng.random_range(0..width) as f32;
    let y = rng.random_range(0..height) as f32;
    let scale = sample_scale(width, rng) as f32;

    match shape {
        ShapeType::Circle => {
            let Some(path) = circle_path(x, y, scale / 2.0) else {
                return;
            };
            if rng.random::<f64>() < CIRCLE_FILL_PROBABILITY {
                surface.fill_path(&path, fill, Transform::identity());
            } else {
                surface.stroke_path(&path, stroke, stroke_width);
            }
        }
        ShapeType::Rectangle => {
            if rng.random::<f64>() < RECTANGLE_ROTATED_PROBABILITY {
                // Rotated branch: rectangle centered on the anchor
                // horizontally, top edge at the anchor's frame, with a
                // randomized height
                let angle = (rng.random::<f64>() * 360.0) as f32;
                let rect_height = (rng.random::<f64>() + 0.5) as f32 * scale;
                let Some(path) =
                    rect_path(x - scale / 2.0, y - scale / 2.0, scale, rect_height)
                else {
                    return;
                };
                surface.fill_path(&path, fill, Transform::from_rotate_at(angle, x, y));
            } else {
                // Unrotated branch keeps its corner at the anchor; the
                // distinct anchor semantics of the two branches are
                // intentional
                let Some(path) = rect_path(x, y, scale, scale) else {
                    return;
                };
                surface.fill_path(&path, fill, Transform::identity());
            }
        }
        ShapeType::Triangle => {
            let Some(path) = triangle_path(x, y, scale) else {
                return;
            };
            surface.fill_path(&path, fill, Transform::identity());
        }
        ShapeType::Line => {
            let end_x = rng.random_range(0..width) as f32;
            let end_y = rng.random_range(0..height) as f32;
            let line_width =
                rng.random_range(LINE_STROKE_WIDTH_RANGE.0..=LINE_STROKE_WIDTH_RANGE.1) as f32;
            let Some(path) = line_path(x, y, end_x, end_y) else {
                return;
            };
            surface.stroke_path(&path, stroke, line_width);
        }
        ShapeType::Arc => {
            // Arcs use the full scale as radius and a fixed stroke alpha
            let sweep = (std::f64::consts::PI * (rng.random::<f64>() + 0.5)) as f32;
            let arc_width =
                rng.random_range(ARC_STROKE_WIDTH_RANGE.0..=ARC_STROKE_WIDTH_RANGE.1) as f32;
            let Some(path) = arc_path(x, y, scale, sweep) else {
                return;
            };
            surface.stroke_path(&path, base.with_alpha(ARC_STROKE_ALPHA), arc_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn test_palette() -> ColorPalette {
        ColorPalette::new("Test", &["#FF0000"], "#000000")
    }

    #[test]
    fn test_inverted_shape_bounds_rejected() {
        let config = ArtConfig {
            shape_count_min: 10,
            shape_count_max: 5,
            ..ArtConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_complexity_out_of_range_rejected() {
        let config = ArtConfig {
            complexity: 0.05,
            ..ArtConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_output_dimensions_match_config() {
        let config = ArtConfig {
            width: 120,
            height: 80,
            shape_count_min: 1,
            shape_count_max: 3,
            complexity: 0.5,
        };
        let mut rng = StdRng::seed_from_u64(7);
        let composed = compose(&config, &test_palette(), &mut rng).unwrap();
        assert_eq!(composed.pixmap.width(), 120);
        assert_eq!(composed.pixmap.height(), 80);
    }

    #[test]
    fn test_shape_count_within_bounds_across_seeds() {
        let config = ArtConfig {
            width: 64,
            height: 64,
            shape_count_min: 2,
            shape_count_max: 6,
            complexity: 0.5,
        };
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let composed = compose(&config, &test_palette(), &mut rng).unwrap();
            assert!((2..=6).contains(&composed.shapes_drawn));
        }
    }

    #[test]
    fn test_degenerate_range_draws_exact_count() {
        let config = ArtConfig {
            width: 100,
            height: 100,
            shape_count_min: 5,
            shape_count_max: 5,
            complexity: 0.7,
        };
        let mut rng = StdRng::seed_from_u64(99);
        let composed = compose(&config, &test_palette(), &mut rng).unwrap();
        assert_eq!(composed.shapes_drawn, 5);
    }

    #[test]
    fn test_scale_sampling_stays_in_fraction_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let scale = sample_scale(4500, &mut rng);
            assert!((225..=1800).contains(&scale));
        }
    }
}
