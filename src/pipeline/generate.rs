//! Single-asset generation call: compose, grain, finalize
//!
//! The generator owns nothing but its random source. Each call allocates
//! its own raster, runs the full producer -> post-processor -> derivative
//! pipeline, and returns an immutable asset; no raster outlives the call.

use crate::compose::{ArtConfig, apply_grain, compose};
use crate::io::configuration::FILENAME_PREFIX;
use crate::io::error::Result;
use crate::palette::ColorPalette;
use crate::pipeline::derivative::finalize;
use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use uuid::Uuid;

/// One generated artwork asset, immutable once created
#[derive(Clone, Debug)]
pub struct GeneratedAsset {
    /// Globally unique identifier assigned at creation time
    pub id: Uuid,
    /// Lossless full-resolution PNG payload
    pub full_image: Vec<u8>,
    /// Low-resolution JPEG preview payload
    pub preview_image: Vec<u8>,
    /// Name of the palette the asset was themed with
    pub palette_name: String,
    /// Export filename, derived deterministically from the id
    pub filename: String,
    /// Creation time
    pub timestamp: DateTime<Utc>,
    /// Number of primitives drawn into the composition
    pub shapes_drawn: u32,
}

/// Derive the export filename from an asset id
pub fn asset_filename(id: Uuid) -> String {
    let hex = id.simple().to_string();
    let short = hex.get(0..8).unwrap_or(&hex);
    format!("{FILENAME_PREFIX}_{short}.png")
}

/// Asset producer holding the injected random source
///
/// Seeding is the only state carried across calls; every other resource
/// is allocated and discarded within a single `generate` invocation.
pub struct Generator {
    rng: StdRng,
}

impl Generator {
    /// Create a generator with a fixed seed for reproducible batches
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Run one full generation call
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or palette is invalid, the
    /// drawing surface cannot be acquired, or payload encoding fails.
    /// Failures never leave a partial asset behind.
    pub fn generate(
        &mut self,
        config: &ArtConfig,
        palette: &ColorPalette,
    ) -> Result<GeneratedAsset> {
        let composed = compose(config, palette, &mut self.rng)?;

        let mut pixmap = composed.pixmap;
        apply_grain(&mut pixmap, &mut self.rng);

        let derivatives = finalize(&pixmap)?;

        let id = Uuid::new_v4();
        Ok(GeneratedAsset {
            id,
            full_image: derivatives.full_png,
            preview_image: derivatives.preview_jpeg,
            palette_name: palette.name.clone(),
            filename: asset_filename(id),
            timestamp: Utc::now(),
            shapes_drawn: composed.shapes_drawn,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_uses_first_eight_hex_chars() {
        let id = Uuid::new_v4();
        let filename = asset_filename(id);
        assert!(filename.starts_with("abstract_bg_"));
        assert!(filename.ends_with(".png"));
        let stem = filename
            .strip_prefix("abstract_bg_")
            .and_then(|s| s.strip_suffix(".png"))
            .unwrap();
        assert_eq!(stem.len(), 8);
        assert!(stem.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
