//! Grain post-processing pass for a printed, non-flat texture
//!
//! Runs once per composition, after all primitives are drawn and before
//! any derivative is produced.

use crate::io::configuration::GRAIN_INTENSITY;
use rand::Rng;
use tiny_skia::Pixmap;

/// Perturb every pixel's color channels with bounded monochromatic noise
///
/// One noise value is drawn per pixel and added to the red, green, and
/// blue channels alike; the alpha channel is untouched. Channels are
/// clamped to [0, 255] after the addition. The composition raster is
/// fully opaque at this point, so its premultiplied storage coincides
/// with straight RGBA and the pass can operate on the raw bytes.
pub fn apply_grain<R: Rng>(pixmap: &mut Pixmap, rng: &mut R) {
    for pixel in pixmap.data_mut().chunks_exact_mut(4) {
        let noise = (rng.random::<f64>() - 0.5) * GRAIN_INTENSITY * 255.0;
        if let [r, g, b, _alpha] = pixel {
            for channel in [r, g, b] {
                *channel = (f64::from(*channel) + noise).clamp(0.0, 255.0) as u8;
            }
        }
    }
}
