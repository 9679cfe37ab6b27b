//! Derivative production: lossless full payload and lossy preview
//!
//! Both derivatives are read from the same post-grain raster. The full
//! payload keeps exact pixel fidelity; the preview trades fidelity for a
//! small, fast-to-display thumbnail.

use crate::io::configuration::{PREVIEW_JPEG_QUALITY, PREVIEW_SCALE};
use crate::io::error::{GenerationError, Result, encoding_error};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};
use std::io::Cursor;
use tiny_skia::Pixmap;

/// Encoded payloads for one finished raster
pub struct Derivatives {
    /// Lossless PNG of the full-resolution raster
    pub full_png: Vec<u8>,
    /// JPEG preview, downsampled by [`PREVIEW_SCALE`] in both dimensions
    pub preview_jpeg: Vec<u8>,
}

/// Preview dimensions for a given full-resolution size
pub fn preview_dimensions(width: u32, height: u32) -> (u32, u32) {
    let scale = |value: u32| (f64::from(value) * PREVIEW_SCALE).floor() as u32;
    (scale(width), scale(height))
}

/// Encode the full payload and the preview derivative from one raster
///
/// # Errors
///
/// Returns [`GenerationError::Encoding`] if either encoder fails, or
/// [`GenerationError::EmptyPayload`] if an encoder completes without
/// producing bytes. Neither case substitutes a placeholder payload.
pub fn finalize(pixmap: &Pixmap) -> Result<Derivatives> {
    let width = pixmap.width();
    let height = pixmap.height();

    // The raster is fully opaque, so the pixmap's premultiplied bytes are
    // already straight RGBA
    let full = RgbaImage::from_raw(width, height, pixmap.data().to_vec())
        .ok_or(GenerationError::EmptyPayload { format: "rgba" })?;

    let mut full_png = Vec::new();
    full.write_to(&mut Cursor::new(&mut full_png), image::ImageFormat::Png)
        .map_err(|e| encoding_error("png", e))?;
    if full_png.is_empty() {
        return Err(GenerationError::EmptyPayload { format: "png" });
    }

    let (preview_width, preview_height) = preview_dimensions(width, height);
    let preview = image::imageops::resize(&full, preview_width, preview_height, FilterType::Triangle);
    let preview_rgb = DynamicImage::ImageRgba8(preview).to_rgb8();

    let mut preview_jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut Cursor::new(&mut preview_jpeg), PREVIEW_JPEG_QUALITY)
        .encode_image(&preview_rgb)
        .map_err(|e| encoding_error("jpeg", e))?;
    if preview_jpeg.is_empty() {
        return Err(GenerationError::EmptyPayload { format: "jpeg" });
    }

    Ok(Derivatives {
        full_png,
        preview_jpeg,
    })
}
