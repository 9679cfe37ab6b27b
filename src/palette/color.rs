//! Hex color literal parsing and translucent color construction

use crate::io::error::{GenerationError, Result};

/// An opaque RGB color decoded from a `#RRGGBB` literal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Parse a 6-digit hex color literal prefixed with `#`
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidColor`] if the literal is not
    /// exactly `#` followed by six hex digits.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| GenerationError::InvalidColor {
                value: hex.to_string(),
                reason: "missing '#' prefix",
            })?;

        if digits.len() != 6 {
            return Err(GenerationError::InvalidColor {
                value: hex.to_string(),
                reason: "expected exactly six hex digits",
            });
        }

        let parse_channel = |range: std::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| GenerationError::InvalidColor {
                    value: hex.to_string(),
                    reason: "channel is not a hex byte",
                })
        };

        Ok(Self {
            r: parse_channel(0..2)?,
            g: parse_channel(2..4)?,
            b: parse_channel(4..6)?,
        })
    }

    /// Convert to a tiny-skia color with the given alpha in [0, 1]
    pub fn with_alpha(self, alpha: f64) -> tiny_skia::Color {
        let alpha = alpha.clamp(0.0, 1.0) as f32;
        tiny_skia::Color::from_rgba(
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            alpha,
        )
        .unwrap_or(tiny_skia::Color::BLACK)
    }

    /// Convert to a fully opaque tiny-skia color
    pub fn opaque(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, 255)
    }
}
