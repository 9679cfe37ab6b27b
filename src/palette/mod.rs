//! Palette definitions and color handling
//!
//! A palette themes one generated composition: an ordered set of shape
//! colors plus a single background color, all given as `#RRGGBB` literals.

/// Curated palette set and lookup helpers
pub mod builtin;
/// Hex literal parsing and alpha application
pub mod color;

use crate::io::error::{Result, invalid_parameter};
use color::Rgb;

pub use builtin::{BUILTIN_PALETTES, find_palette, palette_names};

/// A named set of shape colors plus a background color
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorPalette {
    /// Display identifier
    pub name: String,
    /// Ordered shape fill/stroke colors as `#RRGGBB` literals (non-empty)
    pub colors: Vec<String>,
    /// Canvas base fill as a `#RRGGBB` literal
    pub background: String,
}

impl ColorPalette {
    /// Construct a palette from string literals
    pub fn new(name: &str, colors: &[&str], background: &str) -> Self {
        Self {
            name: name.to_string(),
            colors: colors.iter().map(ToString::to_string).collect(),
            background: background.to_string(),
        }
    }

    /// Validate and decode every color literal in the palette
    ///
    /// Returns the decoded shape colors and background, in palette order.
    ///
    /// # Errors
    ///
    /// Returns an error if the palette has no shape colors or any literal
    /// is not a valid `#RRGGBB` string.
    pub fn decode(&self) -> Result<(Vec<Rgb>, Rgb)> {
        if self.colors.is_empty() {
            return Err(invalid_parameter(
                "palette.colors",
                &self.name,
                &"palette must contain at least one color",
            ));
        }

        let colors = self
            .colors
            .iter()
            .map(|hex| Rgb::from_hex(hex))
            .collect::<Result<Vec<_>>>()?;
        let background = Rgb::from_hex(&self.background)?;

        Ok((colors, background))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_palettes_all_decode() {
        for palette in BUILTIN_PALETTES.iter() {
            let decoded = palette.decode();
            assert!(decoded.is_ok(), "palette '{}' failed to decode", palette.name);
        }
    }

    #[test]
    fn test_empty_palette_rejected() {
        let palette = ColorPalette::new("Empty", &[], "#000000");
        assert!(palette.decode().is_err());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert!(find_palette("bauhaus classic").is_some());
        assert!(find_palette("No Such Palette").is_none());
    }

    #[test]
    fn test_six_builtin_names() {
        assert_eq!(palette_names().len(), 6);
    }
}
