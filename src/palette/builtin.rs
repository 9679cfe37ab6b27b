//! Built-in color palettes curated for stock-ready compositions

use crate::palette::ColorPalette;
use std::sync::LazyLock;

/// The six curated palettes shipped with the generator
pub static BUILTIN_PALETTES: LazyLock<Vec<ColorPalette>> = LazyLock::new(|| {
    vec![
        ColorPalette::new(
            "Bauhaus Classic",
            &["#D03026", "#F0C83A", "#2A64B6", "#151515", "#F2F2F2"],
            "#E8E6E1",
        ),
        ColorPalette::new(
            "Sunset Gradient",
            &["#FF6B6B", "#FFD93D", "#FF9F45", "#6C5B7B", "#355C7D"],
            "#2A2538",
        ),
        ColorPalette::new(
            "Oceanic Depth",
            &["#005F73", "#0A9396", "#94D2BD", "#E9D8A6", "#EE9B00"],
            "#001219",
        ),
        ColorPalette::new(
            "Corporate Clean",
            &["#264653", "#2A9D8F", "#E76F51", "#F4A261", "#2B2D42"],
            "#FFFFFF",
        ),
        ColorPalette::new(
            "Pastel Dream",
            &["#FFB5A7", "#FCD5CE", "#F8EDEB", "#F9DCC4", "#FEC89A"],
            "#FFF1F2",
        ),
        ColorPalette::new(
            "Neon Cyber",
            &["#F72585", "#7209B7", "#3A0CA3", "#4361EE", "#4CC9F0"],
            "#0F0F1A",
        ),
    ]
});

/// Look up a built-in palette by its display name (case-insensitive)
pub fn find_palette(name: &str) -> Option<&'static ColorPalette> {
    BUILTIN_PALETTES
        .iter()
        .find(|palette| palette.name.eq_ignore_ascii_case(name))
}

/// Display names of all built-in palettes, for diagnostics and CLI help
pub fn palette_names() -> Vec<&'static str> {
    BUILTIN_PALETTES
        .iter()
        .map(|palette| palette.name.as_str())
        .collect()
}
