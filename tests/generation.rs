//! End-to-end validation of single generation calls against the public API

use bauhausgen::compose::ArtConfig;
use bauhausgen::palette::{ColorPalette, find_palette};
use bauhausgen::pipeline::{Generator, preview_dimensions};

fn small_config() -> ArtConfig {
    ArtConfig {
        width: 100,
        height: 100,
        shape_count_min: 5,
        shape_count_max: 5,
        complexity: 0.7,
    }
}

fn red_on_black() -> ColorPalette {
    ColorPalette::new("Test Red", &["#FF0000"], "#000000")
}

#[test]
fn test_fixed_scenario_dimensions_and_counts() {
    let mut generator = Generator::from_seed(42);
    let asset = generator.generate(&small_config(), &red_on_black()).unwrap();

    assert_eq!(asset.shapes_drawn, 5);

    let full = image::load_from_memory(&asset.full_image).unwrap();
    assert_eq!((full.width(), full.height()), (100, 100));

    let preview = image::load_from_memory(&asset.preview_image).unwrap();
    assert_eq!((preview.width(), preview.height()), (10, 10));
    assert_eq!(preview_dimensions(100, 100), (10, 10));
}

#[test]
fn test_full_payload_is_decodable_opaque_png() {
    let mut generator = Generator::from_seed(7);
    let asset = generator.generate(&small_config(), &red_on_black()).unwrap();

    assert_eq!(
        image::guess_format(&asset.full_image).unwrap(),
        image::ImageFormat::Png
    );
    let decoded = image::load_from_memory(&asset.full_image).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (100, 100));
    // The composition raster is fully opaque end to end
    assert!(decoded.pixels().all(|pixel| pixel.0.last() == Some(&255)));
}

#[test]
fn test_preview_payload_is_jpeg() {
    let mut generator = Generator::from_seed(9);
    let asset = generator.generate(&small_config(), &red_on_black()).unwrap();

    assert_eq!(
        image::guess_format(&asset.preview_image).unwrap(),
        image::ImageFormat::Jpeg
    );
}

#[test]
fn test_filename_pattern_and_palette_name() {
    let palette = find_palette("Neon Cyber").unwrap();
    let mut generator = Generator::from_seed(3);
    let asset = generator.generate(&small_config(), palette).unwrap();

    assert_eq!(asset.palette_name, "Neon Cyber");
    let stem = asset
        .filename
        .strip_prefix("abstract_bg_")
        .and_then(|s| s.strip_suffix(".png"))
        .unwrap();
    assert_eq!(stem.len(), 8);
    assert!(stem.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_repeated_calls_yield_distinct_ids() {
    let mut generator = Generator::from_seed(1);
    let first = generator.generate(&small_config(), &red_on_black()).unwrap();
    let second = generator.generate(&small_config(), &red_on_black()).unwrap();

    assert_ne!(first.id, second.id);
    assert_ne!(first.filename, second.filename);
    // Structure is stable even though pixels are randomized
    assert_eq!(first.shapes_drawn, 5);
    assert_eq!(second.shapes_drawn, 5);
}

#[test]
fn test_shape_counts_stay_within_configured_range() {
    let config = ArtConfig {
        width: 60,
        height: 60,
        shape_count_min: 3,
        shape_count_max: 9,
        complexity: 0.5,
    };
    let mut generator = Generator::from_seed(21);
    for _ in 0..15 {
        let asset = generator.generate(&config, &red_on_black()).unwrap();
        assert!((3..=9).contains(&asset.shapes_drawn));
    }
}

#[test]
fn test_invalid_configuration_is_rejected() {
    let config = ArtConfig {
        shape_count_min: 8,
        shape_count_max: 2,
        ..small_config()
    };
    let mut generator = Generator::from_seed(0);
    assert!(generator.generate(&config, &red_on_black()).is_err());
}

#[test]
fn test_malformed_palette_is_rejected() {
    let palette = ColorPalette::new("Broken", &["#ZZZZZZ"], "#000000");
    let mut generator = Generator::from_seed(0);
    assert!(generator.generate(&small_config(), &palette).is_err());
}
