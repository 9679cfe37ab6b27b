//! Export bundles: named image payloads plus a descriptive metadata table
//!
//! The bundle is the logical structure the packaging step consumes: one
//! named binary blob per asset and one metadata row per image under a
//! fixed header. Compression of the bundle is out of scope.

use crate::io::configuration::{METADATA_COLUMNS, METADATA_FILENAME, STOCK_KEYWORDS, STOCK_TITLE};
use crate::io::error::{GenerationError, Result};
use crate::pipeline::generate::GeneratedAsset;
use std::path::Path;

/// Descriptive row for one asset: filename, title, keywords, palette, date
///
/// Title and keywords are constant boilerplate, not derived from image
/// content.
pub fn metadata_row(asset: &GeneratedAsset) -> [String; 5] {
    [
        asset.filename.clone(),
        STOCK_TITLE.to_string(),
        STOCK_KEYWORDS.to_string(),
        asset.palette_name.clone(),
        asset.timestamp.to_rfc3339(),
    ]
}

/// Assemble the delimited metadata table for a set of assets
///
/// One header line plus one quoted row per asset, each line newline
/// terminated.
pub fn metadata_csv(assets: &[GeneratedAsset]) -> String {
    let mut table = METADATA_COLUMNS.join(",");
    table.push('\n');

    for asset in assets {
        let quoted: Vec<String> = metadata_row(asset)
            .iter()
            .map(|field| format!("\"{field}\""))
            .collect();
        table.push_str(&quoted.join(","));
        table.push('\n');
    }

    table
}

/// Write an export bundle to a directory: every full payload under its
/// asset filename, plus the metadata table
///
/// # Errors
///
/// Returns [`GenerationError::FileSystem`] if the directory cannot be
/// created or any file cannot be written.
pub fn export_bundle(assets: &[GeneratedAsset], output_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(output_dir).map_err(|e| GenerationError::FileSystem {
        path: output_dir.to_path_buf(),
        operation: "create directory",
        source: e,
    })?;

    for asset in assets {
        let image_path = output_dir.join(&asset.filename);
        std::fs::write(&image_path, &asset.full_image).map_err(|e| {
            GenerationError::FileSystem {
                path: image_path.clone(),
                operation: "write image",
                source: e,
            }
        })?;
    }

    let table_path = output_dir.join(METADATA_FILENAME);
    std::fs::write(&table_path, metadata_csv(assets)).map_err(|e| {
        GenerationError::FileSystem {
            path: table_path.clone(),
            operation: "write metadata table",
            source: e,
        }
    })?;

    Ok(())
}
