//! Drawing surface wrapper around a tiny-skia pixmap
//!
//! Every generation call allocates its own surface, uses it, and discards
//! it; nothing is shared between calls. Rotations are passed per draw call
//! as an explicit transform, so no coordinate frame ever leaks from one
//! primitive into the next.

use crate::io::error::{GenerationError, Result};
use tiny_skia::{Color, FillRule, Paint, Path, Pixmap, Stroke, Transform};

/// An owned full-resolution drawing surface
#[derive(Debug)]
pub struct Surface {
    pixmap: Pixmap,
}

fn solid_paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color);
    paint.anti_alias = true;
    paint
}

impl Surface {
    /// Allocate an opaque surface of the given pixel dimensions
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::ContextAcquisition`] if the underlying
    /// pixmap cannot be created (zero dimension or allocation overflow).
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height)
            .ok_or(GenerationError::ContextAcquisition { width, height })?;
        Ok(Self { pixmap })
    }

    /// Surface width in pixels
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Surface height in pixels
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Flood the entire surface with a single opaque color
    pub fn fill_background(&mut self, color: Color) {
        self.pixmap.fill(color);
    }

    /// Fill a path, optionally under a primitive-local transform
    pub fn fill_path(&mut self, path: &Path, color: Color, transform: Transform) {
        self.pixmap
            .fill_path(path, &solid_paint(color), FillRule::Winding, transform, None);
    }

    /// Stroke a path with the given width, in canvas coordinates
    pub fn stroke_path(&mut self, path: &Path, color: Color, stroke_width: f32) {
        let stroke = Stroke {
            width: stroke_width,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(path, &solid_paint(color), &stroke, Transform::identity(), None);
    }

    /// Consume the surface and return the finished pixmap
    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimension_is_context_error() {
        let err = Surface::new(0, 100).unwrap_err();
        assert!(matches!(
            err,
            GenerationError::ContextAcquisition { width: 0, height: 100 }
        ));
    }

    #[test]
    fn test_background_fill_is_opaque() {
        let mut surface = Surface::new(4, 4).unwrap();
        surface.fill_background(Color::from_rgba8(10, 20, 30, 255));
        let pixmap = surface.into_pixmap();
        for pixel in pixmap.pixels() {
            assert_eq!(pixel.alpha(), 255);
            assert_eq!(pixel.red(), 10);
        }
    }
}
