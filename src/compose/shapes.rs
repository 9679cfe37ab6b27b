//! Shape variants and their path geometry

use tiny_skia::{Path, PathBuilder, Rect};

/// The closed set of primitive variants a composition draws from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeType {
    /// Filled or stroked circle centered on the anchor
    Circle,
    /// Filled square or rotated rectangle
    Rectangle,
    /// Filled isosceles triangle pointing up from the anchor
    Triangle,
    /// Stroked segment between two random points
    Line,
    /// Stroked partial circle around the anchor
    Arc,
}

impl ShapeType {
    /// All variants, in drawing-rule order, for uniform selection
    pub const ALL: [Self; 5] = [
        Self::Circle,
        Self::Rectangle,
        Self::Triangle,
        Self::Line,
        Self::Arc,
    ];
}

/// Circle of the given radius centered at `(cx, cy)`
pub fn circle_path(cx: f32, cy: f32, radius: f32) -> Option<Path> {
    let mut builder = PathBuilder::new();
    builder.push_circle(cx, cy, radius);
    builder.finish()
}

/// Axis-aligned rectangle; the caller supplies any rotation as a transform
pub fn rect_path(x: f32, y: f32, width: f32, height: f32) -> Option<Path> {
    let rect = Rect::from_xywh(x, y, width, height)?;
    let mut builder = PathBuilder::new();
    builder.push_rect(rect);
    builder.finish()
}

/// Isosceles triangle: apex at the anchor, base `scale` below and `scale`
/// to each side
pub fn triangle_path(x: f32, y: f32, scale: f32) -> Option<Path> {
    let mut builder = PathBuilder::new();
    builder.move_to(x, y);
    builder.line_to(x + scale, y + scale);
    builder.line_to(x - scale, y + scale);
    builder.close();
    builder.finish()
}

/// Straight segment from `(x0, y0)` to `(x1, y1)`
pub fn line_path(x0: f32, y0: f32, x1: f32, y1: f32) -> Option<Path> {
    let mut builder = PathBuilder::new();
    builder.move_to(x0, y0);
    builder.line_to(x1, y1);
    builder.finish()
}

/// Circular arc centered at `(cx, cy)`, sweeping counterclockwise from
/// angle zero through `sweep` radians
///
/// tiny-skia has no arc primitive, so the arc is approximated with cubic
/// Bezier segments of at most a quarter turn each, using the standard
/// `4/3 * tan(theta/4)` control-point distance. The approximation error is
/// far below one pixel at the radii used here.
pub fn arc_path(cx: f32, cy: f32, radius: f32, sweep: f32) -> Option<Path> {
    if sweep <= 0.0 || radius <= 0.0 {
        return None;
    }

    let segments = (sweep / std::f32::consts::FRAC_PI_2).ceil().max(1.0);
    let step = sweep / segments;
    let k = 4.0 / 3.0 * (step / 4.0).tan();

    let point_at = |angle: f32| (cx + radius * angle.cos(), cy + radius * angle.sin());
    // Unit tangent at `angle`, scaled by the radius
    let tangent_at = |angle: f32| (-radius * angle.sin(), radius * angle.cos());

    let mut builder = PathBuilder::new();
    let (start_x, start_y) = point_at(0.0);
    builder.move_to(start_x, start_y);

    let mut a0 = 0.0_f32;
    for _ in 0..segments as u32 {
        let a1 = a0 + step;
        let (p0x, p0y) = point_at(a0);
        let (p3x, p3y) = point_at(a1);
        let (t0x, t0y) = tangent_at(a0);
        let (t1x, t1y) = tangent_at(a1);

        builder.cubic_to(
            k.mul_add(t0x, p0x),
            k.mul_add(t0y, p0y),
            k.mul_add(-t1x, p3x),
            k.mul_add(-t1y, p3y),
            p3x,
            p3y,
        );
        a0 = a1;
    }

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_variants_listed_once() {
        assert_eq!(ShapeType::ALL.len(), 5);
        for (i, a) in ShapeType::ALL.iter().enumerate() {
            for b in ShapeType::ALL.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_arc_endpoints_lie_on_radius() {
        let sweep = std::f32::consts::PI;
        let path = arc_path(50.0, 50.0, 20.0, sweep).unwrap();
        let bounds = path.bounds();
        // Half circle from angle 0: spans x in [30, 70], y in [50, 70]
        assert!((bounds.left() - 30.0).abs() < 0.5);
        assert!((bounds.right() - 70.0).abs() < 0.5);
        assert!(bounds.top() >= 49.0);
        assert!((bounds.bottom() - 70.0).abs() < 0.5);
    }

    #[test]
    fn test_arc_rejects_degenerate_inputs() {
        assert!(arc_path(0.0, 0.0, 0.0, 1.0).is_none());
        assert!(arc_path(0.0, 0.0, 10.0, 0.0).is_none());
    }

    #[test]
    fn test_triangle_is_closed() {
        let path = triangle_path(10.0, 10.0, 5.0).unwrap();
        let bounds = path.bounds();
        assert!((bounds.left() - 5.0).abs() < f32::EPSILON);
        assert!((bounds.right() - 15.0).abs() < f32::EPSILON);
    }
}
