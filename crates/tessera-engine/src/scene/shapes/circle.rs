use std::f32::consts::TAU;

use crate::coords::Point;
use crate::paint::{FillStyle, Paint};
use crate::text::GlyphQuad;

use super::common::{fill_convex, stroke_ring};

/// Outline vertices of a full ellipse.
pub(crate) const ELLIPSE_SEGMENTS: usize = 48;

fn ellipse_outline(center: Point, rx: f32, ry: f32) -> Vec<Point> {
    (0..ELLIPSE_SEGMENTS)
        .map(|k| {
            let (s, c) = (TAU * k as f32 / ELLIPSE_SEGMENTS as f32).sin_cos();
            Point::new(center.x + rx * c, center.y + ry * s)
        })
        .collect()
}

/// Quads for an axis-aligned ellipse with radii `rx`, `ry`.
///
/// A stroke as wide as the smaller radius fills the ellipse.
pub(crate) fn ellipse_quads(center: Point, rx: f32, ry: f32, paint: &Paint) -> Vec<GlyphQuad> {
    if !(rx > 0.0 && ry > 0.0) {
        return Vec::new();
    }

    let outer = ellipse_outline(center, rx, ry);
    match paint.fill_style {
        FillStyle::Filled => fill_convex(center, &outer),
        FillStyle::Stroked => {
            let sw = paint.stroke_width;
            if sw <= 0.0 {
                return Vec::new();
            }
            if sw >= rx.min(ry) {
                return fill_convex(center, &outer);
            }
            stroke_ring(&outer, &ellipse_outline(center, rx - sw, ry - sw))
        }
    }
}
