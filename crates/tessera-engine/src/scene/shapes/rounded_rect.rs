use std::f32::consts::FRAC_PI_2;

use crate::coords::{Point, Rect};
use crate::paint::{FillStyle, Paint};
use crate::text::GlyphQuad;

use super::common::{fill_convex, stroke_ring};
use super::rect::rect_quads;

/// Outline vertices per corner arc.
pub(crate) const CORNER_SEGMENTS: usize = 8;

/// Counter-clockwise outline starting at the bottom-right arc.
fn outline(r: Rect, radius: f32) -> Vec<Point> {
    let bottom = r.bottom();
    let centers = [
        (Point::new(r.right() - radius, bottom + radius), -FRAC_PI_2),
        (Point::new(r.right() - radius, r.top - radius), 0.0),
        (Point::new(r.left + radius, r.top - radius), FRAC_PI_2),
        (Point::new(r.left + radius, bottom + radius), 2.0 * FRAC_PI_2),
    ];

    let mut points = Vec::with_capacity(4 * CORNER_SEGMENTS);
    for (c, start) in centers {
        for k in 0..CORNER_SEGMENTS {
            let t = start + FRAC_PI_2 * k as f32 / (CORNER_SEGMENTS - 1) as f32;
            let (s, cos) = t.sin_cos();
            points.push(Point::new(c.x + radius * cos, c.y + radius * s));
        }
    }
    points
}

/// Quads for a rectangle with uniform corner radius.
///
/// The radius is clamped to half the shorter side; a radius of zero draws
/// a plain rectangle.
pub(crate) fn round_rect_quads(rect: Rect, radius: f32, paint: &Paint) -> Vec<GlyphQuad> {
    let r = rect.normalized();
    if r.is_empty() {
        return Vec::new();
    }
    let radius = radius.min(r.width.min(r.height) / 2.0);
    if radius <= 0.0 {
        return rect_quads(r, paint);
    }

    let outer = outline(r, radius);
    match paint.fill_style {
        FillStyle::Filled => fill_convex(r.center(), &outer),
        FillStyle::Stroked => {
            let sw = paint.stroke_width;
            if sw <= 0.0 {
                return Vec::new();
            }
            if sw * 2.0 >= r.width || sw * 2.0 >= r.height {
                return fill_convex(r.center(), &outer);
            }

            let inner_rect = Rect::new(r.left + sw, r.top - sw, r.width - 2.0 * sw, r.height - 2.0 * sw);
            // Corner centers stay put while the inner outline shrinks; a
            // stroke wider than the radius leaves square inner corners.
            let inner = outline(inner_rect, (radius - sw).max(0.0));
            stroke_ring(&outer, &inner)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use crate::scene::shapes::common::covered_area;
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    fn bounds(quads: &[GlyphQuad]) -> (f32, f32, f32, f32) {
        quads.iter().flat_map(|q| q.corners()).fold(
            (f32::MAX, f32::MAX, f32::MIN, f32::MIN),
            |(x0, y0, x1, y1), p| (x0.min(p.x), y0.min(p.y), x1.max(p.x), y1.max(p.y)),
        )
    }

    #[test]
    fn filled_round_rect_trims_corners() {
        let quads = round_rect_quads(Rect::new(0.0, 50.0, 100.0, 50.0), 10.0, &Paint::default());
        assert_eq!(quads.len(), 2 * CORNER_SEGMENTS);
        assert_relative_eq!(covered_area(&quads), 5000.0 - (4.0 - PI) * 100.0, max_relative = 0.01);

        let (x0, y0, x1, y1) = bounds(&quads);
        assert_relative_eq!(x0, 0.0, epsilon = 1e-4);
        assert_relative_eq!(y0, 0.0, epsilon = 1e-4);
        assert_relative_eq!(x1, 100.0, epsilon = 1e-4);
        assert_relative_eq!(y1, 50.0, epsilon = 1e-4);
    }

    #[test]
    fn stroked_round_rect_is_a_band() {
        let paint = Paint::stroked(Color::white(), 2.0);
        let quads = round_rect_quads(Rect::new(0.0, 50.0, 100.0, 50.0), 10.0, &paint);
        assert_eq!(quads.len(), 4 * CORNER_SEGMENTS);

        let outer = 5000.0 - (4.0 - PI) * 100.0;
        let inner = 96.0 * 46.0 - (4.0 - PI) * 64.0;
        assert_relative_eq!(covered_area(&quads), outer - inner, max_relative = 0.01);
    }

    #[test]
    fn radius_is_clamped_to_half_the_short_side() {
        let rect = Rect::new(0.0, 20.0, 60.0, 20.0);
        let clamped = round_rect_quads(rect, 50.0, &Paint::default());
        assert_eq!(clamped, round_rect_quads(rect, 10.0, &Paint::default()));
        assert_relative_eq!(covered_area(&clamped), 1200.0 - (4.0 - PI) * 100.0, max_relative = 0.01);
    }

    #[test]
    fn zero_radius_is_a_plain_rect() {
        let rect = Rect::new(0.0, 10.0, 20.0, 10.0);
        assert_eq!(round_rect_quads(rect, 0.0, &Paint::default()), rect_quads(rect, &Paint::default()));
        assert!(round_rect_quads(Rect::new(0.0, 0.0, 0.0, 5.0), 2.0, &Paint::default()).is_empty());
    }
}
