//! Tessellation shared by the curved shapes.

use crate::coords::Point;
use crate::text::GlyphQuad;

/// Fans a convex `outline` around `center`, two outline segments per quad.
pub(super) fn fill_convex(center: Point, outline: &[Point]) -> Vec<GlyphQuad> {
    let n = outline.len();
    (0..n)
        .step_by(2)
        .map(|i| {
            let a = outline[i];
            let b = outline[(i + 1) % n];
            // Odd outlines close with a degenerate second triangle.
            let c = if i + 1 < n { outline[(i + 2) % n] } else { b };
            GlyphQuad::polygon([center, a, b, c])
        })
        .collect()
}

/// Band between two outlines of equal length, one quad per segment.
pub(super) fn stroke_ring(outer: &[Point], inner: &[Point]) -> Vec<GlyphQuad> {
    debug_assert_eq!(outer.len(), inner.len());
    let n = outer.len();
    (0..n)
        .map(|i| {
            let j = (i + 1) % n;
            GlyphQuad::polygon([outer[i], outer[j], inner[j], inner[i]])
        })
        .collect()
}

#[cfg(test)]
pub(crate) fn covered_area(quads: &[GlyphQuad]) -> f32 {
    quads
        .iter()
        .map(|q| {
            let c = q.corners();
            let twice: f32 = (0..4)
                .map(|i| {
                    let (p, n) = (c[i], c[(i + 1) % 4]);
                    p.x * n.y - n.x * p.y
                })
                .sum();
            twice.abs() / 2.0
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(1.0, -1.0),
            Point::new(1.0, 1.0),
            Point::new(-1.0, 1.0),
            Point::new(-1.0, -1.0),
        ]
    }

    #[test]
    fn fan_covers_convex_outline() {
        let quads = fill_convex(Point::zero(), &square());
        assert_eq!(quads.len(), 2);
        assert_eq!(covered_area(&quads), 4.0);
    }

    #[test]
    fn odd_fan_closes_outline() {
        let tri = [Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(0.0, 2.0)];
        let quads = fill_convex(Point::new(0.5, 0.5), &tri);
        assert_eq!(quads.len(), 2);
        assert_eq!(covered_area(&quads), 2.0);
    }

    #[test]
    fn ring_covers_band() {
        let outer: Vec<Point> = square().into_iter().map(|p| Point::new(p.x * 2.0, p.y * 2.0)).collect();
        let quads = stroke_ring(&outer, &square());
        assert_eq!(quads.len(), 4);
        assert_eq!(covered_area(&quads), 12.0);
    }
}
