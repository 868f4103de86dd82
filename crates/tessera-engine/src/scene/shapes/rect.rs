use crate::coords::Rect;
use crate::paint::{FillStyle, Paint};
use crate::text::GlyphQuad;

/// Quads for an axis-aligned rectangle.
///
/// Filled: one quad. Stroked: four edge strips of `stroke_width`, inset
/// from the rect; a stroke covering half the rect or more fills it.
pub(crate) fn rect_quads(rect: Rect, paint: &Paint) -> Vec<GlyphQuad> {
    let r = rect.normalized();
    if r.is_empty() {
        return Vec::new();
    }

    match paint.fill_style {
        FillStyle::Filled => vec![GlyphQuad::solid(r)],
        FillStyle::Stroked => {
            let sw = paint.stroke_width;
            if sw <= 0.0 {
                return Vec::new();
            }
            if sw * 2.0 >= r.width || sw * 2.0 >= r.height {
                return vec![GlyphQuad::solid(r)];
            }

            let bottom = r.bottom();
            let inner_h = r.height - 2.0 * sw;
            [
                Rect::from_bottom_left(r.left, bottom, r.width, sw),
                Rect::from_bottom_left(r.left, r.top - sw, r.width, sw),
                Rect::from_bottom_left(r.left, bottom + sw, sw, inner_h),
                Rect::from_bottom_left(r.right() - sw, bottom + sw, sw, inner_h),
            ]
            .into_iter()
            .map(GlyphQuad::solid)
            .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    #[test]
    fn filled_is_one_quad() {
        let quads = rect_quads(Rect::new(0.0, 10.0, 20.0, 10.0), &Paint::default());
        assert_eq!(quads.len(), 1);
        assert_eq!((quads[0].x, quads[0].y, quads[0].width, quads[0].height), (0.0, 0.0, 20.0, 10.0));
    }

    #[test]
    fn stroked_is_four_edges() {
        let paint = Paint::stroked(Color::white(), 2.0);
        let quads = rect_quads(Rect::new(0.0, 10.0, 20.0, 10.0), &paint);
        assert_eq!(quads.len(), 4);

        let area: f32 = quads.iter().map(|q| q.width * q.height).sum();
        // 20·10 − 16·6
        assert_eq!(area, 104.0);
        assert!(quads.iter().all(|q| q.texture.is_none()));
    }

    #[test]
    fn thick_stroke_fills() {
        let paint = Paint::stroked(Color::white(), 6.0);
        let quads = rect_quads(Rect::new(0.0, 10.0, 20.0, 10.0), &paint);
        assert_eq!(quads.len(), 1);
    }

    #[test]
    fn empty_rect_has_no_quads() {
        assert!(rect_quads(Rect::new(0.0, 0.0, 0.0, 5.0), &Paint::default()).is_empty());
        let zero = Paint::stroked(Color::white(), 0.0);
        assert!(rect_quads(Rect::new(0.0, 10.0, 5.0, 5.0), &zero).is_empty());
    }
}
