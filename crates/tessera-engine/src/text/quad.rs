use crate::coords::{Point, Rect};
use crate::resources::{TextureHandle, TextureId};

/// One drawable glyph (or solid) quad.
///
/// `x`, `y`, `width`, `height` describe the unrotated layout box with `(x, y)`
/// at its bottom-left. The corners are stored separately so rotations compose
/// on the final geometry rather than on the anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphQuad {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub tex_coords: [f32; 4],
    pub texture: Option<TextureHandle>,
    corners: [Point; 4],
}

impl GlyphQuad {
    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        tex_coords: [f32; 4],
        texture: Option<TextureHandle>,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            tex_coords,
            texture,
            corners: [
                Point::new(x, y),
                Point::new(x + width, y),
                Point::new(x + width, y + height),
                Point::new(x, y + height),
            ],
        }
    }

    /// Untextured quad covering `rect`.
    pub fn solid(rect: Rect) -> Self {
        let r = rect.normalized();
        Self::new(r.left, r.bottom(), r.width, r.height, [0.0; 4], None)
    }

    /// Untextured quad with arbitrary corners, drawn as the triangles
    /// `(c0, c1, c2)` and `(c0, c2, c3)`. The layout box is their bounds.
    pub fn polygon(corners: [Point; 4]) -> Self {
        let (mut min_x, mut min_y) = (f32::INFINITY, f32::INFINITY);
        let (mut max_x, mut max_y) = (f32::NEG_INFINITY, f32::NEG_INFINITY);
        for c in corners {
            min_x = min_x.min(c.x);
            min_y = min_y.min(c.y);
            max_x = max_x.max(c.x);
            max_y = max_y.max(c.y);
        }
        Self {
            x: min_x,
            y: min_y,
            width: max_x - min_x,
            height: max_y - min_y,
            tex_coords: [0.0; 4],
            texture: None,
            corners,
        }
    }

    /// Corners in drawing order: bottom-left, bottom-right, top-right, top-left.
    #[inline]
    pub fn corners(&self) -> [Point; 4] {
        self.corners
    }

    /// Texture coordinates matching [`corners`](Self::corners).
    #[inline]
    pub fn uv_corners(&self) -> [[f32; 2]; 4] {
        let [u0, v0, u1, v1] = self.tex_coords;
        [[u0, v1], [u1, v1], [u1, v0], [u0, v0]]
    }

    #[inline]
    pub fn texture_id(&self) -> TextureId {
        self.texture.as_ref().map_or(TextureId::NONE, TextureHandle::id)
    }

    /// Rotates all four corners about `pivot` by `angle` radians.
    pub fn rotate(&mut self, pivot: Point, angle: f32) {
        for c in &mut self.corners {
            c.rotate(pivot.x, pivot.y, angle);
        }
    }

    #[must_use]
    pub fn rotated(mut self, pivot: Point, angle: f32) -> Self {
        self.rotate(pivot, angle);
        self
    }
}

/// Rotates every quad about a shared pivot.
pub fn rotate_quads(quads: &mut [GlyphQuad], pivot: Point, angle: f32) {
    for q in quads {
        q.rotate(pivot, angle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn corners_follow_layout_box() {
        let q = GlyphQuad::new(10.0, 20.0, 5.0, 8.0, [0.0; 4], None);
        assert_eq!(
            q.corners(),
            [
                Point::new(10.0, 20.0),
                Point::new(15.0, 20.0),
                Point::new(15.0, 28.0),
                Point::new(10.0, 28.0),
            ]
        );
    }

    #[test]
    fn uv_top_left_maps_to_top_left_corner() {
        let q = GlyphQuad::new(0.0, 0.0, 1.0, 1.0, [0.1, 0.2, 0.3, 0.4], None);
        assert_eq!(q.uv_corners(), [[0.1, 0.4], [0.3, 0.4], [0.3, 0.2], [0.1, 0.2]]);
    }

    #[test]
    fn solid_uses_rect_bottom() {
        let q = GlyphQuad::solid(Rect::new(0.0, 100.0, 10.0, 30.0));
        assert_eq!((q.x, q.y, q.width, q.height), (0.0, 70.0, 10.0, 30.0));
        assert!(q.texture_id().is_none());
    }

    #[test]
    fn polygon_keeps_corners_and_bounds() {
        let corners = [
            Point::new(0.0, 0.0),
            Point::new(4.0, 1.0),
            Point::new(3.0, 5.0),
            Point::new(-1.0, 2.0),
        ];
        let q = GlyphQuad::polygon(corners);
        assert_eq!(q.corners(), corners);
        assert_eq!((q.x, q.y, q.width, q.height), (-1.0, 0.0, 5.0, 5.0));
        assert!(q.texture_id().is_none());
    }

    #[test]
    fn rotation_moves_corners_not_box() {
        let q = GlyphQuad::new(0.0, 0.0, 2.0, 1.0, [0.0; 4], None).rotated(Point::zero(), FRAC_PI_2);
        let c = q.corners();
        // (2, 0) → (0, 2); (2, 1) → (-1, 2).
        assert_relative_eq!(c[1].x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(c[1].y, 2.0, epsilon = 1e-6);
        assert_relative_eq!(c[2].x, -1.0, epsilon = 1e-6);
        assert_relative_eq!(c[2].y, 2.0, epsilon = 1e-6);
        assert_eq!((q.x, q.y, q.width, q.height), (0.0, 0.0, 2.0, 1.0));
    }

    #[test]
    fn rotations_compose() {
        let mut quads = vec![GlyphQuad::new(1.0, 0.0, 1.0, 1.0, [0.0; 4], None)];
        rotate_quads(&mut quads, Point::zero(), FRAC_PI_2);
        rotate_quads(&mut quads, Point::zero(), FRAC_PI_2);
        let bl = quads[0].corners()[0];
        assert_relative_eq!(bl.x, -1.0, epsilon = 1e-6);
        assert_relative_eq!(bl.y, 0.0, epsilon = 1e-6);
    }
}
