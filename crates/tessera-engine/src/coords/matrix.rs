use super::{Point, Viewport};

/// Pixel → NDC normalization matrix (3×3, column-major).
///
/// Built for a viewport of `w × h` pixels with the origin at the bottom-left:
///
/// ```text
/// | 2/w   0   -1 |
/// |  0   2/h  -1 |
/// |  0    0    1 |
/// ```
///
/// `cols[c][r]` addresses column `c`, row `r`, so the translation lives in `cols[2]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NormalMatrix {
    pub cols: [[f32; 3]; 3],
}

impl NormalMatrix {
    #[inline]
    pub const fn identity() -> Self {
        Self {
            cols: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Orthographic projection for a `width × height` pixel viewport.
    ///
    /// Returns `None` when the size is not positive and finite.
    pub fn for_viewport(viewport: Viewport) -> Option<Self> {
        if !viewport.is_valid() {
            return None;
        }
        Some(Self {
            cols: [
                [2.0 / viewport.width, 0.0, 0.0],
                [0.0, 2.0 / viewport.height, 0.0],
                [-1.0, -1.0, 1.0],
            ],
        })
    }

    /// Returns the `(x, y)` scale factors.
    #[inline]
    pub fn scale(&self) -> (f32, f32) {
        (self.cols[0][0], self.cols[1][1])
    }

    /// Returns the `(x, y)` translation.
    #[inline]
    pub fn translation(&self) -> (f32, f32) {
        (self.cols[2][0], self.cols[2][1])
    }

    /// Transforms a pixel-space point into NDC.
    #[inline]
    pub fn transform_point(&self, p: Point) -> Point {
        let c = &self.cols;
        Point::new(
            c[0][0] * p.x + c[1][0] * p.y + c[2][0],
            c[0][1] * p.x + c[1][1] * p.y + c[2][1],
        )
    }
}

impl Default for NormalMatrix {
    fn default() -> Self {
        Self::identity()
    }
}
