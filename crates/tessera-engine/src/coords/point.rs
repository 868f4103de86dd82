/// 2D point in pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Rotates the point in place about `(cx, cy)` by `angle` radians.
    ///
    /// Positive angles rotate counter-clockwise in the +Y-up space:
    /// `x' = dx·cos − dy·sin + cx`, `y' = dx·sin + dy·cos + cy`.
    #[inline]
    pub fn rotate(&mut self, cx: f32, cy: f32, angle: f32) {
        let (s, c) = angle.sin_cos();

        let dx = self.x - cx;
        let dy = self.y - cy;

        self.x = dx * c - dy * s + cx;
        self.y = dx * s + dy * c + cy;
    }

    /// Returns a copy rotated about `pivot` by `angle` radians.
    #[inline]
    #[must_use]
    pub fn rotated(mut self, pivot: Point, angle: f32) -> Self {
        self.rotate(pivot.x, pivot.y, angle);
        self
    }
}
