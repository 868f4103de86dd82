use super::Point;

/// Axis-aligned rectangle in pixels.
///
/// `top` is the upper edge and is numerically larger than the bottom edge:
/// `bottom() == top - height`. Layout anchoring depends on this; do not flip it.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    /// Builds a rect from its bottom-left corner and size.
    #[inline]
    pub fn from_bottom_left(left: f32, bottom: f32, width: f32, height: f32) -> Self {
        Self::new(left, bottom + height, width, height)
    }

    #[inline]
    pub fn right(self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.top - self.height
    }

    #[inline]
    pub fn center(self) -> Point {
        Point::new(
            (self.left + self.right()) / 2.0,
            (self.bottom() + self.top) / 2.0,
        )
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut r = self;
        if r.width < 0.0 {
            r.left += r.width;
            r.width = -r.width;
        }
        if r.height < 0.0 {
            r.top -= r.height;
            r.height = -r.height;
        }
        r
    }
}
