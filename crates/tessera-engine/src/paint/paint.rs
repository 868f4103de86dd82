use super::Color;

/// Whether a shape is filled or outlined.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum FillStyle {
    #[default]
    Filled,
    Stroked,
}

/// Shape paint: fill color plus stroke configuration.
///
/// `stroke_width` is in pixels and only used for [`FillStyle::Stroked`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub fill_style: FillStyle,
    pub stroke_width: f32,
}

impl Paint {
    #[inline]
    pub fn filled(color: Color) -> Self {
        Self { color, ..Self::default() }
    }

    #[inline]
    pub fn stroked(color: Color, stroke_width: f32) -> Self {
        Self { color, fill_style: FillStyle::Stroked, stroke_width }
    }
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            color: Color::white(),
            fill_style: FillStyle::Filled,
            stroke_width: 1.0,
        }
    }
}
