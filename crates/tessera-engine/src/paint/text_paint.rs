use super::Color;

/// Reference point size the atlas glyphs were rasterized at.
pub const FONT_DEFAULT_SIZE: f32 = 64.0;

/// Glyph style. `Italic` is reserved; it currently renders as `Normal`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum TextStyle {
    #[default]
    Normal,
    Italic,
}

/// Horizontal alignment of a line inside its bounding rect.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum TextGravity {
    #[default]
    Left,
    Center,
    Right,
}

/// Text paint, created per draw call.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextPaint {
    /// Multiplier applied to atlas glyph sizes (`1.0` = [`FONT_DEFAULT_SIZE`]).
    pub text_size_scale: f32,
    /// Horizontal gap between glyphs, in pixels. Also used as line spacing.
    pub gap_size: f32,
    pub color: Color,
    pub style: TextStyle,
    pub gravity: TextGravity,
}

impl TextPaint {
    /// Sets the scale from a requested point size.
    #[inline]
    pub fn set_text_size(&mut self, size: f32) {
        self.text_size_scale = size / FONT_DEFAULT_SIZE;
    }

    #[inline]
    #[must_use]
    pub fn with_text_size(mut self, size: f32) -> Self {
        self.set_text_size(size);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_gravity(mut self, gravity: TextGravity) -> Self {
        self.gravity = gravity;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_gap(mut self, gap_size: f32) -> Self {
        self.gap_size = gap_size;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Default for TextPaint {
    fn default() -> Self {
        Self {
            text_size_scale: 1.0,
            gap_size: 4.0,
            color: Color::white(),
            style: TextStyle::Normal,
            gravity: TextGravity::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_size_is_relative_to_reference() {
        let paint = TextPaint::default().with_text_size(32.0);
        assert_eq!(paint.text_size_scale, 0.5);
    }

    #[test]
    fn defaults_match_engine_conventions() {
        let paint = TextPaint::default();
        assert_eq!(paint.text_size_scale, 1.0);
        assert_eq!(paint.gap_size, 4.0);
        assert_eq!(paint.gravity, TextGravity::Left);
        assert_eq!(paint.style, TextStyle::Normal);
    }
}
