use crate::paint::Color;
use crate::text::GlyphQuad;

/// Prebuilt quads drawn in a single color.
///
/// Used for geometry produced outside the text layout, e.g. glyph quads that
/// were laid out once and are replayed every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadBatch {
    pub quads: Vec<GlyphQuad>,
    pub color: Color,
}

impl QuadBatch {
    #[inline]
    pub fn new(quads: Vec<GlyphQuad>, color: Color) -> Self {
        Self { quads, color }
    }
}
