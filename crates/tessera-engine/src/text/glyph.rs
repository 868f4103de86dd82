use crate::resources::{TextureHandle, TextureId};

/// One pre-rasterized character in the atlas.
///
/// `tex_coords` is `[u0, v0, u1, v1]` in normalized texture space with `v`
/// growing downward through the image, so `(u0, v0)` is the glyph's top-left
/// texel and `(u1, v1)` its bottom-right.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphInfo {
    pub value: String,
    /// Pixel width at [`FONT_DEFAULT_SIZE`](crate::paint::FONT_DEFAULT_SIZE).
    pub width: u32,
    /// Pixel height at [`FONT_DEFAULT_SIZE`](crate::paint::FONT_DEFAULT_SIZE).
    pub height: u32,
    pub tex_coords: [f32; 4],
    /// `None` for glyphs with nothing to sample (the synthetic space).
    pub texture: Option<TextureHandle>,
}

impl GlyphInfo {
    /// The synthetic blank glyph: advance only, no height, no texture.
    pub fn blank(value: char, width: u32) -> Self {
        Self {
            value: value.to_string(),
            width,
            height: 0,
            tex_coords: [0.0; 4],
            texture: None,
        }
    }

    #[inline]
    pub fn texture_id(&self) -> TextureId {
        self.texture.as_ref().map_or(TextureId::NONE, TextureHandle::id)
    }

    /// True when the glyph produces no visible quad.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.height == 0 || self.texture.is_none()
    }
}
