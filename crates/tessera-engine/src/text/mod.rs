//! Atlas-based glyph text.
//!
//! - [`GlyphAtlas`] maps characters to pre-rasterized glyphs loaded from a JSON
//!   character config.
//! - [`layout`] turns a string plus an anchor into positioned [`GlyphQuad`]s.

mod atlas;
mod error;
mod glyph;
pub mod layout;
mod quad;

pub use atlas::{DEFAULT_CHAR_CONFIG_PATH, GlyphAtlas, SPACE_WIDTH, TEXT_TEXTURE_PREFIX};
pub use error::AtlasError;
pub use glyph::GlyphInfo;
pub use layout::{layout_at_point, layout_in_rect, measure_text};
pub use quad::{GlyphQuad, rotate_quads};
