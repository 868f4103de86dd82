use std::collections::HashMap;
use std::rc::Rc;

use serde::Deserialize;

use crate::assets::AssetReader;
use crate::resources::{TextureCache, TextureHandle};

use super::{AtlasError, GlyphInfo};

/// Advance of the synthetic space glyph, in pixels at the reference size.
pub const SPACE_WIDTH: u32 = 32;

/// Logical directory atlas texture references are resolved against.
pub const TEXT_TEXTURE_PREFIX: &str = "text/";

/// Default location of the character config.
pub const DEFAULT_CHAR_CONFIG_PATH: &str = "text/char_config.json";

#[derive(Deserialize)]
struct CharConfig {
    list: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
struct CharEntry {
    value: String,
    width: u32,
    height: u32,
    #[serde(rename = "texCoords")]
    tex_coords: [f32; 4],
    texture: String,
}

/// Character → glyph mapping built from a JSON character config.
///
/// Config shape:
///
/// ```json
/// { "list": [ { "value": "A", "width": 40, "height": 56,
///               "texCoords": [0.0, 0.0, 0.1, 0.2], "texture": "font.png" } ] }
/// ```
///
/// Entries are keyed by the first character of `value`; a repeated character
/// replaces the earlier entry. A space glyph is always injected after the
/// configured entries, so `' '` resolves once a load has succeeded.
#[derive(Debug)]
pub struct GlyphAtlas {
    glyphs: HashMap<char, Rc<GlyphInfo>>,
    space_width: u32,
    texture_prefix: String,
    line_height: u32,
    main_texture: Option<TextureHandle>,
}

impl GlyphAtlas {
    pub fn new() -> Self {
        Self {
            glyphs: HashMap::new(),
            space_width: SPACE_WIDTH,
            texture_prefix: TEXT_TEXTURE_PREFIX.to_owned(),
            line_height: 0,
            main_texture: None,
        }
    }

    /// Overrides the synthetic space advance. Takes effect on the next load.
    #[must_use]
    pub fn with_space_width(mut self, space_width: u32) -> Self {
        self.space_width = space_width;
        self
    }

    /// Overrides the directory texture references are resolved against.
    #[must_use]
    pub fn with_texture_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.texture_prefix = prefix.into();
        self
    }

    /// Reads the config at `path` and loads it.
    pub fn load_from_asset(
        &mut self,
        reader: &dyn AssetReader,
        path: &str,
        textures: &mut TextureCache,
    ) -> Result<(), AtlasError> {
        let source = reader.read_text_file(path)?;
        self.load(&source, reader, textures)
    }

    /// Parses `source` and replaces the atlas contents.
    ///
    /// All-or-nothing: on error the previous mapping is kept untouched.
    pub fn load(
        &mut self,
        source: &str,
        reader: &dyn AssetReader,
        textures: &mut TextureCache,
    ) -> Result<(), AtlasError> {
        let config: CharConfig = serde_json::from_str(source)
            .map_err(|e| AtlasError::MalformedDocument { reason: e.to_string() })?;
        log::debug!("character config lists {} entries", config.list.len());

        let mut staged: HashMap<char, Rc<GlyphInfo>> = HashMap::with_capacity(config.list.len() + 1);
        let mut main_texture = None;
        let mut line_height = 0;

        for (index, item) in config.list.into_iter().enumerate() {
            let entry: CharEntry = serde_json::from_value(item)
                .map_err(|e| AtlasError::MalformedEntry { index, reason: e.to_string() })?;

            let Some(ch) = entry.value.chars().next() else {
                return Err(AtlasError::MalformedEntry {
                    index,
                    reason: "empty `value`".to_owned(),
                });
            };

            let path = format!("{}{}", self.texture_prefix, entry.texture);
            let texture = textures
                .acquire_texture(reader, &path)
                .map_err(|source| AtlasError::TextureResolutionFailed { path, source })?;

            line_height = line_height.max(entry.height);
            main_texture = Some(texture.clone());

            let glyph = GlyphInfo {
                value: entry.value,
                width: entry.width,
                height: entry.height,
                tex_coords: entry.tex_coords,
                texture: Some(texture),
            };
            if staged.insert(ch, Rc::new(glyph)).is_some() {
                log::debug!("character {ch:?} defined more than once; keeping entry #{index}");
            }
        }

        staged.insert(' ', Rc::new(GlyphInfo::blank(' ', self.space_width)));

        self.glyphs = staged;
        self.line_height = line_height;
        self.main_texture = main_texture;

        log::info!("glyph atlas loaded: {} glyphs", self.glyphs.len());
        log::debug!("textures: {}", textures.describe());
        Ok(())
    }

    /// Returns the glyph for `ch`, if the atlas has one.
    #[inline]
    pub fn lookup(&self, ch: char) -> Option<Rc<GlyphInfo>> {
        self.glyphs.get(&ch).cloned()
    }

    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch)
    }

    /// Advance used for spaces and for characters missing from the atlas.
    #[inline]
    pub fn space_width(&self) -> u32 {
        self.space_width
    }

    /// Tallest glyph in the config, in pixels at the reference size.
    #[inline]
    pub fn line_height(&self) -> u32 {
        self.line_height
    }

    /// Texture of the last configured entry.
    pub fn main_texture(&self) -> Option<&TextureHandle> {
        self.main_texture.as_ref()
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Drops every glyph. Texture handles are released with them.
    pub fn clear(&mut self) {
        self.glyphs.clear();
        self.line_height = 0;
        self.main_texture = None;
    }
}

impl Default for GlyphAtlas {
    fn default() -> Self {
        Self::new()
    }
}
