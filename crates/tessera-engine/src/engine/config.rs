use serde::Deserialize;

use crate::paint::Color;
use crate::text::{DEFAULT_CHAR_CONFIG_PATH, SPACE_WIDTH, TEXT_TEXTURE_PREFIX};

use super::EngineError;

/// Engine configuration.
///
/// Every field has a default, so a host config only lists what it changes:
///
/// ```json
/// { "space_width": 24, "clear_color": [0.0, 0.0, 0.0, 1.0] }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Logical path of the character config document.
    pub char_config_path: String,
    /// Directory glyph texture references are resolved against.
    pub text_texture_prefix: String,
    pub text_shader_name: String,
    pub text_vertex_shader: String,
    pub text_fragment_shader: String,
    /// Advance of the synthetic space glyph, in unscaled pixels.
    pub space_width: u32,
    /// Straight-alpha RGBA used to clear each frame.
    pub clear_color: [f32; 4],
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            char_config_path: DEFAULT_CHAR_CONFIG_PATH.to_owned(),
            text_texture_prefix: TEXT_TEXTURE_PREFIX.to_owned(),
            text_shader_name: "text_render".to_owned(),
            text_vertex_shader: "shader/text_vert.wgsl".to_owned(),
            text_fragment_shader: "shader/text_frag.wgsl".to_owned(),
            space_width: SPACE_WIDTH,
            clear_color: [0.2, 0.3, 0.3, 1.0],
        }
    }
}

impl EngineConfig {
    pub fn from_json(source: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Clear color, premultiplied.
    pub fn clear_color(&self) -> Color {
        let [r, g, b, a] = self.clear_color;
        Color::from_straight(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = EngineConfig::from_json(r#"{ "space_width": 24 }"#).unwrap();
        assert_eq!(config.space_width, 24);
        assert_eq!(config.char_config_path, "text/char_config.json");
        assert_eq!(config.text_shader_name, "text_render");
    }

    #[test]
    fn bad_json_is_config_error() {
        let err = EngineConfig::from_json("{ space_width: }").unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn clear_color_is_premultiplied() {
        let config = EngineConfig {
            clear_color: [1.0, 0.5, 0.0, 0.5],
            ..EngineConfig::default()
        };
        assert_eq!(config.clear_color(), Color::from_premul(0.5, 0.25, 0.0, 0.5));
    }
}
