//! Fixtures shared by unit tests.

use std::io::Cursor;

use crate::assets::MemoryAssetReader;
use crate::resources::TextureCache;
use crate::text::GlyphAtlas;

/// Encodes a solid white `w × h` PNG.
pub(crate) fn png_bytes(w: u32, h: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba([255, 255, 255, 255]));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("png encoding");
    bytes
}

/// Character config where every char in `chars` is `width × height` and lives
/// in `font.png`, each with distinct texture coordinates.
pub(crate) fn mono_config(chars: &str, width: u32, height: u32) -> String {
    let count = chars.chars().count().max(1) as f32;
    let entries: Vec<serde_json::Value> = chars
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            let u0 = i as f32 / count;
            let u1 = (i + 1) as f32 / count;
            serde_json::json!({
                "value": ch.to_string(),
                "width": width,
                "height": height,
                "texCoords": [u0, 0.0, u1, 1.0],
                "texture": "font.png",
            })
        })
        .collect();
    serde_json::json!({ "list": entries }).to_string()
}

/// Asset store holding `font.png`, the mono config and the text shaders.
pub(crate) fn mono_assets(chars: &str, width: u32, height: u32) -> MemoryAssetReader {
    MemoryAssetReader::new()
        .with("text/font.png", png_bytes(16, 16))
        .with("text/char_config.json", mono_config(chars, width, height))
        .with("shader/text_vert.wgsl", "// vertex")
        .with("shader/text_frag.wgsl", "// fragment")
}

/// Loaded monospace atlas plus the texture cache it resolved against.
pub(crate) fn mono_atlas(chars: &str, width: u32, height: u32) -> (GlyphAtlas, TextureCache) {
    let reader = mono_assets(chars, width, height);
    let mut atlas = GlyphAtlas::new();
    let mut textures = TextureCache::new();
    atlas
        .load(&mono_config(chars, width, height), &reader, &mut textures)
        .expect("mono atlas loads");
    (atlas, textures)
}
