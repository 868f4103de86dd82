use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::assets::AssetReader;

use super::ResourceError;

/// Stable texture identifier. `0` is reserved for "no texture".
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Default)]
pub struct TextureId(pub u32);

impl TextureId {
    pub const NONE: TextureId = TextureId(0);

    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

/// Decoded texture: straight-alpha RGBA8 pixels, rows top to bottom.
pub struct Texture {
    id: TextureId,
    path: String,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl fmt::Debug for Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Texture")
            .field("id", &self.id)
            .field("path", &self.path)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Reference-counted handle to a cached texture.
///
/// Cloning is cheap. Equality compares ids.
#[derive(Debug, Clone)]
pub struct TextureHandle(Rc<Texture>);

impl TextureHandle {
    #[inline]
    pub fn id(&self) -> TextureId {
        self.0.id
    }

    #[inline]
    pub fn path(&self) -> &str {
        &self.0.path
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.0.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.0.height
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.0.pixels
    }

    /// Number of live handles, including the one held by the cache.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }
}

impl PartialEq for TextureHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for TextureHandle {}

/// Texture cache keyed by logical path.
///
/// `acquire_texture` decodes a file once; later calls return the cached handle.
/// Evicted ids are queued and handed to the backend at frame end via
/// [`drain_released`](Self::drain_released), so GPU copies outlive any
/// command still referencing them in the current frame.
#[derive(Debug)]
pub struct TextureCache {
    textures: HashMap<String, TextureHandle>,
    next_id: u32,
    released: Vec<TextureId>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self {
            textures: HashMap::new(),
            next_id: 1,
            released: Vec::new(),
        }
    }

    /// Returns the texture at `path`, decoding it through `reader` on first use.
    pub fn acquire_texture(
        &mut self,
        reader: &dyn AssetReader,
        path: &str,
    ) -> Result<TextureHandle, ResourceError> {
        if let Some(handle) = self.textures.get(path) {
            return Ok(handle.clone());
        }

        let bytes = reader.read_bytes(path)?;
        let image = image::load_from_memory(&bytes)
            .map_err(|source| ResourceError::Decode { path: path.to_owned(), source })?
            .to_rgba8();

        let (width, height) = image.dimensions();
        let handle = self.insert(path, width, height, image.into_raw());
        log::debug!("texture loaded: {path} ({width}x{height}) as {:?}", handle.id());
        Ok(handle)
    }

    /// Registers already-decoded RGBA8 pixels under `path`.
    ///
    /// Replaces any texture previously cached under the same path.
    pub fn insert_rgba(
        &mut self,
        path: &str,
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    ) -> Result<TextureHandle, ResourceError> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(ResourceError::InvalidPixelData {
                path: path.to_owned(),
                expected,
                actual: pixels.len(),
            });
        }
        self.release(path);
        Ok(self.insert(path, width, height, pixels))
    }

    fn insert(&mut self, path: &str, width: u32, height: u32, pixels: Vec<u8>) -> TextureHandle {
        let id = TextureId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1).max(1);

        let handle = TextureHandle(Rc::new(Texture {
            id,
            path: path.to_owned(),
            width,
            height,
            pixels,
        }));
        self.textures.insert(path.to_owned(), handle.clone());
        handle
    }

    /// Returns the cached texture at `path` without loading.
    pub fn get(&self, path: &str) -> Option<&TextureHandle> {
        self.textures.get(path)
    }

    /// Evicts `path`. Its GPU copy is reclaimed at the next frame end.
    ///
    /// Outstanding handles stay valid on the CPU side.
    pub fn release(&mut self, path: &str) -> bool {
        match self.textures.remove(path) {
            Some(handle) => {
                self.released.push(handle.id());
                true
            }
            None => false,
        }
    }

    /// Evicts every texture.
    pub fn clear(&mut self) {
        self.released.extend(self.textures.drain().map(|(_, h)| h.id()));
    }

    /// Takes the ids evicted since the last call.
    pub fn drain_released(&mut self) -> Vec<TextureId> {
        std::mem::take(&mut self.released)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// One-line summary of cached textures, sorted by id.
    pub fn describe(&self) -> String {
        let mut entries: Vec<_> = self.textures.values().collect();
        entries.sort_by_key(|h| h.id());
        entries
            .iter()
            .map(|h| format!("{}#{} {}x{}", h.path(), h.id().0, h.width(), h.height()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for TextureCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetError, MemoryAssetReader};
    use crate::test_support::png_bytes;

    #[test]
    fn acquire_decodes_once_and_shares_handle() {
        let reader = MemoryAssetReader::new().with("text/glyphs.png", png_bytes(4, 2));
        let mut cache = TextureCache::new();

        let a = cache.acquire_texture(&reader, "text/glyphs.png").unwrap();
        let b = cache.acquire_texture(&reader, "text/glyphs.png").unwrap();

        assert_eq!(a, b);
        assert_eq!((a.width(), a.height()), (4, 2));
        assert_eq!(a.pixels().len(), 4 * 2 * 4);
        assert_eq!(a.ref_count(), 3);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn ids_start_at_one() {
        let reader = MemoryAssetReader::new()
            .with("a.png", png_bytes(1, 1))
            .with("b.png", png_bytes(1, 1));
        let mut cache = TextureCache::new();
        assert_eq!(cache.acquire_texture(&reader, "a.png").unwrap().id(), TextureId(1));
        assert_eq!(cache.acquire_texture(&reader, "b.png").unwrap().id(), TextureId(2));
    }

    #[test]
    fn missing_file_is_an_asset_error() {
        let mut cache = TextureCache::new();
        let err = cache
            .acquire_texture(&MemoryAssetReader::new(), "missing.png")
            .unwrap_err();
        assert!(matches!(err, ResourceError::Asset(AssetError::NotFound { .. })));
        assert!(cache.is_empty());
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let reader = MemoryAssetReader::new().with("bad.png", b"not a png".to_vec());
        let err = TextureCache::new().acquire_texture(&reader, "bad.png").unwrap_err();
        assert!(matches!(err, ResourceError::Decode { ref path, .. } if path == "bad.png"));
    }

    #[test]
    fn insert_rgba_validates_length() {
        let mut cache = TextureCache::new();
        assert!(cache.insert_rgba("white", 1, 1, vec![255; 4]).is_ok());
        assert!(matches!(
            cache.insert_rgba("short", 2, 2, vec![0; 3]),
            Err(ResourceError::InvalidPixelData { expected: 16, actual: 3, .. })
        ));
    }

    #[test]
    fn release_queues_id_until_drained() {
        let mut cache = TextureCache::new();
        let h = cache.insert_rgba("white", 1, 1, vec![255; 4]).unwrap();

        assert!(cache.release("white"));
        assert!(!cache.release("white"));
        assert!(cache.get("white").is_none());
        // Outstanding handles keep the pixel data alive.
        assert_eq!(h.pixels(), &[255, 255, 255, 255]);

        assert_eq!(cache.drain_released(), vec![h.id()]);
        assert!(cache.drain_released().is_empty());
    }

    #[test]
    fn clear_releases_everything() {
        let mut cache = TextureCache::new();
        cache.insert_rgba("a", 1, 1, vec![0; 4]).unwrap();
        cache.insert_rgba("b", 1, 1, vec![0; 4]).unwrap();
        cache.clear();

        assert!(cache.is_empty());
        let mut released = cache.drain_released();
        released.sort();
        assert_eq!(released, vec![TextureId(1), TextureId(2)]);
    }
}
