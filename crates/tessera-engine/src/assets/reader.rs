use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::AssetError;

/// Source of raw asset bytes.
pub trait AssetReader {
    /// Reads the whole asset at `path`.
    fn read_bytes(&self, path: &str) -> Result<Vec<u8>, AssetError>;

    /// Reads the asset at `path` as UTF-8 text.
    fn read_text_file(&self, path: &str) -> Result<String, AssetError> {
        let bytes = self.read_bytes(path)?;
        String::from_utf8(bytes).map_err(|_| AssetError::InvalidUtf8 { path: path.to_owned() })
    }
}

/// Reads assets from a directory on disk.
#[derive(Debug, Clone)]
pub struct FsAssetReader {
    root: PathBuf,
}

impl FsAssetReader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        path.split('/')
            .filter(|seg| !seg.is_empty())
            .fold(self.root.clone(), |acc, seg| acc.join(seg))
    }
}

impl AssetReader for FsAssetReader {
    fn read_bytes(&self, path: &str) -> Result<Vec<u8>, AssetError> {
        let full = self.resolve(path);
        std::fs::read(&full).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                AssetError::NotFound { path: path.to_owned() }
            } else {
                AssetError::Io { path: path.to_owned(), source }
            }
        })
    }
}

/// In-memory asset store.
///
/// Useful for embedded assets and for exercising loaders without touching disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetReader {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryAssetReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), bytes.into());
    }

    #[must_use]
    pub fn with(mut self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(path, bytes);
        self
    }

    pub fn remove(&mut self, path: &str) -> Option<Vec<u8>> {
        self.files.remove(path)
    }
}

impl AssetReader for MemoryAssetReader {
    fn read_bytes(&self, path: &str) -> Result<Vec<u8>, AssetError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| AssetError::NotFound { path: path.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_reader_returns_text() {
        let reader = MemoryAssetReader::new().with("text/a.json", "{}");
        assert_eq!(reader.read_text_file("text/a.json").unwrap(), "{}");
    }

    #[test]
    fn memory_reader_reports_missing_path() {
        let err = MemoryAssetReader::new().read_bytes("nope.png").unwrap_err();
        assert!(matches!(err, AssetError::NotFound { .. }));
        assert_eq!(err.path(), "nope.png");
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let reader = MemoryAssetReader::new().with("bin", vec![0xff, 0xfe]);
        assert!(matches!(
            reader.read_text_file("bin"),
            Err(AssetError::InvalidUtf8 { .. })
        ));
    }

    #[test]
    fn fs_reader_maps_missing_file_to_not_found() {
        let reader = FsAssetReader::new(std::env::temp_dir().join("tessera-missing-root"));
        let err = reader.read_text_file("text/char_config.json").unwrap_err();
        assert!(matches!(err, AssetError::NotFound { .. }));
    }

    #[test]
    fn fs_reader_reads_relative_to_root() {
        let root = std::env::temp_dir().join(format!("tessera-assets-{}", std::process::id()));
        std::fs::create_dir_all(root.join("shader")).unwrap();
        std::fs::write(root.join("shader").join("a.wgsl"), "// wgsl").unwrap();

        let reader = FsAssetReader::new(&root);
        assert_eq!(reader.read_text_file("shader/a.wgsl").unwrap(), "// wgsl");

        std::fs::remove_dir_all(&root).unwrap();
    }
}
