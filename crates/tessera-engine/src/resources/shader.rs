use std::collections::HashMap;
use std::rc::Rc;

use crate::assets::AssetReader;

use super::ResourceError;

/// Stable shader identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ShaderId(pub u32);

/// Vertex + fragment source pair.
///
/// Sources are WGSL; the vertex stage must export `vs_main` and the fragment
/// stage `fs_main`. Compilation happens in the backend on first use.
#[derive(Debug)]
pub struct ShaderProgram {
    pub id: ShaderId,
    pub name: String,
    pub vertex_source: String,
    pub fragment_source: String,
}

/// Reference-counted handle to a cached shader program.
#[derive(Debug, Clone)]
pub struct ShaderHandle(Rc<ShaderProgram>);

impl ShaderHandle {
    #[inline]
    pub fn id(&self) -> ShaderId {
        self.0.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    #[inline]
    pub fn program(&self) -> &ShaderProgram {
        &self.0
    }
}

/// Shader cache keyed by logical name.
#[derive(Debug)]
pub struct ShaderCache {
    shaders: HashMap<String, ShaderHandle>,
    next_id: u32,
}

impl ShaderCache {
    pub fn new() -> Self {
        Self { shaders: HashMap::new(), next_id: 1 }
    }

    /// Loads (or returns the cached) program `name` from two source files.
    ///
    /// A cached program is returned as-is even if the paths differ.
    pub fn load_named_shader(
        &mut self,
        reader: &dyn AssetReader,
        name: &str,
        vertex_path: &str,
        fragment_path: &str,
    ) -> Result<ShaderHandle, ResourceError> {
        if let Some(handle) = self.shaders.get(name) {
            return Ok(handle.clone());
        }

        let vertex_source = reader.read_text_file(vertex_path)?;
        let fragment_source = reader.read_text_file(fragment_path)?;

        let handle = self.insert_source(name, vertex_source, fragment_source);
        log::debug!("shader loaded: {name} ({vertex_path}, {fragment_path})");
        Ok(handle)
    }

    /// Registers a program from in-memory sources, replacing any with the same name.
    pub fn insert_source(
        &mut self,
        name: &str,
        vertex_source: impl Into<String>,
        fragment_source: impl Into<String>,
    ) -> ShaderHandle {
        let id = ShaderId(self.next_id);
        self.next_id += 1;

        let handle = ShaderHandle(Rc::new(ShaderProgram {
            id,
            name: name.to_owned(),
            vertex_source: vertex_source.into(),
            fragment_source: fragment_source.into(),
        }));
        self.shaders.insert(name.to_owned(), handle.clone());
        handle
    }

    pub fn get(&self, name: &str) -> Option<&ShaderHandle> {
        self.shaders.get(name)
    }

    pub fn clear(&mut self) {
        self.shaders.clear();
    }

    pub fn len(&self) -> usize {
        self.shaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shaders.is_empty()
    }
}

impl Default for ShaderCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::MemoryAssetReader;

    fn reader() -> MemoryAssetReader {
        MemoryAssetReader::new()
            .with("shader/v.wgsl", "// vertex")
            .with("shader/f.wgsl", "// fragment")
    }

    #[test]
    fn loads_both_stages() {
        let mut cache = ShaderCache::new();
        let h = cache
            .load_named_shader(&reader(), "text_render", "shader/v.wgsl", "shader/f.wgsl")
            .unwrap();
        assert_eq!(h.name(), "text_render");
        assert_eq!(h.program().vertex_source, "// vertex");
        assert_eq!(h.program().fragment_source, "// fragment");
    }

    #[test]
    fn cached_by_name() {
        let mut cache = ShaderCache::new();
        let a = cache
            .load_named_shader(&reader(), "s", "shader/v.wgsl", "shader/f.wgsl")
            .unwrap();
        // Second call must not touch the reader.
        let b = cache
            .load_named_shader(&MemoryAssetReader::new(), "s", "x", "y")
            .unwrap();
        assert_eq!(a.id(), b.id());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn missing_stage_fails() {
        let reader = MemoryAssetReader::new().with("shader/v.wgsl", "// vertex");
        let err = ShaderCache::new()
            .load_named_shader(&reader, "s", "shader/v.wgsl", "shader/f.wgsl")
            .unwrap_err();
        assert!(matches!(err, ResourceError::Asset(_)));
    }
}
