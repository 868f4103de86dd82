//! GPU-facing resource caches.
//!
//! Caches hold CPU-side data plus a stable id; backends upload lazily by id.
//! Handles are `Rc`-counted and therefore confined to the rendering thread.

mod error;
mod shader;
mod texture;

pub use error::ResourceError;
pub use shader::{ShaderCache, ShaderHandle, ShaderId, ShaderProgram};
pub use texture::{Texture, TextureCache, TextureHandle, TextureId};
