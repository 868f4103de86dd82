use thiserror::Error;

use crate::assets::AssetError;
use crate::resources::ResourceError;

/// Error returned when loading a [`GlyphAtlas`](super::GlyphAtlas).
///
/// Every variant aborts the whole load; the atlas keeps its previous contents.
#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("failed to read character config")]
    ConfigRead(#[from] AssetError),

    #[error("malformed character config: {reason}")]
    MalformedDocument { reason: String },

    #[error("malformed character entry #{index}: {reason}")]
    MalformedEntry { index: usize, reason: String },

    #[error("failed to resolve atlas texture {path}")]
    TextureResolutionFailed {
        path: String,
        #[source]
        source: ResourceError,
    },
}
