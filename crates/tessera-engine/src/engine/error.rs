use thiserror::Error;

use crate::resources::ResourceError;
use crate::text::AtlasError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to load shader `{name}`")]
    Shader {
        name: String,
        #[source]
        source: ResourceError,
    },

    #[error("failed to load glyph atlas")]
    Atlas(#[from] AtlasError),

    #[error("invalid engine config: {0}")]
    Config(#[from] serde_json::Error),
}
