use thiserror::Error;

use crate::assets::AssetError;

/// Error returned when acquiring a texture or shader.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error("failed to decode texture {path}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("texture {path}: expected {expected} bytes of RGBA8 data, got {actual}")]
    InvalidPixelData {
        path: String,
        expected: usize,
        actual: usize,
    },
}
