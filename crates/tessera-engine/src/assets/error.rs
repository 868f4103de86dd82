use thiserror::Error;

/// Error returned by [`AssetReader`](super::AssetReader) implementations.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found: {path}")]
    NotFound { path: String },

    #[error("failed to read asset {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("asset {path} is not valid UTF-8")]
    InvalidUtf8 { path: String },
}

impl AssetError {
    /// Logical path of the asset that failed.
    pub fn path(&self) -> &str {
        match self {
            AssetError::NotFound { path }
            | AssetError::Io { path, .. }
            | AssetError::InvalidUtf8 { path } => path,
        }
    }
}
