//! Asset access by logical path.
//!
//! Logical paths are `/`-separated and relative to an asset root
//! (e.g. `text/char_config.json`). Readers never interpret file contents.

mod error;
mod reader;

pub use error::AssetError;
pub use reader::{AssetReader, FsAssetReader, MemoryAssetReader};
