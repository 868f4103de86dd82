//! Frame orchestration.
//!
//! [`RenderEngine`] owns the resource caches, the glyph atlas and the pending
//! command list, and flushes the list once per [`RenderEngine::render`].

mod config;
mod error;
mod render_engine;
mod state;

pub use config::EngineConfig;
pub use error::EngineError;
pub use render_engine::RenderEngine;
pub use state::FrameState;
