//! Tessera engine crate.
//!
//! Command-buffered 2D rendering: draw requests are recorded as commands during
//! a frame and flushed once by [`engine::RenderEngine::render`]. Text is drawn by
//! compositing pre-rasterized glyphs from a texture atlas described by a JSON
//! character map.

pub mod assets;
pub mod coords;
pub mod device;
pub mod engine;
pub mod logging;
pub mod paint;
pub mod render;
pub mod resources;
pub mod scene;
pub mod text;

#[cfg(test)]
pub(crate) mod test_support;
