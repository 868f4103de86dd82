//! Command buffer types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands for one frame
//! - preserve submission order (later commands draw on top; no z-sorting)
//! - keep command-specific helpers isolated per file under `scene::shapes`

mod cmd;
mod list;

pub mod shapes;

pub use cmd::{CommandKind, ExecuteCtx, RenderCommand};
pub use list::CommandList;
pub use shapes::quads::QuadBatch;
pub use shapes::text::{TextAnchor, TextRenderCommand};
pub use shapes::{ShapeCommand, ShapeType};
