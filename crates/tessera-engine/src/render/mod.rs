//! Graphics backend seam.
//!
//! The engine never talks to a graphics API directly. It drives a
//! [`GraphicsBackend`]: one `clear`, any number of `draw_quads`, then
//! `end_frame`. Geometry arrives in pixels together with the current
//! [`NormalMatrix`](crate::coords::NormalMatrix); backends convert to NDC.
//!
//! - [`RecordingBackend`] keeps the call stream (headless runs, tests).
//! - [`WgpuBackend`] renders through wgpu.

mod backend;
mod recording;
mod wgpu_backend;

pub use backend::{GraphicsBackend, QuadDraw};
pub use recording::{BackendCall, RecordedDraw, RecordingBackend};
pub use wgpu_backend::WgpuBackend;
