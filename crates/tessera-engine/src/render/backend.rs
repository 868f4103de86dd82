use crate::coords::NormalMatrix;
use crate::paint::Color;
use crate::resources::{ShaderHandle, TextureHandle, TextureId};
use crate::text::GlyphQuad;

/// One batch of quads sharing a texture, color and shader.
#[derive(Debug, Clone, Copy)]
pub struct QuadDraw<'a> {
    /// `None` selects the backend's built-in quad shader.
    pub shader: Option<&'a ShaderHandle>,
    /// `None` draws solid quads in `color`.
    pub texture: Option<&'a TextureHandle>,
    pub transform: &'a NormalMatrix,
    pub color: Color,
    pub quads: &'a [GlyphQuad],
}

/// Graphics API consumed by the render engine.
///
/// Calls within one frame arrive as `clear`, `draw_quads`…, `release_texture`…,
/// `end_frame`. Draws must be composited in call order.
pub trait GraphicsBackend {
    /// Starts a frame and clears the target.
    fn clear(&mut self, color: Color);

    /// The drawable size changed (pixels).
    fn set_viewport(&mut self, width: u32, height: u32);

    fn draw_quads(&mut self, draw: &QuadDraw<'_>);

    /// Frees any GPU copy of `id`. Only called between frames.
    fn release_texture(&mut self, id: TextureId);

    /// Finishes and presents the frame.
    fn end_frame(&mut self);
}
