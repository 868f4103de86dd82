use crate::coords::NormalMatrix;
use crate::paint::Color;
use crate::resources::{ShaderId, TextureId};
use crate::text::GlyphQuad;

use super::{GraphicsBackend, QuadDraw};

/// A `draw_quads` call as seen by [`RecordingBackend`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedDraw {
    pub shader: Option<ShaderId>,
    pub texture: TextureId,
    pub color: Color,
    pub transform: NormalMatrix,
    pub quads: Vec<GlyphQuad>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    Clear(Color),
    SetViewport { width: u32, height: u32 },
    DrawQuads(RecordedDraw),
    ReleaseTexture(TextureId),
    EndFrame,
}

/// Backend that records every call instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    calls: Vec<BackendCall>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[BackendCall] {
        &self.calls
    }

    /// Recorded draws, in call order.
    pub fn draws(&self) -> impl Iterator<Item = &RecordedDraw> {
        self.calls.iter().filter_map(|call| match call {
            BackendCall::DrawQuads(draw) => Some(draw),
            _ => None,
        })
    }

    /// Number of completed frames.
    pub fn frames(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, BackendCall::EndFrame)).count()
    }
}

impl GraphicsBackend for RecordingBackend {
    fn clear(&mut self, color: Color) {
        self.calls.push(BackendCall::Clear(color));
    }

    fn set_viewport(&mut self, width: u32, height: u32) {
        self.calls.push(BackendCall::SetViewport { width, height });
    }

    fn draw_quads(&mut self, draw: &QuadDraw<'_>) {
        self.calls.push(BackendCall::DrawQuads(RecordedDraw {
            shader: draw.shader.map(|s| s.id()),
            texture: draw.texture.map_or(TextureId::NONE, |t| t.id()),
            color: draw.color,
            transform: *draw.transform,
            quads: draw.quads.to_vec(),
        }));
    }

    fn release_texture(&mut self, id: TextureId) {
        self.calls.push(BackendCall::ReleaseTexture(id));
    }

    fn end_frame(&mut self) {
        self.calls.push(BackendCall::EndFrame);
    }
}
