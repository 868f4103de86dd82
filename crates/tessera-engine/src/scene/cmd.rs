use crate::coords::NormalMatrix;
use crate::paint::Color;
use crate::render::{GraphicsBackend, QuadDraw};
use crate::resources::ShaderHandle;
use crate::text::GlyphQuad;

use super::{QuadBatch, ShapeCommand, TextRenderCommand};

/// Renderer-agnostic command payloads.
///
/// Extending the command set:
/// - add a payload module under `scene::shapes::*`
/// - add a variant here and a match arm in [`RenderCommand::execute`]
/// - add a constructor on [`RenderCommand`] and an engine entry point
#[derive(Debug, Clone, PartialEq)]
pub enum CommandKind {
    /// Clears the target mid-frame.
    Clear(Color),
    Text(TextRenderCommand),
    Quads(QuadBatch),
    Shape(ShapeCommand),
}

/// Per-frame execution context.
///
/// Replaces a stored back-reference to the engine: commands only see the
/// engine state they need, and only while executing.
pub struct ExecuteCtx<'a> {
    pub backend: &'a mut dyn GraphicsBackend,
    pub transform: &'a NormalMatrix,
    /// Text program; shapes and quad batches always use the backend default.
    pub shader: Option<&'a ShaderHandle>,
}

/// A pending draw command.
///
/// `used` is set when the command is created for the current frame and cleared
/// once it has executed; a command pool can recycle unused commands.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCommand {
    kind: CommandKind,
    used: bool,
}

impl RenderCommand {
    #[inline]
    pub fn new(kind: CommandKind) -> Self {
        Self { kind, used: true }
    }

    #[inline]
    pub fn clear(color: Color) -> Self {
        Self::new(CommandKind::Clear(color))
    }

    #[inline]
    pub fn text(cmd: TextRenderCommand) -> Self {
        Self::new(CommandKind::Text(cmd))
    }

    #[inline]
    pub fn shape(cmd: ShapeCommand) -> Self {
        Self::new(CommandKind::Shape(cmd))
    }

    #[inline]
    pub fn quads(batch: QuadBatch) -> Self {
        Self::new(CommandKind::Quads(batch))
    }

    #[inline]
    pub fn kind(&self) -> &CommandKind {
        &self.kind
    }

    #[inline]
    pub fn is_used(&self) -> bool {
        self.used
    }

    #[inline]
    pub fn mark_unused(&mut self) {
        self.used = false;
    }

    /// Issues this command's draw calls.
    pub fn execute(&self, ctx: &mut ExecuteCtx<'_>) {
        match &self.kind {
            CommandKind::Clear(color) => ctx.backend.clear(*color),
            CommandKind::Text(text) => {
                let shader = ctx.shader;
                draw_by_texture(ctx, shader, text.quads(), text.paint().color);
            }
            CommandKind::Quads(batch) => draw_by_texture(ctx, None, &batch.quads, batch.color),
            CommandKind::Shape(shape) => {
                let quads = shape.quads();
                draw_by_texture(ctx, None, &quads, shape.paint.color);
            }
        }
    }
}

/// Splits `quads` into runs sharing a texture and draws each run.
fn draw_by_texture(
    ctx: &mut ExecuteCtx<'_>,
    shader: Option<&ShaderHandle>,
    quads: &[GlyphQuad],
    color: Color,
) {
    for run in quads.chunk_by(|a, b| a.texture_id() == b.texture_id()) {
        ctx.backend.draw_quads(&QuadDraw {
            shader,
            texture: run[0].texture.as_ref(),
            transform: ctx.transform,
            color,
            quads: run,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Point, Rect};
    use crate::paint::{Paint, TextPaint};
    use crate::render::{BackendCall, RecordingBackend};
    use crate::resources::{ShaderCache, TextureCache};
    use crate::scene::ShapeType;
    use crate::test_support::mono_atlas;

    fn run_with(cmd: &RenderCommand, shader: Option<&ShaderHandle>) -> RecordingBackend {
        let mut backend = RecordingBackend::new();
        let transform = NormalMatrix::identity();
        cmd.execute(&mut ExecuteCtx { backend: &mut backend, transform: &transform, shader });
        backend
    }

    fn run(cmd: &RenderCommand) -> RecordingBackend {
        run_with(cmd, None)
    }

    #[test]
    fn new_commands_are_used() {
        let mut cmd = RenderCommand::clear(Color::black());
        assert!(cmd.is_used());
        cmd.mark_unused();
        assert!(!cmd.is_used());
    }

    #[test]
    fn clear_command_clears() {
        let backend = run(&RenderCommand::clear(Color::black()));
        assert_eq!(backend.calls(), &[BackendCall::Clear(Color::black())]);
    }

    #[test]
    fn quads_split_into_texture_runs() {
        let mut textures = TextureCache::new();
        let a = textures.insert_rgba("a", 1, 1, vec![255; 4]).unwrap();
        let b = textures.insert_rgba("b", 1, 1, vec![255; 4]).unwrap();
        let quad = |t: &crate::resources::TextureHandle| {
            GlyphQuad::new(0.0, 0.0, 1.0, 1.0, [0.0, 0.0, 1.0, 1.0], Some(t.clone()))
        };

        let batch = QuadBatch::new(vec![quad(&a), quad(&a), quad(&b), quad(&a)], Color::white());
        let backend = run(&RenderCommand::quads(batch));

        let runs: Vec<_> = backend.draws().map(|d| (d.texture, d.quads.len())).collect();
        assert_eq!(runs, vec![(a.id(), 2), (b.id(), 1), (a.id(), 1)]);
    }

    #[test]
    fn empty_batch_draws_nothing() {
        let batch = QuadBatch::new(Vec::new(), Color::white());
        let backend = run(&RenderCommand::quads(batch));
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn shape_draws_untextured() {
        let cmd = RenderCommand::shape(ShapeCommand::new(
            ShapeType::Rect(Rect::new(0.0, 10.0, 10.0, 10.0)),
            Paint::filled(Color::black()),
        ));
        let backend = run(&cmd);
        let draw = backend.draws().next().unwrap();
        assert!(draw.texture.is_none());
        assert_eq!(draw.color, Color::black());
    }

    #[test]
    fn only_text_uses_the_context_shader() {
        let mut shaders = ShaderCache::new();
        let text_shader = shaders.insert_source("text", "", "");

        let circle = RenderCommand::shape(ShapeCommand::new(
            ShapeType::Circle { center: Point::new(5.0, 5.0), radius: 5.0 },
            Paint::default(),
        ));
        let backend = run_with(&circle, Some(&text_shader));
        assert!(backend.draws().count() > 0);
        assert!(backend.draws().all(|d| d.shader.is_none()));

        let batch = RenderCommand::quads(QuadBatch::new(
            vec![GlyphQuad::solid(Rect::new(0.0, 1.0, 1.0, 1.0))],
            Color::white(),
        ));
        let backend = run_with(&batch, Some(&text_shader));
        assert!(backend.draws().all(|d| d.shader.is_none()));

        let (atlas, _textures) = mono_atlas("a", 10, 20);
        let mut text = TextRenderCommand::new();
        text.put_params(&atlas, "a", 0.0, 0.0, &TextPaint::default());
        let backend = run_with(&RenderCommand::text(text), Some(&text_shader));
        assert_eq!(backend.draws().next().unwrap().shader, Some(text_shader.id()));
    }
}
