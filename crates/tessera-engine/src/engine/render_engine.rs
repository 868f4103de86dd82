use crate::assets::AssetReader;
use crate::coords::{NormalMatrix, Point, Rect, Viewport};
use crate::paint::{Color, Paint, TextPaint};
use crate::render::GraphicsBackend;
use crate::resources::{ShaderCache, ShaderHandle, TextureCache};
use crate::scene::{
    CommandList, ExecuteCtx, QuadBatch, RenderCommand, ShapeCommand, ShapeType, TextAnchor,
    TextRenderCommand,
};
use crate::text::{GlyphAtlas, GlyphQuad};

use super::{EngineConfig, EngineError, FrameState};

/// Command-buffered renderer.
///
/// Draw requests made during a frame are recorded as commands; [`render`]
/// clears the target, executes them in submission order and empties the list.
/// Later commands draw on top of earlier ones.
///
/// [`render`]: RenderEngine::render
pub struct RenderEngine<B: GraphicsBackend> {
    backend: B,
    assets: Box<dyn AssetReader>,
    config: EngineConfig,

    textures: TextureCache,
    shaders: ShaderCache,
    atlas: GlyphAtlas,
    text_shader: Option<ShaderHandle>,

    commands: CommandList,
    normal_matrix: NormalMatrix,
    viewport: Option<Viewport>,
    state: FrameState,
}

impl<B: GraphicsBackend> RenderEngine<B> {
    /// Creates an engine with empty caches. Call [`init`](Self::init) before
    /// drawing text.
    pub fn new(backend: B, assets: impl AssetReader + 'static, config: EngineConfig) -> Self {
        let atlas = GlyphAtlas::new()
            .with_space_width(config.space_width)
            .with_texture_prefix(config.text_texture_prefix.clone());

        Self {
            backend,
            assets: Box::new(assets),
            config,
            textures: TextureCache::new(),
            shaders: ShaderCache::new(),
            atlas,
            text_shader: None,
            commands: CommandList::new(),
            normal_matrix: NormalMatrix::identity(),
            viewport: None,
            state: FrameState::Idle,
        }
    }

    /// Loads the text shader and the glyph atlas.
    pub fn init(&mut self) -> Result<(), EngineError> {
        let name = &self.config.text_shader_name;
        let shader = self
            .shaders
            .load_named_shader(
                self.assets.as_ref(),
                name,
                &self.config.text_vertex_shader,
                &self.config.text_fragment_shader,
            )
            .map_err(|source| EngineError::Shader { name: name.clone(), source })?;
        self.text_shader = Some(shader);

        self.reload_atlas()?;
        log::info!("render engine initialized");
        Ok(())
    }

    /// Rebuilds the atlas from the configured character document.
    ///
    /// On failure the previous atlas stays in place. Pending commands keep
    /// the glyph quads they were laid out with.
    pub fn reload_atlas(&mut self) -> Result<(), EngineError> {
        self.atlas.load_from_asset(
            self.assets.as_ref(),
            &self.config.char_config_path,
            &mut self.textures,
        )?;
        Ok(())
    }

    /// Appends `cmd` to this frame's list.
    pub fn submit_render_command(&mut self, cmd: RenderCommand) {
        debug_assert!(
            self.state.accepts_commands(),
            "command submitted while the frame is executing"
        );
        self.commands.push(cmd);
        self.state = FrameState::Accumulating;
    }

    /// A fresh, unpositioned text command.
    pub fn fetch_text_render_command(&self) -> TextRenderCommand {
        TextRenderCommand::new()
    }

    /// Draws `text` with its first baseline at `(left, bottom)`.
    ///
    /// Returns `false` (and records nothing) for empty text.
    pub fn render_text_at(&mut self, text: &str, left: f32, bottom: f32, paint: &TextPaint) -> bool {
        if text.is_empty() {
            return false;
        }
        let mut cmd = self.fetch_text_render_command();
        cmd.put_params(&self.atlas, text, left, bottom, paint);
        self.submit_render_command(RenderCommand::text(cmd));
        true
    }

    /// Draws `text` wrapped and aligned inside `rect`.
    ///
    /// Returns `false` (and records nothing) for empty text.
    pub fn render_text_in_rect(&mut self, text: &str, rect: &Rect, paint: &TextPaint) -> bool {
        if text.is_empty() {
            return false;
        }
        let mut cmd = self.fetch_text_render_command();
        cmd.put_params_in_rect(&self.atlas, text, rect, paint);
        self.submit_render_command(RenderCommand::text(cmd));
        true
    }

    /// Draws `text` laid out at `anchor`, then rotated by `angle` radians
    /// about `pivot`.
    pub fn render_text_rotated(
        &mut self,
        text: &str,
        anchor: TextAnchor,
        paint: &TextPaint,
        pivot: Point,
        angle: f32,
    ) -> bool {
        if text.is_empty() {
            return false;
        }
        let mut cmd = self.fetch_text_render_command();
        match anchor {
            TextAnchor::Point { left, bottom } => cmd.put_params(&self.atlas, text, left, bottom, paint),
            TextAnchor::Rect(rect) => cmd.put_params_in_rect(&self.atlas, text, &rect, paint),
        }
        self.submit_render_command(RenderCommand::text(cmd.with_rotation(pivot, angle)));
        true
    }

    /// Draws `rect` filled or outlined according to `paint`.
    pub fn render_rect(&mut self, rect: &Rect, paint: &Paint) {
        self.render_shape(ShapeType::Rect(*rect), paint);
    }

    /// Draws `rect` with corners rounded by `radius`, clamped to half the
    /// shorter side.
    pub fn render_round_rect(&mut self, rect: &Rect, radius: f32, paint: &Paint) {
        self.render_shape(ShapeType::RoundRect { rect: *rect, radius }, paint);
    }

    pub fn render_circle(&mut self, center: Point, radius: f32, paint: &Paint) {
        self.render_shape(ShapeType::Circle { center, radius }, paint);
    }

    /// Draws the ellipse inscribed in `rect`.
    pub fn render_oval(&mut self, rect: &Rect, paint: &Paint) {
        self.render_shape(ShapeType::Oval(*rect), paint);
    }

    fn render_shape(&mut self, shape: ShapeType, paint: &Paint) {
        self.submit_render_command(RenderCommand::shape(ShapeCommand::new(shape, *paint)));
    }

    /// Replays prebuilt `quads` in `color`.
    ///
    /// Returns `false` (and records nothing) for an empty batch.
    pub fn render_quads(&mut self, quads: Vec<GlyphQuad>, color: Color) -> bool {
        if quads.is_empty() {
            return false;
        }
        self.submit_render_command(RenderCommand::quads(QuadBatch::new(quads, color)));
        true
    }

    /// Flushes the frame and returns the number of executed commands.
    ///
    /// Clears the target, executes pending commands in submission order, marks
    /// them unused, empties the list, hands textures released since the last
    /// frame to the backend, then ends the frame.
    pub fn render(&mut self) -> usize {
        self.state = FrameState::Executing;
        self.backend.clear(self.config.clear_color());

        let mut ctx = ExecuteCtx {
            backend: &mut self.backend,
            transform: &self.normal_matrix,
            shader: self.text_shader.as_ref(),
        };
        for cmd in self.commands.items_mut() {
            cmd.execute(&mut ctx);
            cmd.mark_unused();
        }

        let executed = self.commands.len();
        self.commands.clear();

        for id in self.textures.drain_released() {
            self.backend.release_texture(id);
        }
        self.backend.end_frame();
        self.state = FrameState::Idle;

        log::trace!("frame rendered: {executed} commands");
        executed
    }

    /// Recomputes the normalization matrix for a `width × height` viewport.
    ///
    /// Non-positive sizes (minimized windows) are ignored.
    pub fn on_screen_resize(&mut self, width: u32, height: u32) {
        let viewport = Viewport::new(width as f32, height as f32);
        let Some(matrix) = NormalMatrix::for_viewport(viewport) else {
            log::warn!("ignoring resize to {width}x{height}");
            return;
        };
        self.normal_matrix = matrix;
        self.viewport = Some(viewport);
        self.backend.set_viewport(width, height);
        log::debug!("viewport resized to {width}x{height}");
    }

    /// Releases every cached resource and drops pending commands.
    pub fn free(&mut self) {
        self.commands.clear();
        self.atlas.clear();
        self.text_shader = None;
        self.shaders.clear();
        self.textures.clear();
        for id in self.textures.drain_released() {
            self.backend.release_texture(id);
        }
        self.state = FrameState::Idle;
        log::debug!("render engine resources freed");
    }

    pub fn pending_commands(&self) -> &[RenderCommand] {
        self.commands.items()
    }

    pub fn normal_matrix(&self) -> &NormalMatrix {
        &self.normal_matrix
    }

    /// Last accepted viewport, if any resize has been seen.
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn frame_state(&self) -> FrameState {
        self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn atlas(&self) -> &GlyphAtlas {
        &self.atlas
    }

    pub fn text_shader(&self) -> Option<&ShaderHandle> {
        self.text_shader.as_ref()
    }

    pub fn textures_mut(&mut self) -> &mut TextureCache {
        &mut self.textures
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}
