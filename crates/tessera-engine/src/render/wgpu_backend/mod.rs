//! wgpu implementation of [`GraphicsBackend`].
//!
//! Every `draw_quads` call becomes its own render pass that loads the previous
//! contents, so draws composite strictly in call order. Geometry is converted
//! to NDC on the CPU with the draw's [`NormalMatrix`](crate::coords::NormalMatrix).

mod pipeline;
mod texture;
mod vertex;

use std::collections::HashMap;

use wgpu::util::DeviceExt;

use crate::device::{Gpu, GpuFrame, SurfaceErrorAction, SurfaceSize};
use crate::paint::Color;
use crate::resources::{ShaderId, TextureId};

use super::{GraphicsBackend, QuadDraw};
use texture::GpuTexture;

/// Renders through a [`Gpu`] surface.
pub struct WgpuBackend<'w> {
    gpu: Gpu<'w>,
    bind_group_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    white: GpuTexture,
    builtin_pipeline: Option<wgpu::RenderPipeline>,
    pipelines: HashMap<ShaderId, wgpu::RenderPipeline>,
    textures: HashMap<TextureId, GpuTexture>,
    frame: Option<GpuFrame>,
    fatal: bool,
}

impl<'w> WgpuBackend<'w> {
    pub fn new(gpu: Gpu<'w>) -> Self {
        let device = gpu.device();
        let bind_group_layout = pipeline::texture_bind_group_layout(device);
        let sampler = texture::create_sampler(device);
        let white = GpuTexture::upload_rgba(
            device,
            gpu.queue(),
            &bind_group_layout,
            &sampler,
            "tessera white",
            1,
            1,
            &[255; 4],
        );

        Self {
            gpu,
            bind_group_layout,
            sampler,
            white,
            builtin_pipeline: None,
            pipelines: HashMap::new(),
            textures: HashMap::new(),
            frame: None,
            fatal: false,
        }
    }

    pub fn gpu(&self) -> &Gpu<'w> {
        &self.gpu
    }

    /// The surface reported an unrecoverable error (out of memory).
    pub fn is_fatal(&self) -> bool {
        self.fatal
    }

    /// Number of textures currently resident on the GPU.
    pub fn resident_textures(&self) -> usize {
        self.textures.len()
    }

    fn ensure_frame(&mut self) -> bool {
        if self.frame.is_some() {
            return true;
        }
        match self.gpu.begin_frame() {
            Ok(frame) => {
                self.frame = Some(frame);
                true
            }
            Err(err) => {
                match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => {
                        log::error!("surface out of memory; frames are dropped");
                        self.fatal = true;
                    }
                    action => log::debug!("frame skipped ({action:?})"),
                }
                false
            }
        }
    }

    fn ensure_pipeline(&mut self, draw: &QuadDraw<'_>) {
        let device = self.gpu.device();
        let format = self.gpu.surface_format();
        match draw.shader {
            Some(shader) => {
                self.pipelines.entry(shader.id()).or_insert_with(|| {
                    pipeline::create_quad_pipeline(
                        device,
                        format,
                        &self.bind_group_layout,
                        Some(shader.program()),
                    )
                });
            }
            None => {
                if self.builtin_pipeline.is_none() {
                    self.builtin_pipeline = Some(pipeline::create_quad_pipeline(
                        device,
                        format,
                        &self.bind_group_layout,
                        None,
                    ));
                }
            }
        }
    }

    fn ensure_texture(&mut self, draw: &QuadDraw<'_>) {
        let Some(tex) = draw.texture else { return };
        if self.textures.contains_key(&tex.id()) {
            return;
        }
        log::trace!("uploading texture '{}' ({}x{})", tex.path(), tex.width(), tex.height());
        let gpu_tex = GpuTexture::upload(
            self.gpu.device(),
            self.gpu.queue(),
            &self.bind_group_layout,
            &self.sampler,
            tex,
        );
        self.textures.insert(tex.id(), gpu_tex);
    }
}

impl GraphicsBackend for WgpuBackend<'_> {
    fn clear(&mut self, color: Color) {
        if !self.ensure_frame() {
            return;
        }
        let Some(frame) = self.frame.as_mut() else { return };
        let [r, g, b, a] = color.to_array();

        let _pass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("tessera clear pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &frame.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: r as f64,
                        g: g as f64,
                        b: b as f64,
                        a: a as f64,
                    }),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });
    }

    fn set_viewport(&mut self, width: u32, height: u32) {
        self.gpu.resize(SurfaceSize::new(width, height));
    }

    fn draw_quads(&mut self, draw: &QuadDraw<'_>) {
        if draw.quads.is_empty() || !self.ensure_frame() {
            return;
        }
        self.ensure_pipeline(draw);
        self.ensure_texture(draw);

        let (vertices, indices) =
            vertex::build_geometry(draw.quads, draw.transform, draw.color.to_array());

        let device = self.gpu.device();
        let vbo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("tessera quad vbo"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let ibo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("tessera quad ibo"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let pipeline = match draw.shader {
            Some(shader) => self.pipelines.get(&shader.id()),
            None => self.builtin_pipeline.as_ref(),
        };
        let Some(pipeline) = pipeline else { return };
        let bind_group = match draw.texture {
            Some(tex) => match self.textures.get(&tex.id()) {
                Some(t) => &t.bind_group,
                None => {
                    log::warn!("texture '{}' not resident; batch skipped", tex.path());
                    return;
                }
            },
            None => &self.white.bind_group,
        };
        let Some(frame) = self.frame.as_mut() else { return };

        let mut rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("tessera quad pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &frame.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..indices.len() as u32, 0, 0..1);
    }

    fn release_texture(&mut self, id: TextureId) {
        if self.textures.remove(&id).is_some() {
            log::trace!("released gpu texture {id:?}");
        }
    }

    fn end_frame(&mut self) {
        if let Some(frame) = self.frame.take() {
            self.gpu.submit(frame);
        }
    }
}
