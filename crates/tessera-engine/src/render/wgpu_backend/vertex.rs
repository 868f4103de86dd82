use bytemuck::{Pod, Zeroable};

use crate::coords::NormalMatrix;
use crate::text::GlyphQuad;

/// Vertex layout (32 bytes):
///
///  offset  0  pos    [f32; 2]   loc 0  (NDC)
///  offset  8  uv     [f32; 2]   loc 1
///  offset 16  color  [f32; 4]   loc 2  (premultiplied)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(super) struct QuadVertex {
    pub pos: [f32; 2],
    pub uv: [f32; 2],
    pub color: [f32; 4],
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x2, // uv
        2 => Float32x4  // color
    ];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

/// Expands `quads` into NDC vertices and triangle-list indices.
///
/// Untextured quads sample the middle of the 1x1 white texture.
pub(super) fn build_geometry(
    quads: &[GlyphQuad],
    transform: &NormalMatrix,
    color: [f32; 4],
) -> (Vec<QuadVertex>, Vec<u32>) {
    let mut vertices = Vec::with_capacity(quads.len() * 4);
    let mut indices = Vec::with_capacity(quads.len() * 6);

    for quad in quads {
        let base = vertices.len() as u32;
        let uvs = if quad.texture.is_some() {
            quad.uv_corners()
        } else {
            [[0.5, 0.5]; 4]
        };
        for (corner, uv) in quad.corners().into_iter().zip(uvs) {
            let p = transform.transform_point(corner);
            vertices.push(QuadVertex { pos: [p.x, p.y], uv, color });
        }
        indices.extend(QUAD_INDICES.iter().map(|i| base + i));
    }

    (vertices, indices)
}
