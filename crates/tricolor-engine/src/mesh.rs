//! Triangle mesh: CPU-side vertex data, its buffer layout, and the GPU upload.

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

/// One vertex: clip-space position followed by an RGB color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 3],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // position
        1 => Float32x3  // color
    ];

    /// Layout of a tightly packed `Vertex` array, as seen by the vertex stage.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Floats per vertex (x, y, r, g, b).
pub const FLOATS_PER_VERTEX: usize = 5;

const TRIANGLE: [Vertex; 3] = [
    Vertex { position: [0.0, 0.5], color: [1.0, 0.0, 0.0] },
    Vertex { position: [-0.5, -0.5], color: [0.0, 1.0, 0.0] },
    Vertex { position: [0.5, -0.5], color: [0.0, 0.0, 1.0] },
];

/// The fixed triangle.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleMesh {
    vertices: [Vertex; 3],
}

impl Default for TriangleMesh {
    fn default() -> Self {
        Self::new()
    }
}

impl TriangleMesh {
    pub const fn new() -> Self {
        Self { vertices: TRIANGLE }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Vertex data as a flat float slice, `x, y, r, g, b` per vertex.
    pub fn floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Byte image uploaded to the vertex buffer.
    pub fn bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// A `TriangleMesh` resident in a GPU vertex buffer.
pub struct GpuMesh {
    buffer: wgpu::Buffer,
    vertex_count: u32,
}

impl GpuMesh {
    /// Allocates a vertex buffer sized for the mesh and fills it.
    ///
    /// The buffer is mapped at creation, written from the host, then unmapped.
    pub fn upload(device: &wgpu::Device, mesh: &TriangleMesh) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("tricolor triangle vbo"),
            contents: mesh.bytes(),
            usage: wgpu::BufferUsages::VERTEX,
        });

        log::debug!(
            "uploaded {} vertices ({} bytes)",
            mesh.vertex_count(),
            mesh.bytes().len()
        );

        Self {
            buffer,
            vertex_count: mesh.vertex_count(),
        }
    }

    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floats_are_position_then_color_per_vertex() {
        let mesh = TriangleMesh::new();
        assert_eq!(
            mesh.floats(),
            &[
                0.0, 0.5, 1.0, 0.0, 0.0, //
                -0.5, -0.5, 0.0, 1.0, 0.0, //
                0.5, -0.5, 0.0, 0.0, 1.0,
            ]
        );
    }

    #[test]
    fn mesh_holds_three_vertices_of_five_floats() {
        let mesh = TriangleMesh::default();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.floats().len(), 3 * FLOATS_PER_VERTEX);
        assert_eq!(mesh.bytes().len(), 60);
    }

    #[test]
    fn layout_stride_is_five_floats() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 20);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);
    }

    #[test]
    fn layout_attributes() {
        let layout = Vertex::layout();
        assert_eq!(layout.attributes.len(), 2);

        let position = layout.attributes[0];
        assert_eq!(position.shader_location, 0);
        assert_eq!(position.offset, 0);
        assert_eq!(position.format, wgpu::VertexFormat::Float32x2);

        let color = layout.attributes[1];
        assert_eq!(color.shader_location, 1);
        assert_eq!(color.offset, 8);
        assert_eq!(color.format, wgpu::VertexFormat::Float32x3);
    }
}
