use crate::mesh::Vertex;

/// WGSL source shared by the vertex and fragment stages.
pub const TRIANGLE_SHADER: &str = include_str!("shaders/triangle.wgsl");

pub const VERTEX_ENTRY: &str = "vs_main";
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// Everything needed to build the render pipeline, minus the device.
#[derive(Debug, Clone)]
pub struct PipelineSpec<'a> {
    pub label: &'a str,
    pub shader_source: &'a str,
    pub vertex_entry: &'a str,
    pub fragment_entry: &'a str,
    pub vertex_layout: wgpu::VertexBufferLayout<'a>,
    pub color_format: wgpu::TextureFormat,
    pub topology: wgpu::PrimitiveTopology,
}

impl PipelineSpec<'static> {
    /// The triangle pipeline: one shader, one vertex buffer, one color target.
    pub fn triangle(color_format: wgpu::TextureFormat) -> Self {
        Self {
            label: "tricolor triangle pipeline",
            shader_source: TRIANGLE_SHADER,
            vertex_entry: VERTEX_ENTRY,
            fragment_entry: FRAGMENT_ENTRY,
            vertex_layout: Vertex::layout(),
            color_format,
            topology: wgpu::PrimitiveTopology::TriangleList,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_spec_uses_both_entry_points_of_one_module() {
        let spec = PipelineSpec::triangle(wgpu::TextureFormat::Bgra8Unorm);
        assert_eq!(spec.vertex_entry, "vs_main");
        assert_eq!(spec.fragment_entry, "fs_main");
        assert_eq!(spec.topology, wgpu::PrimitiveTopology::TriangleList);
        assert_eq!(spec.color_format, wgpu::TextureFormat::Bgra8Unorm);
        assert_eq!(spec.vertex_layout.array_stride, 20);
    }

    #[test]
    fn shader_declares_entry_points_and_no_bindings() {
        assert!(TRIANGLE_SHADER.contains("fn vs_main"));
        assert!(TRIANGLE_SHADER.contains("fn fs_main"));
        assert!(!TRIANGLE_SHADER.contains("@group"));
        assert!(!TRIANGLE_SHADER.contains("@binding"));
    }
}
