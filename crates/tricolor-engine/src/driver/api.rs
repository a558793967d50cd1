use anyhow::Result;

use crate::device::{GpuInit, LostCallback};
use crate::mesh::TriangleMesh;
use crate::render::{FramePlan, PipelineSpec};

/// Entry point of a graphics API: capability probe and device acquisition.
pub trait GraphicsApi {
    type Device: GraphicsDevice;

    /// Whether any graphics backend can drive the target surface.
    fn is_available(&self) -> bool;

    /// Selects an adapter per `init.power_preference` and opens a device on it.
    fn request_device(&mut self, init: &GpuInit) -> Result<Self::Device>;
}

/// A logical device plus the single set of resources the triangle needs.
///
/// Methods are called at most once each, in declaration order.
pub trait GraphicsDevice {
    /// Registers the loss observer. It may be invoked from any thread.
    fn set_lost_callback(&self, callback: LostCallback);

    /// Configures the surface; returns the color format to render into.
    fn configure_surface(&mut self, init: &GpuInit) -> Result<wgpu::TextureFormat>;

    /// Uploads the mesh into a vertex buffer.
    fn create_mesh(&mut self, mesh: &TriangleMesh) -> Result<()>;

    /// Creates the empty bind-group layout and its empty bind group.
    fn create_bindings(&mut self) -> Result<()>;

    /// Creates the pipeline layout (from the bind-group layout) and the pipeline.
    fn create_pipeline(&mut self, spec: &PipelineSpec<'_>) -> Result<()>;

    /// Records `frame` into one command buffer and submits it.
    fn submit(&mut self, frame: &FramePlan) -> Result<()>;
}
