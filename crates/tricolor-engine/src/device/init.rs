/// Initialization parameters for the GPU layer.
///
/// Defaults describe the one configuration the program renders with; the
/// struct exists so the values live in one place.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Adapter selection hint.
    pub power_preference: wgpu::PowerPreference,

    /// Pixel format the surface is configured with and the pipeline renders to.
    ///
    /// Must be supported by the surface; no fallback is attempted.
    pub surface_format: wgpu::TextureFormat,

    /// Compositing mode for the surface.
    ///
    /// If unsupported on the current surface, a supported mode is selected.
    pub alpha_mode: wgpu::CompositeAlphaMode,

    /// Present mode (swap behavior).
    pub present_mode: wgpu::PresentMode,

    /// Required wgpu features.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            power_preference: wgpu::PowerPreference::HighPerformance,
            surface_format: wgpu::TextureFormat::Bgra8Unorm,
            alpha_mode: wgpu::CompositeAlphaMode::Opaque,
            present_mode: wgpu::PresentMode::Fifo,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}
