use std::sync::Arc;

use anyhow::{Context, Result};
use winit::window::Window;

use crate::driver::{GraphicsApi, GraphicsDevice};
use crate::mesh::{GpuMesh, TriangleMesh};
use crate::render::{FramePlan, PassCommand, PipelineSpec};

use super::surface;
use super::{GpuInit, LostCallback, LostInfo, LostReason};

/// wgpu entry point bound to one window.
///
/// Creating the surface up front doubles as the capability probe: if no
/// backend can present to the window, there is nothing to render with.
pub struct WgpuApi {
    instance: wgpu::Instance,
    window: Arc<Window>,
    surface: Option<wgpu::Surface<'static>>,
}

impl WgpuApi {
    pub fn new(window: Arc<Window>) -> Self {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = match instance.create_surface(window.clone()) {
            Ok(surface) => Some(surface),
            Err(e) => {
                log::warn!("no graphics backend for this window: {e}");
                None
            }
        };

        Self {
            instance,
            window,
            surface,
        }
    }
}

impl GraphicsApi for WgpuApi {
    type Device = Gpu;

    fn is_available(&self) -> bool {
        self.surface.is_some()
    }

    fn request_device(&mut self, init: &GpuInit) -> Result<Gpu> {
        let surface = self
            .surface
            .take()
            .context("surface already handed to a device")?;

        pollster::block_on(Gpu::new(
            &self.instance,
            self.window.clone(),
            surface,
            init,
        ))
    }
}

/// Owns the wgpu device, the surface, and the triangle's GPU resources.
pub struct Gpu {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    adapter: wgpu::Adapter,
    device: wgpu::Device,
    queue: wgpu::Queue,

    config: Option<wgpu::SurfaceConfiguration>,
    mesh: Option<GpuMesh>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    pipeline: Option<wgpu::RenderPipeline>,
}

impl Gpu {
    /// Requests an adapter compatible with `surface`, then a device on it.
    pub async fn new(
        instance: &wgpu::Instance,
        window: Arc<Window>,
        surface: wgpu::Surface<'static>,
        init: &GpuInit,
    ) -> Result<Self> {
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: init.power_preference,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        let info = adapter.get_info();
        log::info!("using adapter {} ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("tricolor device"),
                required_features: init.required_features,
                required_limits: init.required_limits.clone(),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        Ok(Self {
            window,
            surface,
            adapter,
            device,
            queue,
            config: None,
            mesh: None,
            bind_group_layout: None,
            bind_group: None,
            pipeline: None,
        })
    }

    /// Active surface format, once configured.
    pub fn surface_format(&self) -> Option<wgpu::TextureFormat> {
        self.config.as_ref().map(|c| c.format)
    }

    fn record(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        frame: &FramePlan,
    ) -> Result<()> {
        for pass in &frame.passes {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("tricolor pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(pass.clear),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            for cmd in &pass.commands {
                match cmd {
                    PassCommand::SetPipeline => {
                        let pipeline = self.pipeline.as_ref().context("no render pipeline")?;
                        rpass.set_pipeline(pipeline);
                    }
                    PassCommand::SetVertexBuffer { slot } => {
                        let mesh = self.mesh.as_ref().context("no vertex buffer")?;
                        rpass.set_vertex_buffer(*slot, mesh.buffer().slice(..));
                    }
                    PassCommand::SetBindGroup { index } => {
                        let bind_group = self.bind_group.as_ref().context("no bind group")?;
                        rpass.set_bind_group(*index, bind_group, &[]);
                    }
                    PassCommand::Draw {
                        vertices,
                        instances,
                    } => {
                        rpass.draw(vertices.clone(), instances.clone());
                    }
                }
            }
        }

        Ok(())
    }
}

impl GraphicsDevice for Gpu {
    fn set_lost_callback(&self, callback: LostCallback) {
        self.device.set_device_lost_callback(move |reason, message| {
            let reason = match reason {
                wgpu::DeviceLostReason::Destroyed => LostReason::Destroyed,
                _ => LostReason::Unknown,
            };
            callback(LostInfo { reason, message });
        });
    }

    fn configure_surface(&mut self, init: &GpuInit) -> Result<wgpu::TextureFormat> {
        let caps = self.surface.get_capabilities(&self.adapter);

        let format = surface::choose_surface_format(&caps.formats, init.surface_format)
            .with_context(|| {
                format!(
                    "surface does not support {:?} (supported: {:?})",
                    init.surface_format, caps.formats
                )
            })?;
        let alpha_mode = surface::choose_alpha_mode(&caps.alpha_modes, init.alpha_mode);
        if alpha_mode != init.alpha_mode {
            log::warn!("{:?} compositing unsupported, using {alpha_mode:?}", init.alpha_mode);
        }

        let size = self.window.inner_size();
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: init.present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: init.desired_maximum_frame_latency,
        };

        self.surface.configure(&self.device, &config);
        self.config = Some(config);
        Ok(format)
    }

    fn create_mesh(&mut self, mesh: &TriangleMesh) -> Result<()> {
        self.mesh = Some(GpuMesh::upload(&self.device, mesh));
        Ok(())
    }

    fn create_bindings(&mut self) -> Result<()> {
        let layout = self
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("tricolor bgl"),
                entries: &[],
            });

        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("tricolor bind group"),
            layout: &layout,
            entries: &[],
        });

        self.bind_group_layout = Some(layout);
        self.bind_group = Some(bind_group);
        Ok(())
    }

    fn create_pipeline(&mut self, spec: &PipelineSpec<'_>) -> Result<()> {
        let bind_group_layout = self
            .bind_group_layout
            .as_ref()
            .context("bind group layout must be created before the pipeline")?;

        let shader = self
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("tricolor shader"),
                source: wgpu::ShaderSource::Wgsl(spec.shader_source.into()),
            });

        let pipeline_layout = self
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("tricolor pipeline layout"),
                bind_group_layouts: &[bind_group_layout],
                immediate_size: 0,
            });

        let pipeline = self
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(spec.label),
                layout: Some(&pipeline_layout),

                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some(spec.vertex_entry),
                    compilation_options: Default::default(),
                    buffers: &[spec.vertex_layout.clone()],
                },

                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some(spec.fragment_entry),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: spec.color_format,
                        blend: None,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),

                primitive: wgpu::PrimitiveState {
                    topology: spec.topology,
                    ..Default::default()
                },

                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            });

        self.pipeline = Some(pipeline);
        Ok(())
    }

    fn submit(&mut self, frame: &FramePlan) -> Result<()> {
        let surface_texture = self
            .surface
            .get_current_texture()
            .context("failed to acquire surface texture")?;
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("tricolor frame encoder"),
            });

        self.record(&mut encoder, &view, frame)?;

        self.queue.submit(std::iter::once(encoder.finish()));
        self.window.pre_present_notify();
        surface_texture.present();
        Ok(())
    }
}
