use std::sync::Arc;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::device::{Gpu, GpuInit, WgpuApi};
use crate::driver::{self, Session};

/// Window configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Window title; also identifies the drawing target in logs.
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "gfx".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, renders the triangle once, and returns when the
    /// window is closed.
    ///
    /// A setup failure closes the window and is returned here.
    pub fn run(config: RuntimeConfig, gpu_init: GpuInit) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut state = AppState::new(config, gpu_init);
        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

struct AppState {
    config: RuntimeConfig,
    gpu_init: GpuInit,

    window: Option<Arc<Window>>,
    rendered: bool,
    session: Option<Session<Gpu>>,
    failure: Option<anyhow::Error>,
}

impl AppState {
    fn new(config: RuntimeConfig, gpu_init: GpuInit) -> Self {
        Self {
            config,
            gpu_init,
            window: None,
            rendered: false,
            session: None,
            failure: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.failure = Some(err);
        event_loop.exit();
    }

    fn render_once(&mut self, event_loop: &ActiveEventLoop) {
        if self.rendered {
            return;
        }
        self.rendered = true;

        let Some(window) = self.window.clone() else { return };
        let mut api = WgpuApi::new(window);

        match driver::run_once(&mut api, &self.gpu_init) {
            Ok(mut session) => {
                if let Some(format) = session.device().and_then(|gpu| gpu.surface_format()) {
                    log::debug!("'{}' presented as {format:?}", self.config.title);
                }
                self.session = Some(session);
            }
            Err(err) => self.fail(event_loop, err),
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        match event_loop.create_window(attrs) {
            Ok(window) => {
                window.request_redraw();
                self.window = Some(Arc::new(window));
            }
            Err(e) => self.fail(event_loop, anyhow::Error::new(e).context("failed to create window")),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                if let Some(lost) = self.session.as_ref().and_then(Session::lost) {
                    log::debug!("closing after device loss: {}", lost.message);
                }
                event_loop.exit();
            }

            // One frame per run; later redraws and resizes are ignored.
            WindowEvent::RedrawRequested => self.render_once(event_loop),

            _ => {}
        }
    }
}
