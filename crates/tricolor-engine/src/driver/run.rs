use anyhow::{Context, Result};

use crate::device::{GpuInit, LossSignal, SetupError};
use crate::mesh::TriangleMesh;
use crate::render::{FramePlan, PipelineSpec};

use super::api::{GraphicsApi, GraphicsDevice};
use super::session::Session;

/// Sets up the triangle and renders it once.
///
/// Returns the session owning the device; keep it alive for as long as the
/// frame should stay on screen. A missing graphics API returns
/// `SetupError::Unavailable` before any other call is made.
pub fn run_once<A>(api: &mut A, init: &GpuInit) -> Result<Session<A::Device>>
where
    A: GraphicsApi,
{
    if !api.is_available() {
        return Err(SetupError::Unavailable.into());
    }

    let device = api
        .request_device(init)
        .context("failed to acquire a GPU device")?;

    let loss = LossSignal::new();
    device.set_lost_callback(loss.callback());
    let mut session = Session::new(device, loss);

    let format = session
        .require()?
        .configure_surface(init)
        .context("failed to configure surface")?;
    log::debug!("surface configured as {format:?}");

    let mesh = TriangleMesh::new();
    session
        .require()?
        .create_mesh(&mesh)
        .context("failed to create triangle mesh")?;

    session
        .require()?
        .create_bindings()
        .context("failed to create bind group")?;

    session
        .require()?
        .create_pipeline(&PipelineSpec::triangle(format))
        .context("failed to create render pipeline")?;

    let frame = FramePlan::triangle(mesh.vertex_count());
    session
        .require()?
        .submit(&frame)
        .context("failed to submit frame")?;

    log::info!("triangle frame submitted");
    Ok(session)
}
