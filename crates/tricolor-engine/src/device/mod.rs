//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Surface/Adapter/Device/Queue
//! - configuring the surface
//! - owning the triangle's GPU resources and recording the frame
//! - observing device loss

mod error;
mod gpu;
mod init;
mod lost;
mod surface;

pub use error::SetupError;
pub use gpu::{Gpu, WgpuApi};
pub use init::GpuInit;
pub use lost::{LossSignal, LostCallback, LostInfo, LostReason};
