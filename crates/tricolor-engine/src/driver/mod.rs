//! Frame driver.
//!
//! One-shot setup followed by a single render pass, written against the
//! `GraphicsApi` / `GraphicsDevice` traits. `device::WgpuApi` is the real
//! implementation.

mod api;
mod run;
mod session;

pub use api::{GraphicsApi, GraphicsDevice};
pub use run::run_once;
pub use session::Session;
