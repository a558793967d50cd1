//! tricolor engine crate.
//!
//! Everything needed to put one colored triangle on screen: the GPU device
//! layer, the mesh, the render description, the one-shot frame driver, and
//! the window runtime that hosts it.

pub mod device;
pub mod driver;
pub mod logging;
pub mod mesh;
pub mod render;
pub mod window;
