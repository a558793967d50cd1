//! Window + runtime.
//!
//! Owns the `winit` EventLoop and the window, and runs the frame driver once.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
