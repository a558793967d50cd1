//! Render description.
//!
//! Pure data consumed by the device layer: what pipeline to build and what to
//! record into the frame's command buffer. Nothing here touches the GPU, so
//! the frame driver can be exercised without an adapter.

mod pipeline;
mod plan;

pub use pipeline::{PipelineSpec, FRAGMENT_ENTRY, TRIANGLE_SHADER, VERTEX_ENTRY};
pub use plan::{FramePlan, PassCommand, PassPlan, CLEAR_COLOR};
