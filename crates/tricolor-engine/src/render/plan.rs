use std::ops::Range;

/// Background the frame is cleared to before drawing.
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.5,
    g: 0.0,
    b: 0.25,
    a: 1.0,
};

/// A single command recorded inside a render pass.
///
/// Resources are implicit: the device layer owns exactly one pipeline, one
/// vertex buffer and one bind group, and binds those.
#[derive(Debug, Clone, PartialEq)]
pub enum PassCommand {
    SetPipeline,
    SetVertexBuffer { slot: u32 },
    SetBindGroup { index: u32 },
    Draw {
        vertices: Range<u32>,
        instances: Range<u32>,
    },
}

/// One render pass over the surface texture.
///
/// The color attachment is cleared to `clear` on load and stored on end.
#[derive(Debug, Clone, PartialEq)]
pub struct PassPlan {
    pub clear: wgpu::Color,
    pub commands: Vec<PassCommand>,
}

impl PassPlan {
    pub fn new(clear: wgpu::Color) -> Self {
        Self {
            clear,
            commands: Vec::new(),
        }
    }

    pub fn set_pipeline(mut self) -> Self {
        self.commands.push(PassCommand::SetPipeline);
        self
    }

    pub fn set_vertex_buffer(mut self, slot: u32) -> Self {
        self.commands.push(PassCommand::SetVertexBuffer { slot });
        self
    }

    pub fn set_bind_group(mut self, index: u32) -> Self {
        self.commands.push(PassCommand::SetBindGroup { index });
        self
    }

    pub fn draw(mut self, vertices: Range<u32>, instances: Range<u32>) -> Self {
        self.commands.push(PassCommand::Draw { vertices, instances });
        self
    }

    /// Draw commands in recording order.
    pub fn draws(&self) -> impl Iterator<Item = (&Range<u32>, &Range<u32>)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            PassCommand::Draw { vertices, instances } => Some((vertices, instances)),
            _ => None,
        })
    }
}

/// Everything recorded into one command buffer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FramePlan {
    pub passes: Vec<PassPlan>,
}

impl FramePlan {
    /// Clear to `CLEAR_COLOR`, then draw `vertex_count` vertices once.
    pub fn triangle(vertex_count: u32) -> Self {
        let pass = PassPlan::new(CLEAR_COLOR)
            .set_pipeline()
            .set_vertex_buffer(0)
            .set_bind_group(0)
            .draw(0..vertex_count, 0..1);

        Self { passes: vec![pass] }
    }

    pub fn draw_count(&self) -> usize {
        self.passes.iter().map(|p| p.draws().count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_frame_is_one_pass_with_one_draw() {
        let plan = FramePlan::triangle(3);
        assert_eq!(plan.passes.len(), 1);
        assert_eq!(plan.draw_count(), 1);

        let pass = &plan.passes[0];
        assert_eq!(pass.clear, CLEAR_COLOR);
        let draws: Vec<_> = pass.draws().collect();
        assert_eq!(draws, vec![(&(0..3), &(0..1))]);
    }

    #[test]
    fn triangle_pass_binds_before_drawing() {
        let plan = FramePlan::triangle(3);
        assert_eq!(
            plan.passes[0].commands,
            vec![
                PassCommand::SetPipeline,
                PassCommand::SetVertexBuffer { slot: 0 },
                PassCommand::SetBindGroup { index: 0 },
                PassCommand::Draw {
                    vertices: 0..3,
                    instances: 0..1,
                },
            ]
        );
    }

    #[test]
    fn empty_plan_draws_nothing() {
        assert_eq!(FramePlan::default().draw_count(), 0);
        assert_eq!(PassPlan::new(CLEAR_COLOR).draws().count(), 0);
    }
}
