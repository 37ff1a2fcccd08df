use bytemuck::{Pod, Zeroable};

use crate::state::ParamState;

/// Packed per-frame parameter block in the layout the feedback shaders read.
///
/// This is the render-facing edge of the engine: hosts build one of these
/// from the state returned by a tick and upload it verbatim as a uniform
/// buffer. Padded to a 16-byte multiple so it can be bound directly.
#[repr(C, align(16))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    pub output_size: [f32; 2],
    pub position: [f32; 2],
    pub zoom: f32,
    pub rotation: f32,
    pub time: f32,
    pub aspect_ratio: f32,
    pub color_offset: f32,
    pub nonlinearity: f32,
    padding: [f32; 2],
}

unsafe impl Zeroable for FrameUniforms {}
unsafe impl Pod for FrameUniforms {}

impl FrameUniforms {
    /// Packs a parameter state for the given output size and shader clock.
    pub fn new(state: &ParamState, output_size: (f32, f32), time: f32) -> Self {
        let (width, height) = output_size;
        let aspect_ratio = if height > 0.0 { width / height } else { 1.0 };
        Self {
            output_size: [width, height],
            position: [state.position.x, state.position.y],
            zoom: state.zoom,
            rotation: state.rotation,
            time,
            aspect_ratio,
            color_offset: state.color_offset,
            nonlinearity: state.linearity,
            padding: [0.0; 2],
        }
    }

    /// The raw bytes to upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Vec2;

    #[test]
    fn packs_state_fields() {
        let mut state = ParamState::default();
        state.zoom = 1.5;
        state.rotation = 0.75;
        state.position = Vec2::new(0.25, -0.5);
        state.color_offset = 2.0;
        state.linearity = 0.1;
        // Momenta are integrator-internal and must not leak into the block.
        state.zoom_vel = 99.0;

        let uniforms = FrameUniforms::new(&state, (1280.0, 720.0), 4.2);
        assert_eq!(uniforms.output_size, [1280.0, 720.0]);
        assert_eq!(uniforms.position, [0.25, -0.5]);
        assert_eq!(uniforms.zoom, 1.5);
        assert_eq!(uniforms.rotation, 0.75);
        assert_eq!(uniforms.time, 4.2);
        assert!((uniforms.aspect_ratio - 1280.0 / 720.0).abs() < 1e-6);
        assert_eq!(uniforms.color_offset, 2.0);
        assert_eq!(uniforms.nonlinearity, 0.1);
    }

    #[test]
    fn degenerate_viewport_falls_back_to_square_aspect() {
        let uniforms = FrameUniforms::new(&ParamState::default(), (640.0, 0.0), 0.0);
        assert_eq!(uniforms.aspect_ratio, 1.0);
    }

    #[test]
    fn byte_size_is_uniform_buffer_friendly() {
        let uniforms = FrameUniforms::new(&ParamState::default(), (1.0, 1.0), 0.0);
        assert_eq!(uniforms.as_bytes().len(), std::mem::size_of::<FrameUniforms>());
        assert_eq!(std::mem::size_of::<FrameUniforms>() % 16, 0);
    }
}
