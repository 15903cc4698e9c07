//! Fixed two-pass frame composition.
//!
//! Every frame is: clear color+depth, draw the background without depth,
//! clear depth only, draw the perspective scene. [`FrameRenderer`] is the seam
//! between this ordering and whatever records the GPU work.

use glam::Mat4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Projection {
    /// Identity camera, geometry already in clip space.
    Orthographic,
    Perspective,
}

/// Immutable description of one of the two passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PassConfig {
    pub label: &'static str,
    pub projection: Projection,
    pub depth_test: bool,
    pub depth_write: bool,
}

pub const BACKGROUND_PASS: PassConfig = PassConfig {
    label: "background_pass",
    projection: Projection::Orthographic,
    depth_test: false,
    depth_write: false,
};

pub const MAIN_PASS: PassConfig = PassConfig {
    label: "main_pass",
    projection: Projection::Perspective,
    depth_test: true,
    depth_write: true,
};

/// Per-frame data for the main pass.
#[derive(Clone, Debug)]
pub struct SceneFrame {
    pub view_projection: Mat4,
    pub view: Mat4,
    pub object_models: Vec<Mat4>,
    pub particle_model: Mat4,
    pub material_color: [f32; 4],
}

pub trait FrameRenderer {
    fn set_auto_clear(&mut self, enabled: bool);
    fn clear(&mut self);
    fn render_background(&mut self);
    fn clear_depth(&mut self);
    fn render_main(&mut self, frame: &SceneFrame);
}

/// Issue one frame in the fixed order.
pub fn render_frame<R: FrameRenderer + ?Sized>(renderer: &mut R, frame: &SceneFrame) {
    renderer.set_auto_clear(false);
    renderer.clear();
    renderer.render_background();
    renderer.clear_depth();
    renderer.render_main(frame);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_ignores_depth_and_main_uses_it() {
        assert_eq!(BACKGROUND_PASS.projection, Projection::Orthographic);
        assert!(!BACKGROUND_PASS.depth_test && !BACKGROUND_PASS.depth_write);
        assert_eq!(MAIN_PASS.projection, Projection::Perspective);
        assert!(MAIN_PASS.depth_test && MAIN_PASS.depth_write);
    }
}
