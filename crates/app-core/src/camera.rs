//! Camera rig: a parent transform carrying the damped parallax offset and a
//! child perspective camera whose height follows the scroll position.
//!
//! The two motions compose additively. Vertical position is derived from the
//! scroll offset every tick (no lag, no integration); the parallax offset is a
//! first-order low-pass filter of the cursor.

use crate::constants::{
    CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_Z, PARALLAX_AMPLITUDE,
    PARALLAX_SMOOTHING_RATE, SECTION_SPACING,
};
use crate::input::CursorState;
use crate::viewport::Viewport;
use glam::{Mat4, Vec2, Vec3};

/// Right-handed perspective camera description.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub forward: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.eye, self.forward, self.up)
    }
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RigParams {
    pub section_spacing: f32,
    pub parallax_amplitude: f32,
    pub smoothing_rate: f32,
    pub camera_z: f32,
}

impl Default for RigParams {
    fn default() -> Self {
        Self {
            section_spacing: SECTION_SPACING,
            parallax_amplitude: PARALLAX_AMPLITUDE,
            smoothing_rate: PARALLAX_SMOOTHING_RATE,
            camera_z: CAMERA_Z,
        }
    }
}

/// Result of one rig update: parent offset plus child camera.
#[derive(Clone, Debug)]
pub struct CameraTransform {
    pub rig_offset: Vec2,
    pub vertical_position: f32,
    pub camera: Camera,
}

#[derive(Clone, Debug, Default)]
pub struct CameraRig {
    pub params: RigParams,
    damped_offset: Vec2,
    vertical_position: f32,
}

impl CameraRig {
    pub fn new(params: RigParams) -> Self {
        Self {
            params,
            damped_offset: Vec2::ZERO,
            vertical_position: 0.0,
        }
    }

    #[inline]
    pub fn damped_offset(&self) -> Vec2 {
        self.damped_offset
    }

    #[inline]
    pub fn vertical_position(&self) -> f32 {
        self.vertical_position
    }

    pub fn parallax_target(&self, cursor: CursorState) -> Vec2 {
        Vec2::new(
            cursor.x * self.params.parallax_amplitude,
            -cursor.y * self.params.parallax_amplitude,
        )
    }

    /// Advance the rig by `dt_sec` of wall-clock time.
    pub fn tick(
        &mut self,
        dt_sec: f32,
        scroll_y: f32,
        cursor: CursorState,
        viewport: &Viewport,
    ) -> CameraTransform {
        self.vertical_position = -(scroll_y / viewport.height) * self.params.section_spacing;

        let target = self.parallax_target(cursor);
        let blend = (self.params.smoothing_rate * dt_sec.max(0.0)).min(1.0);
        self.damped_offset += (target - self.damped_offset) * blend;

        self.transform(viewport)
    }

    /// Current transform without advancing the rig.
    pub fn transform(&self, viewport: &Viewport) -> CameraTransform {
        CameraTransform {
            rig_offset: self.damped_offset,
            vertical_position: self.vertical_position,
            camera: self.camera(viewport),
        }
    }

    /// World-space camera composed from the rig offset and local height.
    pub fn camera(&self, viewport: &Viewport) -> Camera {
        let local = Vec3::new(0.0, self.vertical_position, self.params.camera_z);
        let rig = Vec3::new(self.damped_offset.x, self.damped_offset.y, 0.0);
        Camera {
            eye: rig + local,
            forward: Vec3::NEG_Z,
            up: Vec3::Y,
            aspect: viewport.aspect(),
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vp() -> Viewport {
        Viewport::new(1280.0, 800.0, 1.0).unwrap()
    }

    #[test]
    fn vertical_position_tracks_scroll_without_lag() {
        let mut rig = CameraRig::default();
        let t = rig.tick(0.016, 1200.0, CursorState::default(), &vp());
        assert!((t.vertical_position + 6.0).abs() < 1e-5);
        let t = rig.tick(0.016, 0.0, CursorState::default(), &vp());
        assert_eq!(t.vertical_position, 0.0);
    }

    #[test]
    fn zero_dt_leaves_offset_unchanged() {
        let mut rig = CameraRig::new(RigParams::default());
        let cursor = CursorState { x: 0.5, y: 0.5 };
        let t = rig.tick(0.0, 0.0, cursor, &vp());
        assert_eq!(t.rig_offset, Vec2::ZERO);
    }

    #[test]
    fn long_stall_lands_on_target() {
        let mut rig = CameraRig::new(RigParams::default());
        let cursor = CursorState { x: 0.4, y: -0.2 };
        let t = rig.tick(3.0, 0.0, cursor, &vp());
        assert!((t.rig_offset - Vec2::new(0.2, 0.1)).length() < 1e-6);
    }

    #[test]
    fn eye_composes_rig_and_local_height() {
        let mut rig = CameraRig::new(RigParams::default());
        let cursor = CursorState { x: 0.5, y: -0.5 };
        let t = rig.tick(10.0, 800.0, cursor, &vp());
        let eye = t.camera.eye;
        assert!((eye.x - 0.25).abs() < 1e-6);
        assert!((eye.y - (0.25 - 4.0)).abs() < 1e-5);
        assert_eq!(eye.z, CAMERA_Z);
    }
}
