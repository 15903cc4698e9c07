//! Scene state and the per-frame orchestration.
//!
//! `Scene::tick` runs, in order: section tracking (which may queue a spin),
//! tween progress, the camera rig, and the ambient spin. The caller then hands
//! [`Scene::frame`] to [`crate::sequencer::render_frame`].

use crate::camera::{CameraRig, CameraTransform, RigParams};
use crate::color::Rgb;
use crate::config::SceneConfig;
use crate::constants::{
    PARTICLE_COUNT, PARTICLE_SPREAD, SECTION_OFFSET_X, SECTION_SPACING,
};
use crate::input::InputSnapshot;
use crate::mesh::{Shape, SECTION_SHAPES};
use crate::rotation::AmbientSpin;
use crate::section::{SectionTracker, TransitionEvent};
use crate::sequencer::SceneFrame;
use crate::tween::{TweenEngine, TweenRequest, TweenTarget};
use crate::viewport::Viewport;
use glam::{EulerRot, Mat4, Vec3};
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct Section {
    pub index: usize,
    pub shape: Shape,
    pub base_position: Vec3,
    /// Euler XYZ, radians.
    pub rotation: Vec3,
}

impl Section {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.base_position)
            * Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }
}

impl TweenTarget for Section {
    fn apply_rotation(&mut self, delta: Vec3) {
        self.rotation += delta;
    }
}

/// One section per shape, stacked downward and alternating sides.
pub fn section_layout(shapes: &[Shape]) -> Vec<Section> {
    shapes
        .iter()
        .enumerate()
        .map(|(index, &shape)| {
            let side = if index % 2 == 0 { 1.0 } else { -1.0 };
            Section {
                index,
                shape,
                base_position: Vec3::new(
                    side * SECTION_OFFSET_X,
                    -SECTION_SPACING * index as f32,
                    0.0,
                ),
                rotation: Vec3::ZERO,
            }
        })
        .collect()
}

#[derive(Clone, Debug)]
pub struct ParticleField {
    pub positions: Vec<Vec3>,
    pub rotation_y: f32,
}

impl ParticleField {
    /// Scatter points over the full scrollable height of the scene.
    pub fn scatter(count: usize, section_count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let depth = SECTION_SPACING * section_count as f32;
        let positions = (0..count)
            .map(|_| {
                Vec3::new(
                    (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD,
                    SECTION_SPACING * 0.5 - rng.gen::<f32>() * depth,
                    (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD,
                )
            })
            .collect();
        Self {
            positions,
            rotation_y: 0.0,
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.rotation_y)
    }
}

#[derive(Clone, Debug)]
pub struct TickOutcome {
    pub transition: Option<TransitionEvent>,
    pub camera: CameraTransform,
}

pub struct Scene {
    pub sections: Vec<Section>,
    pub particles: ParticleField,
    material_color: Rgb,
    tracker: SectionTracker,
    rig: CameraRig,
    tweens: TweenEngine,
    spin: AmbientSpin,
    viewport: Viewport,
    pending_resize: Option<Viewport>,
}

impl Scene {
    pub fn new(config: &SceneConfig, viewport: Viewport) -> Self {
        let sections = section_layout(&SECTION_SHAPES);
        let particles = ParticleField::scatter(PARTICLE_COUNT, sections.len(), config.particle_seed);
        log::info!(
            "[scene] sections={} particles={} overlap={:?}",
            sections.len(),
            particles.positions.len(),
            config.overlap_policy
        );
        Self {
            tracker: SectionTracker::new(sections.len()),
            sections,
            particles,
            material_color: config.material_color,
            rig: CameraRig::new(RigParams::default()),
            tweens: TweenEngine::new(config.overlap_policy),
            spin: AmbientSpin::default(),
            viewport,
            pending_resize: None,
        }
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn current_section(&self) -> usize {
        self.tracker.current()
    }

    #[inline]
    pub fn tweens(&self) -> &TweenEngine {
        &self.tweens
    }

    #[inline]
    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    /// Record a new viewport; the renderer picks it up before the next frame.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            log::info!(
                "[resize] {}x{} @{}",
                viewport.width,
                viewport.height,
                viewport.pixel_ratio()
            );
        }
        self.viewport = viewport;
        self.pending_resize = Some(viewport);
    }

    pub fn take_pending_resize(&mut self) -> Option<Viewport> {
        self.pending_resize.take()
    }

    /// Start from the offset the page was loaded at. Until the first
    /// scroll sample moves past it, no section spins.
    pub fn seed_scroll(&mut self, scroll_y: f32) {
        self.tracker.seed(scroll_y, self.viewport.height);
    }

    pub fn tick(&mut self, dt_sec: f32, input: &InputSnapshot) -> TickOutcome {
        let transition = self.tracker.on_scroll(input.scroll_y, self.viewport.height);
        if let Some(ev) = transition {
            log::info!("[section] {} -> {}", ev.from, ev.to);
            if ev.to < self.sections.len() {
                self.tweens.request(TweenRequest::section_spin(ev.to));
            }
        }
        self.tweens.advance(dt_sec, &mut self.sections);

        let camera = self
            .rig
            .tick(dt_sec, input.scroll_y, input.cursor, &self.viewport);

        self.spin.apply(
            dt_sec,
            self.sections.iter_mut().map(|s| &mut s.rotation),
            &mut self.particles.rotation_y,
        );

        TickOutcome { transition, camera }
    }

    pub fn frame(&self, camera: &CameraTransform) -> SceneFrame {
        SceneFrame {
            view_projection: camera.camera.view_projection(),
            view: camera.camera.view_matrix(),
            object_models: self.sections.iter().map(Section::model_matrix).collect(),
            particle_model: self.particles.model_matrix(),
            material_color: self.material_color.to_linear().to_array4(1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::CursorState;

    fn scene() -> Scene {
        Scene::new(
            &SceneConfig::default(),
            Viewport::new(1280.0, 800.0, 1.0).unwrap(),
        )
    }

    #[test]
    fn layout_alternates_and_descends() {
        let s = section_layout(&SECTION_SHAPES);
        assert_eq!(s.len(), 7);
        assert_eq!(s[0].base_position, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(s[1].base_position, Vec3::new(-2.0, -4.0, 0.0));
        assert_eq!(s[6].base_position, Vec3::new(2.0, -24.0, 0.0));
        assert_eq!(s[2].shape, Shape::TorusKnot);
    }

    #[test]
    fn particles_stay_in_bounds_and_are_seeded() {
        let a = ParticleField::scatter(200, 7, 1);
        let b = ParticleField::scatter(200, 7, 1);
        assert_eq!(a.positions, b.positions);
        for p in &a.positions {
            assert!(p.x.abs() <= 5.0 && p.z.abs() <= 5.0);
            assert!(p.y <= 2.0 && p.y >= 2.0 - 28.0);
        }
    }

    #[test]
    fn crossing_a_boundary_starts_a_spin() {
        let mut s = scene();
        let input = InputSnapshot {
            scroll_y: 800.0,
            cursor: CursorState::default(),
        };
        let out = s.tick(0.016, &input);
        assert_eq!(out.transition, Some(TransitionEvent { from: 0, to: 1 }));
        assert!(s.tweens().is_animating(1));
        let out = s.tick(0.016, &input);
        assert_eq!(out.transition, None);
    }

    #[test]
    fn resize_is_pending_until_taken() {
        let mut s = scene();
        let vp = Viewport::new(640.0, 480.0, 2.0).unwrap();
        s.resize(vp);
        assert_eq!(s.viewport(), vp);
        assert_eq!(s.take_pending_resize(), Some(vp));
        assert_eq!(s.take_pending_resize(), None);
    }

    #[test]
    fn frame_has_one_model_per_section() {
        let config = SceneConfig {
            material_color: Rgb::new(1.0, 0.0, 0.0),
            ..SceneConfig::default()
        };
        let mut s = Scene::new(&config, Viewport::new(1280.0, 800.0, 1.0).unwrap());
        let out = s.tick(0.016, &InputSnapshot::default());
        let frame = s.frame(&out.camera);
        assert_eq!(frame.object_models.len(), 7);
        assert_eq!(frame.material_color, [1.0, 0.0, 0.0, 1.0]);
    }
}
