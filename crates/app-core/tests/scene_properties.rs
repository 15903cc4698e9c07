// Integration tests for the per-frame behaviour of the scene core:
// section tracking, camera damping, ambient spin, and pass ordering.

use glam::Vec3;
use scrollscape_core::camera::{CameraRig, RigParams};
use scrollscape_core::rotation::AmbientSpin;
use scrollscape_core::sequencer::{render_frame, FrameRenderer, SceneFrame};
use scrollscape_core::{
    CursorState, InputSampler, InputSnapshot, Scene, SceneConfig, SectionTracker, TransitionEvent,
    Viewport,
};

fn viewport() -> Viewport {
    Viewport::new(1280.0, 800.0, 1.0).unwrap()
}

#[derive(Debug, PartialEq, Eq)]
enum Call {
    SetAutoClear(bool),
    Clear,
    Background,
    ClearDepth,
    Main,
}

#[derive(Default)]
struct Recorder {
    calls: Vec<Call>,
}

impl FrameRenderer for Recorder {
    fn set_auto_clear(&mut self, enabled: bool) {
        self.calls.push(Call::SetAutoClear(enabled));
    }
    fn clear(&mut self) {
        self.calls.push(Call::Clear);
    }
    fn render_background(&mut self) {
        self.calls.push(Call::Background);
    }
    fn clear_depth(&mut self) {
        self.calls.push(Call::ClearDepth);
    }
    fn render_main(&mut self, _frame: &SceneFrame) {
        self.calls.push(Call::Main);
    }
}

#[test]
fn repeated_offset_emits_at_most_one_transition() {
    let mut tracker = SectionTracker::new(7);
    assert!(tracker.on_scroll(1600.0, 800.0).is_some());
    assert_eq!(tracker.on_scroll(1600.0, 800.0), None);

    let mut tracker = SectionTracker::new(7);
    assert_eq!(tracker.on_scroll(0.0, 800.0), None);
    assert_eq!(tracker.on_scroll(0.0, 800.0), None);
}

#[test]
fn section_index_rounds_to_nearest() {
    let tracker = SectionTracker::new(7);
    assert_eq!(tracker.section_for(1200.0, 800.0), 2);
    assert_eq!(tracker.section_for(399.0, 800.0), 0);
    assert_eq!(tracker.section_for(400.0, 800.0), 1);
}

#[test]
fn section_index_is_clamped() {
    let mut tracker = SectionTracker::new(7);
    assert_eq!(tracker.section_for(-2000.0, 800.0), 0);
    assert_eq!(tracker.section_for(1.0e7, 800.0), 6);
    let ev = tracker.on_scroll(1.0e7, 800.0);
    assert_eq!(ev, Some(TransitionEvent { from: 0, to: 6 }));
}

#[test]
fn scrolling_through_sections_emits_each_transition_in_order() {
    for step in [799.0_f32, 400.0, 250.0, 123.4, 16.0] {
        let mut tracker = SectionTracker::new(7);
        let mut seen = Vec::new();
        let mut y = 0.0_f32;
        while y < 3200.0 {
            y = (y + step).min(3200.0);
            if let Some(ev) = tracker.on_scroll(y, 800.0) {
                seen.push(ev.to);
            }
        }
        assert_eq!(seen, vec![1, 2, 3, 4], "step {}", step);
    }
}

#[test]
fn parallax_converges_within_one_percent() {
    // unit amplitude so the cursor maps straight onto the target
    let mut rig = CameraRig::new(RigParams {
        parallax_amplitude: 1.0,
        ..RigParams::default()
    });
    let cursor = CursorState { x: 0.3, y: 0.2 };
    let target = rig.parallax_target(cursor);
    assert!((target.x - 0.3).abs() < 1e-6 && (target.y + 0.2).abs() < 1e-6);

    for _ in 0..60 {
        rig.tick(1.0 / 60.0, 0.0, cursor, &viewport());
    }
    let offset = rig.damped_offset();
    assert!((offset.x - 0.3).abs() <= 0.003, "x {}", offset.x);
    assert!((offset.y + 0.2).abs() <= 0.002, "y {}", offset.y);
}

#[test]
fn vertical_position_follows_scroll_without_lag() {
    let mut rig = CameraRig::default();
    let t = rig.tick(0.001, 1200.0, CursorState::default(), &viewport());
    assert!((t.vertical_position + 6.0).abs() < 1e-5);
    let t = rig.tick(0.001, 0.0, CursorState::default(), &viewport());
    assert_eq!(t.vertical_position, 0.0);
}

#[test]
fn ambient_spin_accumulates_per_tick() {
    let spin = AmbientSpin::default();
    let mut rotations = [Vec3::ZERO; 3];
    let mut particles = 0.0_f32;
    for _ in 0..2 {
        spin.apply(0.016, rotations.iter_mut(), &mut particles);
    }
    for r in &rotations {
        assert!((r.x - 2.0 * 0.016 * 0.1).abs() < 1e-7);
        assert!((r.y - 2.0 * 0.016 * 0.12).abs() < 1e-7);
    }
    assert!((particles - 2.0 * 0.016 * 0.02).abs() < 1e-8);
}

#[test]
fn each_tick_renders_in_fixed_order() {
    let mut scene = Scene::new(&SceneConfig::default(), viewport());
    let mut recorder = Recorder::default();
    for i in 0..3 {
        let input = InputSnapshot {
            scroll_y: i as f32 * 500.0,
            cursor: CursorState::default(),
        };
        let out = scene.tick(0.016, &input);
        render_frame(&mut recorder, &scene.frame(&out.camera));
    }
    let expected_one = [
        Call::SetAutoClear(false),
        Call::Clear,
        Call::Background,
        Call::ClearDepth,
        Call::Main,
    ];
    assert_eq!(recorder.calls.len(), 15);
    for chunk in recorder.calls.chunks(5) {
        assert_eq!(chunk, &expected_one);
    }
}

#[test]
fn section_spin_completes_on_top_of_ambient_spin() {
    let mut scene = Scene::new(&SceneConfig::default(), viewport());
    let mut input = InputSampler::new(0.0);
    input.record_scroll(800.0);

    let dt = 0.05;
    let steps = 40; // 2.0 s, past the 1.5 s spin
    let mut transitions = 0;
    for _ in 0..steps {
        if scene.tick(dt, &input.snapshot()).transition.is_some() {
            transitions += 1;
        }
    }
    assert_eq!(transitions, 1);
    assert_eq!(scene.current_section(), 1);
    assert!(!scene.tweens().is_animating(1));

    let elapsed = dt * steps as f32;
    let spun = scene.sections[1].rotation;
    let idle = scene.sections[0].rotation;
    assert!((spun.x - (6.0 + 0.1 * elapsed)).abs() < 1e-3, "x {}", spun.x);
    assert!((spun.y - (3.0 + 0.12 * elapsed)).abs() < 1e-3, "y {}", spun.y);
    assert!((spun.z - 1.5).abs() < 1e-3, "z {}", spun.z);
    assert!((idle.x - 0.1 * elapsed).abs() < 1e-4);
}

#[test]
fn loading_mid_page_spins_nothing_until_scrolled() {
    let mut scene = Scene::new(&SceneConfig::default(), viewport());
    scene.seed_scroll(1600.0);
    assert_eq!(scene.current_section(), 2);

    let mut input = InputSampler::new(1600.0);
    let out = scene.tick(0.016, &input.snapshot());
    assert_eq!(out.transition, None);
    assert!((0..7).all(|i| !scene.tweens().is_animating(i)));

    input.record_scroll(2400.0);
    let out = scene.tick(0.016, &input.snapshot());
    assert_eq!(out.transition, Some(TransitionEvent { from: 2, to: 3 }));
    assert!(scene.tweens().is_animating(3));
}

#[test]
fn pending_resize_updates_projection_aspect() {
    let mut scene = Scene::new(&SceneConfig::default(), viewport());
    let tall = Viewport::new(600.0, 1200.0, 2.0).unwrap();
    scene.resize(tall);
    let out = scene.tick(0.016, &InputSnapshot::default());
    assert!((out.camera.camera.aspect - 0.5).abs() < 1e-6);
    assert_eq!(scene.take_pending_resize(), Some(tall));
}
