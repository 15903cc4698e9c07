//! Additive rotation tweens keyed by target index.
//!
//! Tweens never write absolute values: each step applies the increment of its
//! eased progress, so concurrent tweens and the ambient spin accumulate on the
//! same rotation. The engine is advanced by the frame tick; nothing here runs
//! on its own clock.

use crate::constants::{SECTION_SPIN_DELTA, SECTION_SPIN_DURATION_SEC};
use crate::easing::Easing;
use fnv::FnvHashMap;
use glam::Vec3;
use smallvec::SmallVec;

/// Anything whose rotation a tween can nudge.
pub trait TweenTarget {
    fn apply_rotation(&mut self, delta: Vec3);
}

impl TweenTarget for Vec3 {
    fn apply_rotation(&mut self, delta: Vec3) {
        *self += delta;
    }
}

/// What happens when a request arrives for a target that is still animating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlapPolicy {
    /// Drop in-flight tweens (keeping what they already applied) and start over.
    #[default]
    Restart,
    /// Run alongside in-flight tweens.
    Stack,
    /// Start once earlier tweens on the target have finished.
    Queue,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenRequest {
    pub target: usize,
    pub delta: Vec3,
    pub duration_sec: f32,
    pub easing: Easing,
}

impl TweenRequest {
    /// The spin played when a section becomes current.
    pub fn section_spin(target: usize) -> Self {
        Self {
            target,
            delta: Vec3::from(SECTION_SPIN_DELTA),
            duration_sec: SECTION_SPIN_DURATION_SEC,
            easing: Easing::CubicInOut,
        }
    }
}

#[derive(Clone, Debug)]
struct RotationTween {
    delta: Vec3,
    duration: f32,
    easing: Easing,
    elapsed: f32,
    applied: f32,
}

impl RotationTween {
    fn new(req: &TweenRequest) -> Self {
        Self {
            delta: req.delta,
            duration: req.duration_sec.max(0.0),
            easing: req.easing,
            elapsed: 0.0,
            applied: 0.0,
        }
    }

    /// Advance by `dt`; returns the rotation increment and unused time.
    fn step(&mut self, dt: f32) -> (Vec3, f32) {
        let next = self.elapsed + dt;
        let leftover = (next - self.duration).max(0.0);
        self.elapsed = next.min(self.duration);
        let progress = if self.duration > 0.0 {
            self.easing.evaluate(self.elapsed / self.duration)
        } else {
            1.0
        };
        let increment = self.delta * (progress - self.applied);
        self.applied = progress;
        (increment, leftover)
    }

    #[inline]
    fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }
}

type Track = SmallVec<[RotationTween; 2]>;

#[derive(Debug, Default)]
pub struct TweenEngine {
    policy: OverlapPolicy,
    tracks: FnvHashMap<usize, Track>,
}

impl TweenEngine {
    pub fn new(policy: OverlapPolicy) -> Self {
        Self {
            policy,
            tracks: FnvHashMap::default(),
        }
    }

    /// Queue a tween. Returns immediately; progress happens in [`advance`].
    ///
    /// [`advance`]: TweenEngine::advance
    pub fn request(&mut self, req: TweenRequest) {
        let track = self.tracks.entry(req.target).or_default();
        if self.policy == OverlapPolicy::Restart && !track.is_empty() {
            log::debug!(
                "[tween] restart target {} ({} in flight)",
                req.target,
                track.len()
            );
            track.clear();
        }
        track.push(RotationTween::new(&req));
    }

    /// Step every active tween by `dt_sec` and apply increments to `targets`.
    /// Returns the number of tweens that finished during this step.
    pub fn advance<T: TweenTarget>(&mut self, dt_sec: f32, targets: &mut [T]) -> usize {
        let dt = dt_sec.max(0.0);
        let policy = self.policy;
        let mut finished = 0;
        self.tracks.retain(|&index, track| {
            let Some(target) = targets.get_mut(index) else {
                log::warn!("[tween] dropping tweens for missing target {}", index);
                return false;
            };
            match policy {
                OverlapPolicy::Restart | OverlapPolicy::Stack => {
                    for tween in track.iter_mut() {
                        let (inc, _) = tween.step(dt);
                        target.apply_rotation(inc);
                    }
                    let before = track.len();
                    track.retain(|t| !t.is_done());
                    finished += before - track.len();
                }
                OverlapPolicy::Queue => {
                    let mut remaining = dt;
                    while let Some(front) = track.first_mut() {
                        let (inc, leftover) = front.step(remaining);
                        target.apply_rotation(inc);
                        if !front.is_done() {
                            break;
                        }
                        track.remove(0);
                        finished += 1;
                        remaining = leftover;
                        if remaining <= 0.0 {
                            break;
                        }
                    }
                }
            }
            !track.is_empty()
        });
        finished
    }

    pub fn active_count(&self) -> usize {
        self.tracks.values().map(|t| t.len()).sum()
    }

    pub fn is_animating(&self, target: usize) -> bool {
        self.tracks.get(&target).is_some_and(|t| !t.is_empty())
    }
}
