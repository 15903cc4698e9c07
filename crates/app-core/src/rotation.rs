//! Ambient spin applied every tick regardless of scroll or tween state.

use crate::constants::{AMBIENT_SPIN_X, AMBIENT_SPIN_Y, PARTICLE_SPIN_Y};
use glam::Vec3;

#[derive(Clone, Copy, Debug)]
pub struct AmbientSpin {
    /// Radians per second added to every section object.
    pub section_rate: Vec3,
    /// Radians per second added to the particle field's Y rotation.
    pub particle_rate_y: f32,
}

impl Default for AmbientSpin {
    fn default() -> Self {
        Self {
            section_rate: Vec3::new(AMBIENT_SPIN_X, AMBIENT_SPIN_Y, 0.0),
            particle_rate_y: PARTICLE_SPIN_Y,
        }
    }
}

impl AmbientSpin {
    pub fn apply<'a>(
        &self,
        dt_sec: f32,
        section_rotations: impl IntoIterator<Item = &'a mut Vec3>,
        particle_rotation_y: &mut f32,
    ) {
        let step = self.section_rate * dt_sec;
        for rotation in section_rotations {
            *rotation += step;
        }
        *particle_rotation_y += self.particle_rate_y * dt_sec;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increments_accumulate_on_existing_rotation() {
        let spin = AmbientSpin::default();
        let mut rotations = [Vec3::new(1.0, 0.0, 0.5), Vec3::ZERO];
        let mut particles = 0.0;
        spin.apply(0.5, rotations.iter_mut(), &mut particles);
        assert!((rotations[0].x - 1.05).abs() < 1e-6);
        assert!((rotations[0].y - 0.06).abs() < 1e-6);
        assert_eq!(rotations[0].z, 0.5);
        assert!((particles - 0.01).abs() < 1e-7);
    }
}
