//! Easing curves for tween progress.

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in-out.
    QuadInOut,
    /// Cubic ease-in-out, the curve used for section spins.
    CubicInOut,
}

impl Easing {
    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Easing::Linear => t,
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

impl Default for Easing {
    #[inline]
    fn default() -> Self {
        Easing::CubicInOut
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 3] = [
        Easing::Linear,
        Easing::QuadInOut,
        Easing::CubicInOut,
    ];

    #[test]
    fn endpoints_are_exact() {
        for e in ALL {
            assert_eq!(e.evaluate(0.0), 0.0, "{e:?} at 0");
            assert_eq!(e.evaluate(1.0), 1.0, "{e:?} at 1");
        }
    }

    #[test]
    fn in_out_curves_are_symmetric_about_midpoint() {
        for e in [Easing::QuadInOut, Easing::CubicInOut] {
            assert!((e.evaluate(0.5) - 0.5).abs() < 1e-6);
            for i in 1..10 {
                let t = i as f32 / 20.0;
                let sum = e.evaluate(t) + e.evaluate(1.0 - t);
                assert!((sum - 1.0).abs() < 1e-5, "{e:?} asymmetric at {t}");
            }
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for e in ALL {
            let mut prev = e.evaluate(0.0);
            for i in 1..=100 {
                let v = e.evaluate(i as f32 / 100.0);
                assert!(v >= prev, "{e:?} decreased at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Easing::CubicInOut.evaluate(-1.0), 0.0);
        assert_eq!(Easing::QuadInOut.evaluate(2.0), 1.0);
    }
}
