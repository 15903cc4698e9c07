//! Background gradient parameters and a CPU mirror of the fragment shader.

use crate::color::Rgb;
use crate::constants::{GRADIENT_COLORS, GRADIENT_SPLIT};
use crate::error::Result;

/// Uniform block consumed by `background.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GradientUniforms {
    pub color1: [f32; 4],
    pub color2: [f32; 4],
    pub color3: [f32; 4],
    pub resolution: [f32; 2],
    pub split: f32,
    pub _pad: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gradient {
    /// Bottom, middle and top colors (sRGB).
    pub colors: [Rgb; 3],
    pub split: f32,
}

impl Gradient {
    pub fn from_hex(colors: [&str; 3], split: f32) -> Result<Self> {
        Ok(Self {
            colors: [
                Rgb::from_hex(colors[0])?,
                Rgb::from_hex(colors[1])?,
                Rgb::from_hex(colors[2])?,
            ],
            split: split.clamp(1e-3, 1.0 - 1e-3),
        })
    }

    /// Color at normalized height `v` (0 = bottom edge, 1 = top edge).
    pub fn sample(&self, v: f32) -> Rgb {
        let v = v.clamp(0.0, 1.0);
        let [c1, c2, c3] = self.colors;
        if v < self.split {
            c1.lerp(c2, v / self.split)
        } else {
            c2.lerp(c3, (v - self.split) / (1.0 - self.split))
        }
    }

    /// Pack for the GPU; colors go out in linear space.
    pub fn uniforms(&self, physical_size: (u32, u32)) -> GradientUniforms {
        let [c1, c2, c3] = self.colors;
        GradientUniforms {
            color1: c1.to_linear().to_array4(1.0),
            color2: c2.to_linear().to_array4(1.0),
            color3: c3.to_linear().to_array4(1.0),
            resolution: [physical_size.0 as f32, physical_size.1 as f32],
            split: self.split,
            _pad: 0.0,
        }
    }
}

impl Default for Gradient {
    fn default() -> Self {
        let [c1, c2, c3] = GRADIENT_COLORS;
        Self::from_hex([c1, c2, c3], GRADIENT_SPLIT).unwrap_or(Self {
            colors: [Rgb::WHITE; 3],
            split: GRADIENT_SPLIT,
        })
    }
}
