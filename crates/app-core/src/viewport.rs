use crate::constants::MAX_PIXEL_RATIO;
use crate::error::{Result, SceneError};

/// Visible area in device-independent pixels plus the host's pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Result<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(SceneError::InvalidViewport { width, height });
        }
        let dpr = if valid(device_pixel_ratio) {
            device_pixel_ratio
        } else {
            1.0
        };
        Ok(Self {
            width,
            height,
            device_pixel_ratio: dpr,
        })
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Pixel ratio actually used for the render target, capped at 2.
    #[inline]
    pub fn pixel_ratio(&self) -> f32 {
        self.device_pixel_ratio.min(MAX_PIXEL_RATIO)
    }

    /// Render target size in physical pixels (never zero).
    pub fn physical_size(&self) -> (u32, u32) {
        let pr = self.pixel_ratio();
        let w = (self.width * pr).round().max(1.0) as u32;
        let h = (self.height * pr).round().max(1.0) as u32;
        (w, h)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
            device_pixel_ratio: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_ratio_is_capped() {
        let vp = Viewport::new(400.0, 300.0, 3.0).unwrap();
        assert_eq!(vp.pixel_ratio(), 2.0);
        assert_eq!(vp.physical_size(), (800, 600));
    }

    #[test]
    fn low_ratio_passes_through() {
        let vp = Viewport::new(400.0, 300.0, 1.5).unwrap();
        assert_eq!(vp.physical_size(), (600, 450));
    }

    #[test]
    fn rejects_degenerate_sizes() {
        assert!(Viewport::new(0.0, 300.0, 1.0).is_err());
        assert!(Viewport::new(300.0, f32::NAN, 1.0).is_err());
        let vp = Viewport::new(10.0, 10.0, f32::NAN).unwrap();
        assert_eq!(vp.device_pixel_ratio, 1.0);
    }
}
