use crate::error::{Result, SceneError};

/// sRGB color with components in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb` (case-insensitive).
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(SceneError::InvalidColor(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| SceneError::InvalidColor(s.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Convert to linear light for an sRGB render target.
    pub fn to_linear(self) -> Self {
        #[inline]
        fn lin(c: f32) -> f32 {
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        Self::new(lin(self.r), lin(self.g), lin(self.b))
    }

    pub fn lerp(self, other: Rgb, t: f32) -> Self {
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }

    pub fn to_array4(self, a: f32) -> [f32; 4] {
        [self.r, self.g, self.b, a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_hash() {
        let a = Rgb::from_hex("#ff0080").unwrap();
        let b = Rgb::from_hex("FF0080").unwrap();
        assert_eq!(a, b);
        assert!((a.r - 1.0).abs() < 1e-6);
        assert!(a.g.abs() < 1e-6);
        assert!((a.b - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(Rgb::from_hex("#fff").is_err());
        assert!(Rgb::from_hex("#gg0000").is_err());
        assert!(Rgb::from_hex("").is_err());
        assert!(Rgb::from_hex("#ffé000").is_err());
    }

    #[test]
    fn linear_conversion_keeps_endpoints() {
        let black = Rgb::new(0.0, 0.0, 0.0).to_linear();
        let white = Rgb::WHITE.to_linear();
        assert_eq!(black, Rgb::new(0.0, 0.0, 0.0));
        assert!((white.r - 1.0).abs() < 1e-5);
        let mid = Rgb::new(0.5, 0.5, 0.5).to_linear();
        assert!(mid.r > 0.2 && mid.r < 0.22);
    }
}
