//! Latest raw input samples: scroll offset and normalized cursor.
//!
//! Event handlers only call the setters here; the frame tick reads a
//! [`InputSnapshot`]. No smoothing happens at this level, and only the most
//! recent sample of each kind is kept.

use crate::viewport::Viewport;

/// Cursor position relative to the viewport center, each axis in [-0.5, 0.5].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorState {
    pub x: f32,
    pub y: f32,
}

impl CursorState {
    /// Map client-space pointer coordinates to the centered unit range.
    pub fn from_client(client_x: f32, client_y: f32, viewport: &Viewport) -> Self {
        let norm = |v: f32, extent: f32| {
            if extent > 0.0 && v.is_finite() {
                (v / extent - 0.5).clamp(-0.5, 0.5)
            } else {
                0.0
            }
        };
        Self {
            x: norm(client_x, viewport.width),
            y: norm(client_y, viewport.height),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    pub scroll_y: f32,
    pub cursor: CursorState,
}

#[derive(Clone, Debug, Default)]
pub struct InputSampler {
    latest: InputSnapshot,
}

impl InputSampler {
    pub fn new(initial_scroll_y: f32) -> Self {
        let mut sampler = Self::default();
        sampler.record_scroll(initial_scroll_y);
        sampler
    }

    pub fn record_scroll(&mut self, scroll_y: f32) {
        if scroll_y.is_finite() {
            self.latest.scroll_y = scroll_y;
        }
    }

    pub fn record_pointer(&mut self, client_x: f32, client_y: f32, viewport: &Viewport) {
        self.latest.cursor = CursorState::from_client(client_x, client_y, viewport);
    }

    #[inline]
    pub fn snapshot(&self) -> InputSnapshot {
        self.latest
    }
}

/// Page-style scroll offset for hosts without a scrolling document.
/// Clamped to `[0, (section_count - 1) * viewport.height]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VirtualScroll {
    offset: f32,
}

impl VirtualScroll {
    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn max_offset(section_count: usize, viewport: &Viewport) -> f32 {
        section_count.saturating_sub(1) as f32 * viewport.height
    }

    pub fn scroll_to(&mut self, y: f32, section_count: usize, viewport: &Viewport) -> f32 {
        if y.is_finite() {
            self.offset = y.clamp(0.0, Self::max_offset(section_count, viewport));
        }
        self.offset
    }

    pub fn scroll_by(&mut self, delta: f32, section_count: usize, viewport: &Viewport) -> f32 {
        self.scroll_to(self.offset + delta, section_count, viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn virtual_scroll_clamps_to_last_section() {
        let vp = Viewport::new(1000.0, 800.0, 1.0).unwrap();
        let mut s = VirtualScroll::default();
        assert_eq!(s.scroll_by(-50.0, 7, &vp), 0.0);
        assert_eq!(s.scroll_by(1200.0, 7, &vp), 1200.0);
        assert_eq!(s.scroll_by(1e6, 7, &vp), 4800.0);
        assert_eq!(s.scroll_by(f32::NAN, 7, &vp), 4800.0);
        let small = Viewport::new(1000.0, 400.0, 1.0).unwrap();
        assert_eq!(s.scroll_by(0.0, 7, &small), 2400.0);
    }

    fn vp() -> Viewport {
        Viewport::new(1000.0, 800.0, 1.0).unwrap()
    }

    #[test]
    fn cursor_is_centered_and_clamped() {
        let c = CursorState::from_client(500.0, 400.0, &vp());
        assert_eq!(c, CursorState { x: 0.0, y: 0.0 });
        let c = CursorState::from_client(0.0, 800.0, &vp());
        assert_eq!(c, CursorState { x: -0.5, y: 0.5 });
        let c = CursorState::from_client(-50.0, 5000.0, &vp());
        assert_eq!(c, CursorState { x: -0.5, y: 0.5 });
    }

    #[test]
    fn only_latest_sample_is_kept() {
        let mut s = InputSampler::new(0.0);
        s.record_scroll(10.0);
        s.record_scroll(20.0);
        s.record_scroll(f32::NAN);
        s.record_pointer(750.0, 200.0, &vp());
        let snap = s.snapshot();
        assert_eq!(snap.scroll_y, 20.0);
        assert!((snap.cursor.x - 0.25).abs() < 1e-6);
        assert!((snap.cursor.y + 0.25).abs() < 1e-6);
    }
}
