//! Scroll offset to section index mapping with edge-triggered transitions.

/// Emitted once when the computed section index changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionEvent {
    pub from: usize,
    pub to: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub raw_offset_y: f32,
    pub current_section: usize,
}

#[derive(Clone, Debug)]
pub struct SectionTracker {
    state: ScrollState,
    section_count: usize,
}

impl SectionTracker {
    pub fn new(section_count: usize) -> Self {
        Self {
            state: ScrollState::default(),
            section_count: section_count.max(1),
        }
    }

    #[inline]
    pub fn state(&self) -> ScrollState {
        self.state
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.state.current_section
    }

    #[inline]
    pub fn section_count(&self) -> usize {
        self.section_count
    }

    /// Nearest section for an offset, clamped to the valid range.
    pub fn section_for(&self, raw_offset_y: f32, viewport_height: f32) -> usize {
        let candidate = (raw_offset_y / viewport_height).round();
        let last = (self.section_count - 1) as f32;
        candidate.clamp(0.0, last) as usize
    }

    /// Adopt the offset a page was loaded at without emitting a transition.
    pub fn seed(&mut self, raw_offset_y: f32, viewport_height: f32) {
        if !raw_offset_y.is_finite() || !viewport_height.is_finite() || viewport_height <= 0.0 {
            return;
        }
        self.state = ScrollState {
            raw_offset_y,
            current_section: self.section_for(raw_offset_y, viewport_height),
        };
    }

    /// Record a scroll sample; returns a transition when the section changes.
    pub fn on_scroll(&mut self, raw_offset_y: f32, viewport_height: f32) -> Option<TransitionEvent> {
        if !raw_offset_y.is_finite() || !viewport_height.is_finite() || viewport_height <= 0.0 {
            return None;
        }
        self.state.raw_offset_y = raw_offset_y;
        let to = self.section_for(raw_offset_y, viewport_height);
        let from = self.state.current_section;
        if to == from {
            return None;
        }
        self.state.current_section = to;
        Some(TransitionEvent { from, to })
    }
}
