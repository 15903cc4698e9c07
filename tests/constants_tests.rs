// Host-side tests for the web frontend's DOM wiring constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn element_ids_are_distinct_and_css_safe() {
    let ids = [CANVAS_ID, AUDIO_ID, AUDIO_TOGGLE_ID];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        assert!(a.chars().all(|c| c.is_ascii_lowercase() || c == '-'), "{}", a);
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn listens_to_window_level_events() {
    assert_eq!(SCROLL_EVENT, "scroll");
    assert_eq!(POINTER_MOVE_EVENT, "mousemove");
    assert_eq!(RESIZE_EVENT, "resize");
}
