// Host-side tests for URL query configuration.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod config {
    include!("../src/config.rs");
}

use config::scene_config_from_search;
use scrollscape_core::tween::OverlapPolicy;
use scrollscape_core::{Rgb, SceneConfig};

#[test]
fn empty_search_gives_defaults() {
    assert_eq!(scene_config_from_search(""), SceneConfig::default());
    assert_eq!(scene_config_from_search("?"), SceneConfig::default());
}

#[test]
fn search_overrides_material_seed_and_overlap() {
    let c = scene_config_from_search("?material=ff8800&seed=3&overlap=stack");
    assert_eq!(c.material_color, Rgb::from_hex("#ff8800").unwrap());
    assert_eq!(c.particle_seed, 3);
    assert_eq!(c.overlap_policy, OverlapPolicy::Stack);
}

#[test]
fn unknown_keys_are_ignored() {
    let c = scene_config_from_search("?utm_source=x&seed=11");
    assert_eq!(c.particle_seed, 11);
    assert_eq!(c.material_color, SceneConfig::default().material_color);
}

#[test]
fn malformed_override_falls_back_to_defaults() {
    let c = scene_config_from_search("?seed=12&material=not-a-color");
    assert_eq!(c, SceneConfig::default());
}
