use scrollscape_core::SceneConfig;

/// Scene configuration from the page's `location.search`. A malformed
/// override is logged and the defaults are used instead.
pub fn scene_config_from_search(search: &str) -> SceneConfig {
    match SceneConfig::from_query(search) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            SceneConfig::default()
        }
    }
}
