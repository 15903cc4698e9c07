//! Runtime scene configuration.
//!
//! Tuning constants live in [`crate::constants`]; this is the small set of
//! knobs a host may override at startup (URL query on the web, environment
//! variables natively). Both feed `key=value` pairs through
//! [`SceneConfig::from_pairs`].

use crate::color::Rgb;
use crate::constants::{DEFAULT_MATERIAL_COLOR, DEFAULT_PARTICLE_SEED};
use crate::error::{Result, SceneError};
use crate::gradient::Gradient;
use crate::tween::OverlapPolicy;

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub material_color: Rgb,
    pub particle_seed: u64,
    pub overlap_policy: OverlapPolicy,
    pub gradient: Gradient,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            material_color: Rgb::from_hex(DEFAULT_MATERIAL_COLOR).unwrap_or(Rgb::WHITE),
            particle_seed: DEFAULT_PARTICLE_SEED,
            overlap_policy: OverlapPolicy::Restart,
            gradient: Gradient::default(),
        }
    }
}

impl SceneConfig {
    /// Apply one override. Unknown keys are ignored and reported as `false`.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<bool> {
        let invalid = || SceneError::InvalidConfig {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "material" => self.material_color = Rgb::from_hex(value)?,
            "seed" => self.particle_seed = value.trim().parse().map_err(|_| invalid())?,
            "overlap" => {
                self.overlap_policy = match value.trim().to_ascii_lowercase().as_str() {
                    "restart" => OverlapPolicy::Restart,
                    "stack" => OverlapPolicy::Stack,
                    "queue" => OverlapPolicy::Queue,
                    _ => return Err(invalid()),
                }
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Result<Self> {
        let mut config = Self::default();
        for (key, value) in pairs {
            if !config.apply(key, value)? {
                log::debug!("[config] ignoring unknown key {:?}", key);
            }
        }
        Ok(config)
    }

    /// Parse a URL query string such as `?material=ff8800&seed=3`.
    pub fn from_query(query: &str) -> Result<Self> {
        let pairs = query
            .trim_start_matches('?')
            .split('&')
            .filter(|p| !p.is_empty())
            .map(|p| p.split_once('=').unwrap_or((p, "")));
        Self::from_pairs(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let c = SceneConfig::default();
        assert_eq!(c.material_color, Rgb::from_hex("#ffeded").unwrap());
        assert_eq!(c.particle_seed, DEFAULT_PARTICLE_SEED);
        assert_eq!(c.overlap_policy, OverlapPolicy::Restart);
    }

    #[test]
    fn query_overrides_known_keys() {
        let c = SceneConfig::from_query("?material=ff8800&seed=3&overlap=Queue&debug=1").unwrap();
        assert_eq!(c.material_color, Rgb::from_hex("ff8800").unwrap());
        assert_eq!(c.particle_seed, 3);
        assert_eq!(c.overlap_policy, OverlapPolicy::Queue);
    }

    #[test]
    fn bad_values_are_errors() {
        assert!(SceneConfig::from_query("seed=abc").is_err());
        assert!(SceneConfig::from_query("material=red").is_err());
        assert!(SceneConfig::from_query("overlap=merge").is_err());
        assert!(SceneConfig::from_query("").is_ok());
    }
}
