//! General application configuration.

use serde::{Deserialize, Serialize};
use shelf_core::image::{DEFAULT_IMAGE_URL, FALLBACK_IMAGE_URL};

/// Default result limit.
const fn default_limit() -> u32 {
    50
}

fn default_image_url() -> String {
    DEFAULT_IMAGE_URL.to_string()
}

fn fallback_image_url() -> String {
    FALLBACK_IMAGE_URL.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Image assigned to categories created without one.
    #[serde(default = "default_image_url")]
    pub default_image_url: String,

    /// Image shown when a category image is missing.
    #[serde(default = "fallback_image_url")]
    pub fallback_image_url: String,

    /// Default result limit for list/search commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_image_url: default_image_url(),
            fallback_image_url: fallback_image_url(),
            default_limit: default_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_image_url, DEFAULT_IMAGE_URL);
        assert_eq!(config.fallback_image_url, FALLBACK_IMAGE_URL);
        assert_eq!(config.default_limit, 50);
    }
}
