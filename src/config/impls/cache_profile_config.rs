use crate::config::structs::cache_profile_config::CacheProfileConfig;
use serde_json::Map;

pub const DEFAULT_PROFILE_NAME: &str = "default";
pub const DEFAULT_DRIVER: &str = "array";

impl CacheProfileConfig {
    pub fn new(name: &str, driver: &str) -> Self {
        Self {
            name: name.to_string(),
            driver: Some(driver.to_string()),
            namespace: None,
            parameters: None,
        }
    }

    /// Built-in defaults: the `array` driver, no namespace, no parameters.
    pub fn builtin_defaults() -> Self {
        Self {
            name: DEFAULT_PROFILE_NAME.to_string(),
            driver: Some(DEFAULT_DRIVER.to_string()),
            namespace: None,
            parameters: Some(Map::new()),
        }
    }

    /// Field by field: every field set here wins, the rest comes from `defaults`.
    /// A `parameters` table replaces the default one as a whole.
    pub fn merged_over(&self, defaults: &CacheProfileConfig) -> CacheProfileConfig {
        CacheProfileConfig {
            name: self.name.clone(),
            driver: self.driver.clone().or_else(|| defaults.driver.clone()),
            namespace: self.namespace.clone().or_else(|| defaults.namespace.clone()),
            parameters: self.parameters.clone().or_else(|| defaults.parameters.clone()),
        }
    }
}
