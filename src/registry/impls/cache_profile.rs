use crate::config::impls::cache_profile_config::DEFAULT_DRIVER;
use crate::config::structs::cache_profile_config::CacheProfileConfig;
use crate::registry::structs::cache_profile::CacheProfile;

impl CacheProfile {
    /// Takes a profile already merged over the default options.
    pub fn from_config(config: CacheProfileConfig) -> Self {
        Self {
            name: config.name,
            driver: config.driver.unwrap_or_else(|| DEFAULT_DRIVER.to_string()),
            namespace: config.namespace,
            parameters: config.parameters.unwrap_or_default(),
        }
    }

    /// The namespace, unless unset or empty.
    pub fn effective_namespace(&self) -> Option<&str> {
        self.namespace.as_deref().filter(|namespace| !namespace.is_empty())
    }
}
