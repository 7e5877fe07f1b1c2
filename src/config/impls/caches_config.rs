use crate::config::structs::cache_profile_config::CacheProfileConfig;
use crate::config::structs::caches_config::CachesConfig;

impl CachesConfig {
    /// Built-in defaults with `[cache.default_options]` applied on top.
    pub fn effective_defaults(&self) -> CacheProfileConfig {
        let builtin = CacheProfileConfig::builtin_defaults();
        match &self.default_options {
            Some(options) => options.merged_over(&builtin),
            None => builtin,
        }
    }

    pub fn with_profile(mut self, profile: CacheProfileConfig) -> Self {
        self.profiles.push(profile);
        self
    }
}
