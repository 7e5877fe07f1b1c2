//! Implementation blocks for configuration loading, saving and validation.

/// CacheProfileConfig: merging over default options.
pub mod cache_profile_config;

/// CachesConfig: effective default options.
pub mod caches_config;

/// Configuration: defaults, load/save and validation.
pub mod configuration;

/// ConfigurationError: Display and Error.
pub mod configuration_error;
