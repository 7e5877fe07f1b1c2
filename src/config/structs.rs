//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// One cache profile entry (`[[cache.profiles]]`).
pub mod cache_profile_config;

/// The `[cache]` section.
pub mod caches_config;

/// Root configuration structure containing all settings.
pub mod configuration;
