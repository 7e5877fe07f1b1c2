//! Implementation blocks for the profile registry.

/// CacheProfile: construction from merged configuration.
pub mod cache_profile;

/// CacheRegistry: initialisation, lookup and lazy construction.
pub mod cache_registry;

/// RegistryState: profile resolution and validation.
pub mod registry_state;
