//! Implementation blocks for the facade.

/// CacheService: default-profile operations and profile selection.
pub mod cache_service;
