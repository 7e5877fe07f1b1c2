//! Facade structures.

/// Default-profile facade over the registry.
pub mod cache_service;
