//! Cache trait definitions.

/// Uniform fetch/contains/save/delete contract every connector implements.
pub mod cache_backend;
