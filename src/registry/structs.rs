//! Profile registry structures.

/// A resolved, immutable cache profile.
pub mod cache_profile;

/// Named profiles and their lazily built backends.
pub mod cache_registry;

/// Profiles, name index and per-profile slots, fixed at initialisation.
pub mod registry_state;
