//! Named cache profiles.
//!
//! A [`structs::cache_registry::CacheRegistry`] resolves the `[cache]`
//! configuration into profiles once, then builds each profile's backend through
//! the factory the first time it is requested. Every later request for the same
//! profile returns the same `Arc`.
//!
//! - no profiles configured: a single `default` profile from the default options
//! - no explicit default: the first profile in configuration order
//! - a non-empty namespace wraps the backend in a namespaced view
//!
//! ```rust,ignore
//! let registry = CacheRegistry::new(Arc::new(CacheFactory::new()), config.cache);
//! let sessions = registry.get("sessions").await?;
//! ```

/// Implementation blocks for the registry.
pub mod impls;

/// Registry structures.
pub mod structs;

#[cfg(test)]
mod tests;
