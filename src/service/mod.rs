//! Facade over the default cache profile.
//!
//! [`structs::cache_service::CacheService`] forwards `fetch`, `contains`,
//! `save`, `delete` and `flush_all` to whichever profile is the default, and
//! hands out other profiles through `select`.

/// Implementation blocks for the facade.
pub mod impls;

/// Facade structures.
pub mod structs;

#[cfg(test)]
mod tests;
