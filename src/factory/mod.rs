//! Driver factory.
//!
//! [`structs::cache_factory::CacheFactory`] turns a driver name plus a parameter
//! map into a ready backend. Drivers are entries in a registration table
//! (name, required parameters, constructor), so adding one never touches the
//! dispatcher:
//!
//! ```rust,ignore
//! let mut factory = CacheFactory::new();
//! factory.register(DriverDescriptor { name: "custom", required: &["host"], constructor: build_custom });
//! let cache = factory.build("redis", &parameters).await?;
//! ```
//!
//! Required parameters are checked before the constructor runs; `null`, `false`,
//! `0`, `""`, `"0"`, `[]` and `{}` all count as missing.

/// Built-in driver table and constructors.
pub mod helpers;

/// Implementation blocks for the factory.
pub mod impls;

/// Factory structures.
pub mod structs;
