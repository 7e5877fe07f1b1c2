//! Cache backend adapters.
//!
//! Every backend is reached through the [`traits::cache_backend::CacheBackend`]
//! trait, so callers never see which client library sits underneath.
//!
//! # Supported Backends
//!
//! - **Memory**: `array` (private map) and `apcu`/`xcache`/`wincache`/`zenddata`
//!   (process-wide map per driver)
//! - **File**: `filesystem`, `file`, `phpfile`
//! - **Redis**: `redis`, `predis`
//! - **Memcache**: `memcached`, `memcache`, `couchbase`
//! - **Database**: `sqlite3`, `pdo` (SQLite, MySQL, PostgreSQL through sqlx)
//! - **Document / HTTP**: `mongodb`, `riak`
//! - **Composite**: `chain`, plus the namespace wrapper and `void`
//!
//! Values are `serde_json::Value`s; lifetimes are in seconds with `0`/`None`
//! meaning "never expires".
//!
//! # Example
//!
//! ```rust,ignore
//! use multicache::cache::enums::cache_driver::CacheDriver;
//! use multicache::cache::structs::cache_connector_memory::CacheConnectorMemory;
//! use multicache::cache::traits::cache_backend::CacheBackend;
//!
//! let cache = CacheConnectorMemory::new(CacheDriver::array);
//! cache.save("answer", &serde_json::json!(42), None).await?;
//! ```

/// Cache driver and SQL dialect enumerations.
pub mod enums;

/// Error types for cache operations.
pub mod errors;

/// SQL statement builders for the table backed cache.
pub mod helpers;

/// Implementation blocks for cache connectors.
pub mod impls;

/// Data structures for cache connections.
pub mod structs;

/// Cache backend trait definitions.
pub mod traits;
