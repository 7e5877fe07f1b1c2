//! Cache connector structures.

/// Stored value plus its expiry, used by the in-process stores.
pub mod cache_entry;

/// Typed, validated per-driver connection options.
pub mod connector_options;

/// In-process map (array, and the shared apcu/xcache/wincache/zenddata stores).
pub mod cache_connector_memory;

/// Cache that never stores anything.
pub mod cache_connector_void;

/// One file per key below a directory (filesystem, file, phpfile).
pub mod cache_connector_file;

/// Redis-specific cache connector implementation (redis, predis).
pub mod cache_connector_redis;

/// Memcache-specific cache connector implementation (memcached, memcache, couchbase).
pub mod cache_connector_memcache;

/// MongoDB collection backed cache.
pub mod cache_connector_mongodb;

/// Riak bucket reached over its HTTP interface.
pub mod cache_connector_riak;

/// SQL table backed cache (sqlite3, pdo).
pub mod cache_connector_sql;

/// Ordered composite of other caches.
pub mod cache_connector_chain;

/// Namespace wrapper with version based invalidation.
pub mod cache_connector_namespaced;
