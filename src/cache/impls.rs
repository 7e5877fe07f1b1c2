//! Implementation blocks for cache connectors and enums.

/// CacheDriver: names, parsing, shared-memory classification.
pub mod cache_driver;

/// DatabaseDrivers: dialect detection and bind markers.
pub mod database_drivers;

/// In-process store, private or shared per driver.
pub mod cache_connector_memory;

/// No-op cache.
pub mod cache_connector_void;

/// File per key cache with atomic writes.
pub mod cache_connector_file;

/// Redis connection URL building and commands.
pub mod cache_connector_redis;

/// Memcache client wrapper.
pub mod cache_connector_memcache;

/// MongoDB document store.
pub mod cache_connector_mongodb;

/// Riak HTTP client.
pub mod cache_connector_riak;

/// sqlx `Any` pool backed table.
pub mod cache_connector_sql;

/// Read-through / write-all composite.
pub mod cache_connector_chain;

/// Versioned namespace wrapper.
pub mod cache_connector_namespaced;
