//! Cache enumeration types.

/// Built-in cache driver identifiers (array, redis, filesystem, chain, ...).
pub mod cache_driver;

/// SQL dialects understood by the sqlite3/pdo cache (sqlite3, mysql, pgsql).
pub mod database_drivers;
