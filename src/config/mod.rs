//! Configuration management module.
//!
//! Loads, saves and validates `config.toml`:
//!
//! ```toml
//! log_level = "info"
//!
//! [cache]
//! default = "main"
//!
//! [cache.default_options]
//! driver = "array"
//!
//! [[cache.profiles]]
//! name = "main"
//! driver = "redis"
//! namespace = "app"
//! parameters = { host = "127.0.0.1", port = 6379 }
//! ```
//!
//! Profiles are an array of tables, so their order is the file order and the
//! first one is the default when `cache.default` is not set.
//!
//! # Example
//!
//! ```rust,ignore
//! use multicache::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
