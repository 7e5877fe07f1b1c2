//! # Multicache
//!
//! A driver-based cache factory with named, lazily connected cache profiles.
//!
//! ## Overview
//!
//! Callers describe caches by driver name and a parameter table. The factory
//! checks the parameters each driver needs and opens the backend; the registry
//! keeps one backend per named profile and builds it on first use; the service
//! forwards everyday operations to the default profile.
//!
//! ## Features
//!
//! - **Many Backends**: in-memory, shared memory, files, Redis, Memcache,
//!   Couchbase, SQLite/MySQL/PostgreSQL, MongoDB, Riak and a no-op cache
//! - **Composition**: chains of caches with write-back on read, and
//!   namespaced views with cheap invalidation
//! - **Lazy Profiles**: each profile connects once, the first time it is used
//! - **Extensible**: new drivers are registered without touching the dispatcher
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use multicache::config::structs::configuration::Configuration;
//! use multicache::service::structs::cache_service::CacheService;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let service = CacheService::from_config(&config);
//! service.save("answer", &serde_json::json!(42), Some(60)).await?;
//! ```
//!
//! ## Modules
//!
//! - [`cache`] - Backend trait and one connector per backend family
//! - [`common`] - Logging setup, expiry helpers and shared errors
//! - [`config`] - Configuration management and TOML parsing
//! - [`factory`] - Driver registration table and backend construction
//! - [`registry`] - Named profiles and their lazily built backends
//! - [`service`] - Facade over the default profile
//! - [`structs`] - CLI argument parsing

/// Cache backend module.
///
/// Defines the `CacheBackend` trait and its connectors: memory, file, Redis,
/// Memcache, SQL, MongoDB, Riak, chain, namespace wrapper and void.
pub mod cache;

/// Common utilities and shared functionality.
///
/// Contains logging setup, expiry arithmetic, the empty-parameter check and
/// the `CustomError` type used at the binary boundary.
pub mod common;

/// Configuration management module.
///
/// Handles loading, saving and validating `config.toml`, and merging cache
/// profiles over the default options.
pub mod config;

/// Driver factory module.
///
/// Maps driver names to descriptors (required parameters and constructor)
/// and builds backends from parameter tables.
pub mod factory;

/// Profile registry module.
///
/// Resolves the configured profiles once and builds each backend on demand.
pub mod registry;

/// Facade over the default cache profile.
pub mod service;

/// CLI argument parsing.
pub mod structs;
