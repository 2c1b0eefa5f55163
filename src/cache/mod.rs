//! Cache engine module with filesystem and Memcache backends.
//!
//! Every consumer talks to the cache through the [`CacheBackend`] contract;
//! the concrete engine is chosen once, from configuration, when the
//! [`CacheConnector`] is built.
//!
//! # Supported Backends
//!
//! - **Filesystem**: one file per entry under a namespaced directory tree,
//!   lazy TTL expiry, exclusive file locks for writers, persisted hit/miss
//!   counters and an in-process value mirror.
//! - **Memcache**: storage and TTL delegated to one or more memcached
//!   servers, spoken to in either the ASCII (`memcache`) or binary
//!   (`memcached`) dialect.
//!
//! # Write policy
//!
//! - `create` only inserts (fails when a live entry exists)
//! - `update` only replaces (fails when no live entry exists)
//! - `set` always writes
//!
//! # Example
//!
//! ```rust,ignore
//! use cms_cache::cache::structs::cache_connector::CacheConnector;
//! use cms_cache::cache::traits::cache_backend::CacheBackend;
//!
//! let cache = CacheConnector::new(&config.cache)?;
//! cache.create("42", &serde_json::json!({"name": "Ann"}), "users", 60)?;
//! let user = cache.read("42", "users")?;
//! ```
//!
//! [`CacheBackend`]: traits::cache_backend::CacheBackend
//! [`CacheConnector`]: structs::cache_connector::CacheConnector

/// Cache enumerations (engine, remote dialect, write policy).
pub mod enums;

/// Error types for cache operations.
pub mod errors;

/// Implementation blocks for cache connectors and helpers.
pub mod impls;

/// Data structures for cache connectors, keys, records and stats.
pub mod structs;

/// Cache contract and the seams the engines are built on.
pub mod traits;
