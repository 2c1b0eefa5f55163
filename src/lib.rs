//! # CMS Cache
//!
//! A namespaced key/value cache with interchangeable storage engines.
//!
//! ## Overview
//!
//! Callers store JSON values under a key inside a namespace, with a time to
//! live in seconds. The engine is picked once from configuration:
//!
//! - **filesystem**: one file per entry below a cache root, lazy expiry,
//!   exclusive locks for writers, persisted hit/miss counters, soft deletes
//!   and an optional low-memory circuit breaker.
//! - **memcache**: entries live on one or more memcached servers; namespace
//!   flushes move a per-namespace epoch instead of touching every key.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cms_cache::cache::structs::cache_connector::CacheConnector;
//! use cms_cache::cache::traits::cache_backend::CacheBackend;
//! use cms_cache::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let cache = CacheConnector::new(&config.cache)?;
//! cache.set("front", &serde_json::json!("<html/>"), "pages", 300)?;
//! ```
//!
//! ## Modules
//!
//! - [`cache`] - The cache contract and its filesystem and Memcache engines
//! - [`common`] - Logging setup, clocks, memory probing and shared helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`structs`] - CLI argument parsing for the `cms-cache` binary

/// Cache contract and engines.
///
/// Holds the filesystem and Memcache backends, keys, records, statistics and
/// the connector that dispatches to whichever engine is configured.
pub mod cache;

/// Common utilities and shared functionality.
///
/// Contains logging setup, byte size parsing, the system and manual clocks,
/// process memory probing and the generic error type.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, validating and writing the TOML configuration.
pub mod config;

/// CLI argument parsing.
///
/// Defines the command-line interface of the admin binary.
pub mod structs;
