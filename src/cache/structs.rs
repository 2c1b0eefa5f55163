//! Cache structures.

/// Main cache connector dispatching to the configured engine.
pub mod cache_connector;

/// Filesystem cache engine.
pub mod cache_connector_filesystem;

/// Memcache cache engine.
pub mod cache_connector_memcache;

/// Namespace-qualified cache key.
pub mod cache_key;

/// On-disk entry record and its in-process mirror counterpart.
pub mod cache_record;

/// Hit/miss/uptime statistics rendered by `get_stats`.
pub mod cache_stats;

/// `memcache::Client` wrapper implementing the remote client seam.
pub mod memcache_client;

/// Low-memory circuit breaker.
pub mod memory_guard;

/// Memcache endpoint description.
pub mod server_descriptor;

/// Deduplicated list of Memcache endpoints.
pub mod server_registry;
