//! Implementation blocks for cache types.

pub mod cache_connector;
pub mod cache_connector_filesystem;
pub mod cache_connector_memcache;
pub mod cache_engine;
pub mod cache_key;
pub mod cache_record;
pub mod cache_stats;
pub mod memcache_client;
pub mod memory_guard;
pub mod remote_dialect;
pub mod server_descriptor;
pub mod server_registry;
pub mod write_policy;
