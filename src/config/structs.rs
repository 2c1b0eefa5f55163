//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Cache engine selection and filesystem settings.
pub mod cache_config;

/// Root configuration structure containing all settings.
pub mod configuration;

/// Memcache dialect and server list.
pub mod memcache_config;
