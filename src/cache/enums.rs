//! Cache enumerations.

/// Configured cache engine (filesystem, memcache).
pub mod cache_engine;

/// Client dialect used by the Memcache engine.
pub mod remote_dialect;

/// Write policy behind `create`, `update` and `set`.
pub mod write_policy;
