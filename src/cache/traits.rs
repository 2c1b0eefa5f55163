//! Cache trait definitions.

/// The operation set every cache engine implements.
pub mod cache_backend;

/// Source of the current time, in unix seconds.
pub mod clock;

/// Source of the current process memory usage.
pub mod memory_probe;

/// Wire-level client the Memcache engine is built on.
pub mod remote_client;
