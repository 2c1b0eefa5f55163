//! Configuration management module.
//!
//! Loads, validates and writes the TOML configuration that selects and
//! tunes the cache engine.
//!
//! # Configuration Structure
//!
//! - **log_level**: `off`, `trace`, `debug`, `info`, `warn` or `error`
//! - **cache**: engine selection, cache root, optional memory guard
//! - **cache.memcache**: client dialect and server list
//!
//! # Example
//!
//! ```rust,ignore
//! use cms_cache::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_file("config.toml")?;
//! config.validate()?;
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

#[cfg(test)]
mod tests;
