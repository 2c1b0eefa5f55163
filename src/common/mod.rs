//! Common utilities and shared functionality.
//!
//! Helpers used by the cache engines, the configuration loader and the
//! binary.
//!
//! # Utilities
//!
//! - Byte size parsing (`"128M"`, `"1g"`, `"512k"`)
//! - Log level parsing and logging setup
//!
//! # Data Structures
//!
//! - `CustomError` - Simple message error
//! - `SystemClock` / `ManualClock` - Time sources for expiry
//! - `ProcessMemory` - Resident memory probe for the low-memory guard
//!
//! # Example
//!
//! ```rust,ignore
//! use cms_cache::common::common::parse_byte_size;
//!
//! assert_eq!(parse_byte_size("64M"), Some(64 * 1024 * 1024));
//! ```

/// Common data structures (errors, clocks, memory probe).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

#[cfg(test)]
mod tests;
