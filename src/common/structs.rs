//! Common data structures.

/// Message-only error used by configuration loading and logging setup.
pub mod custom_error;

/// Clock that can be moved forward by hand.
pub mod manual_clock;

/// Resident memory probe of the current process.
pub mod process_memory;

/// Wall clock.
pub mod system_clock;
