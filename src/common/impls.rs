//! Implementation blocks for common types.

pub mod custom_error;
pub mod manual_clock;
pub mod process_memory;
pub mod system_clock;
