use std::sync::Arc;
use std::sync::atomic::AtomicI64;

/// Starts at the current time and only moves when told to. Clones share the
/// same reading.
#[derive(Debug, Clone)]
pub struct ManualClock {
    pub(crate) now: Arc<AtomicI64>,
}
