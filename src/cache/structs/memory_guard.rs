use std::sync::Arc;
use crate::cache::traits::memory_probe::MemoryProbe;

/// Trips when `limit - usage` drops below `low`. A zero `limit` disables it.
#[derive(Clone)]
pub struct MemoryGuard {
    pub(crate) limit: u64,
    pub(crate) low: u64,
    pub(crate) probe: Arc<dyn MemoryProbe>,
}
