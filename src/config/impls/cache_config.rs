use crate::cache::errors::CacheError;
use crate::cache::structs::memory_guard::MemoryGuard;
use crate::config::structs::cache_config::CacheConfig;

impl CacheConfig {
    /// Low-memory guard for the filesystem engine; disabled unless both
    /// `memory_limit` and `memory_low` are set.
    pub fn memory_guard(&self) -> Result<MemoryGuard, CacheError> {
        MemoryGuard::from_thresholds(self.memory_limit.as_deref(), self.memory_low.as_deref())
    }
}
