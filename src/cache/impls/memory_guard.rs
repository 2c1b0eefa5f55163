use std::fmt;
use std::sync::Arc;
use crate::cache::errors::CacheError;
use crate::cache::structs::memory_guard::MemoryGuard;
use crate::cache::traits::memory_probe::MemoryProbe;
use crate::common::common::parse_byte_size;
use crate::common::structs::process_memory::ProcessMemory;

impl fmt::Debug for MemoryGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryGuard")
            .field("limit", &self.limit)
            .field("low", &self.low)
            .field("probe", &"<dyn MemoryProbe>")
            .finish()
    }
}

impl MemoryGuard {
    pub fn new(limit: u64, low: u64, probe: Arc<dyn MemoryProbe>) -> MemoryGuard {
        MemoryGuard { limit, low, probe }
    }

    pub fn disabled() -> MemoryGuard {
        Self::new(0, 0, Arc::new(ProcessMemory))
    }

    /// Builds the guard from `"128M"`-style thresholds. Both must be present
    /// for the guard to be armed.
    pub fn from_thresholds(limit: Option<&str>, low: Option<&str>) -> Result<MemoryGuard, CacheError> {
        let (Some(limit), Some(low)) = (limit, low) else {
            return Ok(Self::disabled());
        };
        let parse = |value: &str| {
            parse_byte_size(value)
                .ok_or_else(|| CacheError::ConfigurationError(format!("Invalid byte size: '{}'", value)))
        };
        Ok(Self::new(parse(limit)?, parse(low)?, Arc::new(ProcessMemory)))
    }

    pub fn is_enabled(&self) -> bool {
        self.limit > 0
    }

    /// Bytes left before the ceiling; negative once usage exceeds it.
    pub fn remaining(&self) -> i128 {
        self.limit as i128 - self.probe.current_usage() as i128
    }

    pub fn is_low(&self) -> bool {
        self.is_enabled() && self.remaining() < self.low as i128
    }
}
