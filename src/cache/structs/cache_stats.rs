use serde::{Deserialize, Serialize};
use crate::cache::enums::cache_engine::CacheEngine;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CacheStats {
    pub engine: CacheEngine,
    pub hits: u64,
    pub misses: u64,
    /// Unix seconds the cache root was last recreated (filesystem engine).
    pub started_at: Option<i64>,
    /// Seconds the server has been up (memcache engine).
    pub uptime_seconds: Option<u64>,
    pub bytes_used: Option<u64>,
    pub bytes_limit: Option<u64>,
}
