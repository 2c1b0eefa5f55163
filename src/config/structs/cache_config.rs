use crate::cache::enums::cache_engine::CacheEngine;
use crate::config::structs::memcache_config::MemcacheConfig;
use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CacheConfig {
    pub engine: CacheEngine,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_limit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_low: Option<String>,
    #[serde(default)]
    pub memcache: MemcacheConfig,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            engine: CacheEngine::filesystem,
            path: "cache".to_string(),
            memory_limit: None,
            memory_low: None,
            memcache: MemcacheConfig::default(),
        }
    }
}
