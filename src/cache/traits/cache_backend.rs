use serde_json::Value;
use crate::cache::enums::write_policy::WritePolicy;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_stats::CacheStats;

/// Uniform cache contract shared by every engine.
///
/// Every operation takes a namespace; an empty namespace means `"default"`.
/// Ordinary negative outcomes (miss, expired entry, refused write, memory
/// pressure) come back as `Ok(false)` / `Ok(None)`. `Err` is reserved for
/// operational failures such as an unwritable file or a dead connection.
pub trait CacheBackend: Send + Sync {
    /// Writes `data` under `key` following `policy`. `ttl` is in seconds; `0`
    /// marks a request-scoped entry.
    fn store(
        &self,
        key: &str,
        data: &Value,
        namespace: &str,
        ttl: u64,
        policy: WritePolicy,
    ) -> Result<bool, CacheError>;

    /// Inserts a new entry; fails when a live one already exists.
    fn create(&self, key: &str, data: &Value, namespace: &str, ttl: u64) -> Result<bool, CacheError> {
        self.store(key, data, namespace, ttl, WritePolicy::Insert)
    }

    fn read(&self, key: &str, namespace: &str) -> Result<Option<Value>, CacheError>;

    /// Replaces a live entry; fails when there is none.
    fn update(&self, key: &str, data: &Value, namespace: &str, ttl: u64) -> Result<bool, CacheError> {
        self.store(key, data, namespace, ttl, WritePolicy::Replace)
    }

    /// Writes unconditionally.
    fn set(&self, key: &str, data: &Value, namespace: &str, ttl: u64) -> Result<bool, CacheError> {
        self.store(key, data, namespace, ttl, WritePolicy::Upsert)
    }

    /// Returns `Ok(false)` when the key was not present.
    fn delete(&self, key: &str, namespace: &str) -> Result<bool, CacheError>;

    fn flush(&self) -> Result<bool, CacheError>;

    fn flush_namespace(&self, namespace: &str) -> Result<bool, CacheError>;

    /// Adds `offset` to a numeric entry. `Ok(None)` when the key is absent.
    fn increment(&self, key: &str, offset: u64, namespace: &str) -> Result<Option<u64>, CacheError>;

    /// Subtracts `offset` from a numeric entry, never going below zero.
    fn decrement(&self, key: &str, offset: u64, namespace: &str) -> Result<Option<u64>, CacheError>;

    fn get_stats(&self) -> Result<CacheStats, CacheError>;
}
