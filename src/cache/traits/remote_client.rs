use std::collections::HashMap;
use crate::cache::errors::CacheError;

/// Per-server statistics as reported by the remote service.
pub type ServerStats = Vec<(String, HashMap<String, String>)>;

/// Minimal memcache command set the remote engine needs.
///
/// `add` and `replace` report a refused write as `Ok(false)`; `increment`
/// and `decrement` report a missing key as `Ok(None)`.
#[cfg_attr(test, mockall::automock)]
pub trait RemoteClient: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    fn set(&self, key: &str, value: &str, expiration: u32) -> Result<(), CacheError>;

    fn add(&self, key: &str, value: &str, expiration: u32) -> Result<bool, CacheError>;

    fn replace(&self, key: &str, value: &str, expiration: u32) -> Result<bool, CacheError>;

    fn delete(&self, key: &str) -> Result<bool, CacheError>;

    fn increment(&self, key: &str, amount: u64) -> Result<Option<u64>, CacheError>;

    fn decrement(&self, key: &str, amount: u64) -> Result<Option<u64>, CacheError>;

    fn flush(&self) -> Result<(), CacheError>;

    fn stats(&self) -> Result<ServerStats, CacheError>;
}
