use serde_json::Value;
use crate::cache::structs::cache_record::{CacheRecord, MirrorEntry};

impl CacheRecord {
    pub fn new(key: &str, value: Value, expires_at: Option<i64>) -> CacheRecord {
        CacheRecord {
            key: key.to_string(),
            expires_at,
            value,
        }
    }

    /// Absolute expiry for an entry written at `now` with `ttl` seconds.
    pub fn expiry_for(now: i64, ttl: u64) -> Option<i64> {
        if ttl == 0 {
            return None;
        }
        i64::try_from(ttl).ok().and_then(|ttl| now.checked_add(ttl))
    }

    pub fn is_expired(&self, now: i64) -> bool {
        expiry_passed(self.expires_at, now)
    }
}

impl MirrorEntry {
    pub fn new(value: Value, expires_at: Option<i64>) -> MirrorEntry {
        MirrorEntry { value, expires_at }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn is_expired(&self, now: i64) -> bool {
        expiry_passed(self.expires_at, now)
    }
}

fn expiry_passed(expires_at: Option<i64>, now: i64) -> bool {
    matches!(expires_at, Some(at) if at <= now)
}
