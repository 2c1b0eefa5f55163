use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Content of one entry file. `expires_at` is unix seconds; `None` marks a
/// request-scoped entry that only the namespace sweep removes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CacheRecord {
    pub key: String,
    pub expires_at: Option<i64>,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MirrorEntry {
    pub(crate) value: Value,
    pub(crate) expires_at: Option<i64>,
}
