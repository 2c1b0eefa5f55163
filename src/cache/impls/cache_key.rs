use std::fmt;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS, NON_ALPHANUMERIC};
use sha1::{Digest, Sha1};
use crate::cache::structs::cache_key::{CacheKey, DEFAULT_NAMESPACE};

/// Everything but `[A-Za-z0-9_-]` is escaped, so `.` and `..` can never
/// come out of a namespace name.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_');

/// Memcache keys may not hold whitespace or control bytes; `:` is the
/// namespace separator and `%` the escape itself.
const REMOTE_SEGMENT: &AsciiSet = &CONTROLS.add(b' ').add(b':').add(b'%');

pub const MAX_REMOTE_KEY_LENGTH: usize = 250;

impl CacheKey {
    pub fn new(key: &str, namespace: &str) -> CacheKey {
        CacheKey {
            namespace: Self::normalize_namespace(namespace).to_string(),
            key: key.to_string(),
        }
    }

    pub fn normalize_namespace(namespace: &str) -> &str {
        if namespace.is_empty() {
            DEFAULT_NAMESPACE
        } else {
            namespace
        }
    }

    /// Hex SHA-1 of the caller key.
    pub fn digest(&self) -> String {
        sha1_hex(self.key.as_bytes())
    }

    /// Name of the entry file inside the namespace directory.
    pub fn file_name(&self) -> String {
        utf8_percent_encode(&self.digest(), PATH_SEGMENT).to_string()
    }

    pub fn directory_name(&self) -> String {
        Self::namespace_directory(&self.namespace)
    }

    pub fn namespace_directory(namespace: &str) -> String {
        utf8_percent_encode(Self::normalize_namespace(namespace), PATH_SEGMENT).to_string()
    }

    /// Flat remote key `namespace:key`, or `namespace:epoch:key` once the
    /// namespace has been flushed at least once.
    pub fn remote_key(&self, epoch: u64) -> String {
        let namespace = Self::remote_epoch_key(&self.namespace);
        let key = utf8_percent_encode(&self.key, REMOTE_SEGMENT);
        let composite = match epoch {
            0 => format!("{}:{}", namespace, key),
            _ => format!("{}:{}:{}", namespace, epoch, key),
        };
        if composite.len() <= MAX_REMOTE_KEY_LENGTH {
            composite
        } else {
            format!("#{}", sha1_hex(composite.as_bytes()))
        }
    }

    /// Remote key of the namespace epoch counter. Never contains `:`, so it
    /// cannot clash with an entry key.
    pub fn remote_epoch_key(namespace: &str) -> String {
        utf8_percent_encode(Self::normalize_namespace(namespace), REMOTE_SEGMENT).to_string()
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.key)
    }
}

fn sha1_hex(data: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
