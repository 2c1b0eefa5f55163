use crate::cache::enums::remote_dialect::RemoteDialect;
use std::fmt;

impl fmt::Display for RemoteDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteDialect::memcache => write!(f, "memcache"),
            RemoteDialect::memcached => write!(f, "memcached"),
        }
    }
}

impl RemoteDialect {
    pub fn protocol(&self) -> &'static str {
        match self {
            RemoteDialect::memcache => "ascii",
            RemoteDialect::memcached => "binary",
        }
    }

    /// Whether `add`/`replace` refusals are reported by the server itself.
    pub fn atomic_conditional_writes(&self) -> bool {
        matches!(self, RemoteDialect::memcached)
    }

    pub fn server_url(&self, host: &str, port: u16) -> String {
        let host = if host.contains(':') && !host.starts_with('[') {
            format!("[{}]", host)
        } else {
            host.to_string()
        };
        match self {
            RemoteDialect::memcache => format!("memcache://{}:{}?protocol=ascii", host, port),
            RemoteDialect::memcached => format!("memcache://{}:{}", host, port),
        }
    }
}
