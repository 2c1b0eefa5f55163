use std::collections::{HashMap, HashSet};
use std::fmt;
use chrono::{Local, TimeZone};
use crate::cache::enums::cache_engine::CacheEngine;
use crate::cache::enums::remote_dialect::RemoteDialect;
use crate::cache::structs::cache_stats::CacheStats;
use crate::cache::traits::remote_client::ServerStats;

impl CacheStats {
    pub fn new(engine: CacheEngine, hits: u64, misses: u64) -> CacheStats {
        CacheStats {
            engine,
            hits,
            misses,
            started_at: None,
            uptime_seconds: None,
            bytes_used: None,
            bytes_limit: None,
        }
    }

    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Shapes the raw `stats` reply. The `memcached` dialect reports the
    /// first server only; the `memcache` dialect sums counters over all
    /// distinct servers and keeps the longest uptime.
    pub fn from_server_stats(dialect: RemoteDialect, stats: &ServerStats) -> Option<CacheStats> {
        // Weighted servers appear once per connection; count each once.
        let mut seen = HashSet::new();
        let distinct = stats.iter().filter(|(server, _)| seen.insert(server.as_str()));
        let selected: Vec<&HashMap<String, String>> = match dialect {
            RemoteDialect::memcached => distinct.take(1).map(|(_, s)| s).collect(),
            RemoteDialect::memcache => distinct.map(|(_, s)| s).collect(),
        };
        if selected.is_empty() {
            return None;
        }
        let values = |name: &str| -> Vec<u64> {
            selected
                .iter()
                .filter_map(|server| server.get(name)?.trim().parse::<u64>().ok())
                .collect()
        };
        let sum = |name: &str| -> Option<u64> {
            let found = values(name);
            if found.is_empty() { None } else { Some(found.iter().sum()) }
        };
        Some(CacheStats {
            engine: CacheEngine::memcache,
            hits: sum("get_hits").unwrap_or(0),
            misses: sum("get_misses").unwrap_or(0),
            started_at: None,
            uptime_seconds: values("uptime").into_iter().max(),
            bytes_used: sum("bytes"),
            bytes_limit: sum("limit_maxbytes"),
        })
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cache Engine: {}", self.engine)?;
        writeln!(f, "Cache Hits: {}", self.hits)?;
        write!(f, "Cache Misses: {}", self.misses)?;
        if let Some(started) = self.started_at.and_then(|ts| Local.timestamp_opt(ts, 0).single()) {
            write!(f, "\nUptime: {}", started.format("%B %d %Y %I:%M %p"))?;
        } else if let Some(uptime) = self.uptime_seconds {
            write!(f, "\nUptime: {} seconds", uptime)?;
        }
        if let Some(bytes) = self.bytes_used {
            write!(f, "\nMemory Usage: {}", bytes)?;
        }
        if let Some(bytes) = self.bytes_limit {
            write!(f, "\nMemory Available: {}", bytes)?;
        }
        Ok(())
    }
}
