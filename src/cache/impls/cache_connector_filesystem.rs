use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::UNIX_EPOCH;
use log::{debug, info, warn};
use parking_lot::RwLock;
use serde_json::Value;
use crate::cache::enums::cache_engine::CacheEngine;
use crate::cache::enums::write_policy::WritePolicy;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_filesystem::CacheConnectorFilesystem;
use crate::cache::structs::cache_key::CacheKey;
use crate::cache::structs::cache_record::{CacheRecord, MirrorEntry};
use crate::cache::structs::cache_stats::CacheStats;
use crate::cache::structs::memory_guard::MemoryGuard;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::cache::traits::clock::Clock;
use crate::common::structs::system_clock::SystemClock;
use crate::config::structs::cache_config::CacheConfig;

pub const HITS_FILE: &str = "cache_hits.txt";
pub const MISSES_FILE: &str = "cache_misses.txt";

impl fmt::Debug for CacheConnectorFilesystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheConnectorFilesystem")
            .field("root", &self.root)
            .field("guard", &self.guard)
            .field("clock", &"<dyn Clock>")
            .finish()
    }
}

impl CacheConnectorFilesystem {
    /// Opens (creating if needed) the cache root. Fails when the directory
    /// cannot be created or is read-only.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| {
            CacheError::DirectoryError(format!("Could not create the file cache directory {}: {}", root.display(), e))
        })?;
        let metadata = fs::metadata(&root)?;
        if !metadata.is_dir() || metadata.permissions().readonly() {
            return Err(CacheError::DirectoryError(format!(
                "File cache directory {} is not writable",
                root.display()
            )));
        }
        Ok(Self {
            root,
            mirror: Arc::new(RwLock::new(Default::default())),
            guard: MemoryGuard::disabled(),
            clock: Arc::new(SystemClock),
            generation: Arc::new(AtomicU64::new(0)),
        })
    }

    pub fn from_config(config: &CacheConfig) -> Result<Self, CacheError> {
        let guard = config.memory_guard()?;
        let connector = Self::new(&config.path)?.with_memory_guard(guard);
        info!(
            "[Filesystem] Cache root at {} (memory guard {})",
            connector.root.display(),
            if connector.guard.is_enabled() { "armed" } else { "off" }
        );
        Ok(connector)
    }

    pub fn with_memory_guard(mut self, guard: MemoryGuard) -> Self {
        self.guard = guard;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entry_path(&self, key: &CacheKey) -> PathBuf {
        self.root.join(key.directory_name()).join(key.file_name())
    }

    fn namespace_path(&self, namespace: &str) -> PathBuf {
        self.root.join(CacheKey::namespace_directory(namespace))
    }

    fn mirrored(&self, key: &CacheKey, now: i64) -> Option<Value> {
        let mirror = self.mirror.read();
        let entry = mirror.get(&key.namespace)?.get(&key.key)?;
        if entry.is_expired(now) {
            return None;
        }
        Some(entry.value().clone())
    }

    fn remember(&self, key: &CacheKey, value: Value, expires_at: Option<i64>) {
        self.mirror
            .write()
            .entry(key.namespace.clone())
            .or_default()
            .insert(key.key.clone(), MirrorEntry::new(value, expires_at));
    }

    fn forget(&self, key: &CacheKey) {
        if let Some(entries) = self.mirror.write().get_mut(&key.namespace) {
            entries.remove(&key.key);
        }
    }

    /// Reads a record; a missing file is `None`, an unparseable one is
    /// logged and also `None` (a writer may be mid-way through it).
    fn load_record(&self, path: &Path) -> Result<Option<CacheRecord>, CacheError> {
        match fs::read(path) {
            Ok(bytes) => Ok(parse_record(path, &bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Opens the entry file under an exclusive lock and applies `policy` to
    /// whatever record it holds before writing, so concurrent writers to one
    /// key are decided one at a time. `Replace` never creates the file.
    fn write_record(
        &self,
        path: &Path,
        key: &CacheKey,
        policy: WritePolicy,
        record: &CacheRecord,
        now: i64,
    ) -> Result<bool, CacheError> {
        let mut file = match OpenOptions::new()
            .read(true)
            .write(true)
            .create(policy != WritePolicy::Replace)
            .truncate(false)
            .open(path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound && policy == WritePolicy::Replace => return Ok(false),
            Err(e) => return Err(e.into()),
        };
        file.lock()?;
        let written = Self::write_locked(&mut file, path, key, policy, record, now);
        file.unlock()?;
        written
    }

    fn write_locked(
        file: &mut File,
        path: &Path,
        key: &CacheKey,
        policy: WritePolicy,
        record: &CacheRecord,
        now: i64,
    ) -> Result<bool, CacheError> {
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        let live = parse_record(path, &bytes).filter(|found| !found.is_expired(now));
        let exists = match policy {
            WritePolicy::Replace => live.as_ref().is_some_and(|found| found.key == key.key),
            _ => live.is_some(),
        };
        if !policy.permits(exists) {
            return Ok(false);
        }
        let payload = serde_json::to_vec(record)?;
        file.set_len(0)?;
        file.seek(SeekFrom::Start(0))?;
        file.write_all(&payload)?;
        file.flush()?;
        Ok(true)
    }

    fn discard(path: &Path) -> Result<(), CacheError> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn remove_tree(path: &Path) -> Result<(), CacheError> {
        match fs::remove_dir_all(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Deletes every file in `dir` older than `ttl` seconds, tombstones
    /// included. Runs before each write to the namespace.
    fn remove_stale(&self, dir: &Path, ttl: u64) -> Result<usize, CacheError> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };
        let now = self.clock.now();
        let max_age = i64::try_from(ttl).unwrap_or(i64::MAX);
        let mut removed = 0;
        for entry in entries {
            let entry = entry?;
            let Ok(metadata) = entry.metadata() else { continue };
            if !metadata.is_file() {
                continue;
            }
            let modified = metadata
                .modified()
                .ok()
                .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
                .map(|age| age.as_secs() as i64)
                .unwrap_or(now);
            if now.saturating_sub(modified) > max_age {
                Self::discard(&entry.path())?;
                removed += 1;
            }
        }
        if removed > 0 {
            debug!("[Filesystem] Swept {} stale file(s) from {}", removed, dir.display());
        }
        Ok(removed)
    }

    fn bump_counter(&self, name: &str) -> Result<(), CacheError> {
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(self.root.join(name))?;
        file.lock()?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        let count = contents.trim().parse::<u64>().unwrap_or(0);
        file.set_len(0)?;
        file.seek(SeekFrom::Start(0))?;
        file.write_all((count + 1).to_string().as_bytes())?;
        file.unlock()?;
        Ok(())
    }

    fn read_counter(&self, name: &str) -> Result<u64, CacheError> {
        let mut file = match File::open(self.root.join(name)) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Ok(contents.trim().parse::<u64>().unwrap_or(0))
    }

    fn record_hit(&self) -> Result<(), CacheError> {
        self.bump_counter(HITS_FILE)
    }

    fn record_miss(&self) -> Result<(), CacheError> {
        self.bump_counter(MISSES_FILE)
    }

    /// Mirror-only arithmetic; the backing file keeps the written value.
    fn adjust(&self, key: &str, namespace: &str, offset: u64, add: bool) -> Result<Option<u64>, CacheError> {
        let cache_key = CacheKey::new(key, namespace);
        if !self.entry_path(&cache_key).is_file() {
            return Ok(None);
        }
        let now = self.clock.now();
        let mut mirror = self.mirror.write();
        let Some(entry) = mirror
            .get_mut(&cache_key.namespace)
            .and_then(|entries| entries.get_mut(&cache_key.key))
            .filter(|entry| !entry.is_expired(now))
        else {
            return Ok(None);
        };
        let current = numeric_value(&entry.value);
        let next = if add {
            current.saturating_add(offset)
        } else {
            current.saturating_sub(offset)
        };
        entry.value = Value::from(next);
        Ok(Some(next))
    }
}

impl CacheBackend for CacheConnectorFilesystem {
    fn store(
        &self,
        key: &str,
        data: &Value,
        namespace: &str,
        ttl: u64,
        policy: WritePolicy,
    ) -> Result<bool, CacheError> {
        let cache_key = CacheKey::new(key, namespace);
        let dir = self.namespace_path(&cache_key.namespace);
        self.remove_stale(&dir, ttl)?;

        let path = dir.join(cache_key.file_name());
        if self.guard.is_low() {
            warn!("[Filesystem] Memory below low-water mark, not caching {}", cache_key);
            Self::discard(&path)?;
            self.forget(&cache_key);
            return Ok(false);
        }

        let now = self.clock.now();
        fs::create_dir_all(&dir)?;
        let expires_at = CacheRecord::expiry_for(now, ttl);
        let record = CacheRecord::new(&cache_key.key, data.clone(), expires_at);
        if !self.write_record(&path, &cache_key, policy, &record, now)? {
            debug!("[Filesystem] {:?} refused for {}", policy, cache_key);
            return Ok(false);
        }
        self.remember(&cache_key, record.value, expires_at);
        debug!("[Filesystem] Stored {} ttl={}", cache_key, ttl);
        Ok(true)
    }

    fn read(&self, key: &str, namespace: &str) -> Result<Option<Value>, CacheError> {
        let cache_key = CacheKey::new(key, namespace);
        let path = self.entry_path(&cache_key);
        if !path.is_file() {
            self.record_miss()?;
            return Ok(None);
        }

        let now = self.clock.now();
        if let Some(value) = self.mirrored(&cache_key, now) {
            self.record_hit()?;
            return Ok(Some(value));
        }

        if self.guard.is_low() {
            warn!("[Filesystem] Memory below low-water mark, treating {} as a miss", cache_key);
            self.record_miss()?;
            return Ok(None);
        }

        let record = match self.load_record(&path)? {
            Some(record) if record.key == cache_key.key => record,
            _ => {
                self.record_miss()?;
                return Ok(None);
            }
        };
        if record.is_expired(now) {
            self.record_miss()?;
            Self::discard(&path)?;
            self.forget(&cache_key);
            debug!("[Filesystem] Evicted expired {}", cache_key);
            return Ok(None);
        }

        self.record_hit()?;
        self.remember(&cache_key, record.value.clone(), record.expires_at);
        Ok(Some(record.value))
    }

    fn delete(&self, key: &str, namespace: &str) -> Result<bool, CacheError> {
        let cache_key = CacheKey::new(key, namespace);
        self.forget(&cache_key);
        let path = self.entry_path(&cache_key);
        if !path.is_file() {
            return Ok(false);
        }
        if self.load_record(&path)?.is_some_and(|record| record.key != cache_key.key) {
            debug!("[Filesystem] {} collides with another key, not deleted", cache_key);
            return Ok(false);
        }
        // Renamed, not unlinked: open descriptors keep reading valid bytes.
        let generation = self.generation.fetch_add(1, Ordering::SeqCst);
        let tombstone = path.with_file_name(format!(
            "{}.{}-{}-{}",
            cache_key.file_name(),
            self.clock.now(),
            std::process::id(),
            generation
        ));
        match fs::rename(&path, &tombstone) {
            Ok(()) => {
                debug!("[Filesystem] Deleted {}", cache_key);
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn flush(&self) -> Result<bool, CacheError> {
        self.mirror.write().clear();
        Self::remove_tree(&self.root)?;
        fs::create_dir_all(&self.root)?;
        info!("[Filesystem] Flushed {}", self.root.display());
        Ok(true)
    }

    fn flush_namespace(&self, namespace: &str) -> Result<bool, CacheError> {
        let namespace = CacheKey::normalize_namespace(namespace);
        self.mirror.write().remove(namespace);
        Self::remove_tree(&self.namespace_path(namespace))?;
        debug!("[Filesystem] Flushed namespace {}", namespace);
        Ok(true)
    }

    fn increment(&self, key: &str, offset: u64, namespace: &str) -> Result<Option<u64>, CacheError> {
        self.adjust(key, namespace, offset, true)
    }

    fn decrement(&self, key: &str, offset: u64, namespace: &str) -> Result<Option<u64>, CacheError> {
        self.adjust(key, namespace, offset, false)
    }

    fn get_stats(&self) -> Result<CacheStats, CacheError> {
        let mut stats = CacheStats::new(
            CacheEngine::filesystem,
            self.read_counter(HITS_FILE)?,
            self.read_counter(MISSES_FILE)?,
        );
        stats.started_at = fs::metadata(&self.root)?
            .modified()
            .ok()
            .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
            .map(|since| since.as_secs() as i64);
        Ok(stats)
    }
}

/// Empty files (just created by a writer) and unparseable ones are `None`.
fn parse_record(path: &Path, bytes: &[u8]) -> Option<CacheRecord> {
    if bytes.is_empty() {
        return None;
    }
    match serde_json::from_slice::<CacheRecord>(bytes) {
        Ok(record) => Some(record),
        Err(e) => {
            warn!("[Filesystem] Unreadable cache record {}: {}", path.display(), e);
            None
        }
    }
}

/// Non-numeric values count as zero, like a fresh counter.
fn numeric_value(value: &Value) -> u64 {
    match value {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| number.as_f64().filter(|n| *n > 0.0).map(|n| n as u64))
            .unwrap_or(0),
        Value::String(text) => text.trim().parse::<u64>().unwrap_or(0),
        _ => 0,
    }
}
