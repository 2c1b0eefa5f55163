use std::fmt;
use std::sync::Arc;
use chrono::Utc;
use log::{debug, info};
use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use crate::cache::enums::remote_dialect::RemoteDialect;
use crate::cache::enums::write_policy::WritePolicy;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_memcache::{CacheConnectorMemcache, ClientFactory};
use crate::cache::structs::cache_key::CacheKey;
use crate::cache::structs::cache_stats::CacheStats;
use crate::cache::structs::memcache_client::MemcacheClient;
use crate::cache::structs::server_descriptor::ServerDescriptor;
use crate::cache::structs::server_registry::ServerRegistry;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::cache::traits::remote_client::RemoteClient;
use crate::config::structs::memcache_config::MemcacheConfig;

/// Amount a namespace epoch moves on every `flush_namespace`.
pub const NAMESPACE_EPOCH_STEP: u64 = 10;

/// Memcache reads expirations above 30 days as absolute unix timestamps.
pub const MAX_RELATIVE_EXPIRATION: u64 = 60 * 60 * 24 * 30;

impl fmt::Debug for CacheConnectorMemcache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheConnectorMemcache")
            .field("dialect", &self.dialect)
            .field("servers", &self.registry.read().servers())
            .field("client", &"<dyn RemoteClient>")
            .finish()
    }
}

impl CacheConnectorMemcache {
    /// Registers the configured servers and connects right away, so a
    /// missing or unreachable service fails at startup.
    pub fn connect(config: &MemcacheConfig) -> Result<Self, CacheError> {
        let connector = Self::with_factory(
            config.dialect,
            Arc::new(|urls: &[String], dialect: RemoteDialect| -> Result<Arc<dyn RemoteClient>, CacheError> {
                let client = MemcacheClient::connect(urls.to_vec(), dialect)?;
                Ok(Arc::new(client) as Arc<dyn RemoteClient>)
            }),
        );
        connector.add_server(&config.servers);
        if !connector.registry.read().is_empty() {
            connector.client()?;
            info!("[Memcache] Connected ({} dialect) to {}", config.dialect, connector.endpoints().join(", "));
        }
        Ok(connector)
    }

    pub fn with_factory(dialect: RemoteDialect, factory: Arc<ClientFactory>) -> Self {
        Self {
            dialect,
            registry: Arc::new(RwLock::new(ServerRegistry::new())),
            client: Arc::new(Mutex::new(None)),
            factory,
            known: Arc::new(RwLock::new(Default::default())),
        }
    }

    /// Uses `client` for every connection, whatever the registry holds.
    pub fn with_client(dialect: RemoteDialect, client: Arc<dyn RemoteClient>) -> Self {
        let connector = Self::with_factory(dialect, {
            let client = client.clone();
            Arc::new(move |_: &[String], _: RemoteDialect| -> Result<Arc<dyn RemoteClient>, CacheError> {
                Ok(client.clone())
            })
        });
        *connector.client.lock() = Some(client);
        connector
    }

    pub fn dialect(&self) -> RemoteDialect {
        self.dialect
    }

    /// Registers endpoints, skipping any `(host, port)` already known.
    /// Returns how many were added; the client is rebuilt on next use.
    pub fn add_server(&self, servers: &[ServerDescriptor]) -> usize {
        let added = self.registry.write().add_all(servers);
        if added > 0 {
            *self.client.lock() = None;
            debug!("[Memcache] Registered {} new server(s)", added);
        }
        added
    }

    pub fn servers(&self) -> Vec<ServerDescriptor> {
        self.registry.read().servers().to_vec()
    }

    pub fn endpoints(&self) -> Vec<String> {
        self.registry.read().servers().iter().map(ServerDescriptor::endpoint).collect()
    }

    fn client(&self) -> Result<Arc<dyn RemoteClient>, CacheError> {
        let mut slot = self.client.lock();
        if let Some(client) = slot.as_ref() {
            return Ok(client.clone());
        }
        let urls = {
            let registry = self.registry.read();
            if registry.is_empty() {
                return Err(CacheError::ConnectionError("No memcache servers registered".to_string()));
            }
            registry.urls(self.dialect)
        };
        let client = (self.factory)(&urls, self.dialect)?;
        *slot = Some(client.clone());
        Ok(client)
    }

    fn namespace_epoch(client: &dyn RemoteClient, namespace: &str) -> Result<u64, CacheError> {
        Ok(client
            .get(&CacheKey::remote_epoch_key(namespace))?
            .and_then(|epoch| epoch.trim().parse::<u64>().ok())
            .unwrap_or(0))
    }

    fn remote_key(client: &dyn RemoteClient, key: &CacheKey) -> Result<String, CacheError> {
        Ok(key.remote_key(Self::namespace_epoch(client, &key.namespace)?))
    }

    pub fn expiration(ttl: u64) -> u32 {
        if ttl > MAX_RELATIVE_EXPIRATION {
            let absolute = Utc::now().timestamp().max(0) as u64 + ttl;
            u32::try_from(absolute).unwrap_or(u32::MAX)
        } else {
            ttl as u32
        }
    }

    fn is_known(&self, key: &CacheKey) -> bool {
        self.known
            .read()
            .get(&key.namespace)
            .is_some_and(|keys| keys.contains(&key.key))
    }

    fn remember(&self, key: &CacheKey) {
        self.known
            .write()
            .entry(key.namespace.clone())
            .or_default()
            .insert(key.key.clone());
    }

    fn forget(&self, key: &CacheKey) {
        if let Some(keys) = self.known.write().get_mut(&key.namespace) {
            keys.remove(&key.key);
        }
    }
}

impl CacheBackend for CacheConnectorMemcache {
    fn store(
        &self,
        key: &str,
        data: &Value,
        namespace: &str,
        ttl: u64,
        policy: WritePolicy,
    ) -> Result<bool, CacheError> {
        let cache_key = CacheKey::new(key, namespace);
        if policy == WritePolicy::Insert && self.is_known(&cache_key) {
            debug!("[Memcache] Insert refused for known key {}", cache_key);
            return Ok(false);
        }
        let client = self.client()?;
        let remote_key = Self::remote_key(client.as_ref(), &cache_key)?;
        let payload = serde_json::to_string(data)?;
        let expiration = Self::expiration(ttl);
        let stored = match policy {
            WritePolicy::Insert => client.add(&remote_key, &payload, expiration)?,
            WritePolicy::Replace => client.replace(&remote_key, &payload, expiration)?,
            WritePolicy::Upsert => {
                client.set(&remote_key, &payload, expiration)?;
                true
            }
        };
        if stored {
            self.remember(&cache_key);
        }
        debug!("[Memcache] {:?} {} ttl={} stored={}", policy, cache_key, ttl, stored);
        Ok(stored)
    }

    fn read(&self, key: &str, namespace: &str) -> Result<Option<Value>, CacheError> {
        let cache_key = CacheKey::new(key, namespace);
        let client = self.client()?;
        let remote_key = Self::remote_key(client.as_ref(), &cache_key)?;
        match client.get(&remote_key)? {
            Some(payload) => {
                self.remember(&cache_key);
                Ok(Some(serde_json::from_str(&payload)?))
            }
            None => {
                self.forget(&cache_key);
                Ok(None)
            }
        }
    }

    fn delete(&self, key: &str, namespace: &str) -> Result<bool, CacheError> {
        let cache_key = CacheKey::new(key, namespace);
        self.forget(&cache_key);
        let client = self.client()?;
        let remote_key = Self::remote_key(client.as_ref(), &cache_key)?;
        let deleted = client.delete(&remote_key)?;
        debug!("[Memcache] Deleted {} existed={}", cache_key, deleted);
        Ok(deleted)
    }

    fn flush(&self) -> Result<bool, CacheError> {
        let client = self.client()?;
        client.flush()?;
        self.known.write().clear();
        info!("[Memcache] Flushed all servers");
        Ok(true)
    }

    /// Moves the namespace epoch forward; keys built under the old epoch are
    /// no longer addressed and age out on the server.
    fn flush_namespace(&self, namespace: &str) -> Result<bool, CacheError> {
        let namespace = CacheKey::normalize_namespace(namespace);
        let client = self.client()?;
        let epoch_key = CacheKey::remote_epoch_key(namespace);
        let epoch = match client.increment(&epoch_key, NAMESPACE_EPOCH_STEP)? {
            Some(epoch) => epoch,
            // `add` so that two processes seeding at once cannot both land on
            // the first epoch; the loser bumps the winner's value instead.
            None if client.add(&epoch_key, &NAMESPACE_EPOCH_STEP.to_string(), 0)? => NAMESPACE_EPOCH_STEP,
            None => client.increment(&epoch_key, NAMESPACE_EPOCH_STEP)?.ok_or_else(|| {
                CacheError::OperationError(format!("Namespace epoch for {} vanished while flushing", namespace))
            })?,
        };
        self.known.write().remove(namespace);
        debug!("[Memcache] Namespace {} moved to epoch {}", namespace, epoch);
        Ok(true)
    }

    fn increment(&self, key: &str, offset: u64, namespace: &str) -> Result<Option<u64>, CacheError> {
        let cache_key = CacheKey::new(key, namespace);
        let client = self.client()?;
        let remote_key = Self::remote_key(client.as_ref(), &cache_key)?;
        client.increment(&remote_key, offset)
    }

    fn decrement(&self, key: &str, offset: u64, namespace: &str) -> Result<Option<u64>, CacheError> {
        let cache_key = CacheKey::new(key, namespace);
        let client = self.client()?;
        let remote_key = Self::remote_key(client.as_ref(), &cache_key)?;
        client.decrement(&remote_key, offset)
    }

    fn get_stats(&self) -> Result<CacheStats, CacheError> {
        let client = self.client()?;
        let stats = client.stats()?;
        CacheStats::from_server_stats(self.dialect, &stats)
            .ok_or_else(|| CacheError::OperationError("No statistics reported by memcache".to_string()))
    }
}
