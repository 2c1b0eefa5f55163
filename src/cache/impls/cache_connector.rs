use log::info;
use serde_json::Value;
use crate::cache::enums::cache_engine::CacheEngine;
use crate::cache::enums::write_policy::WritePolicy;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector::CacheConnector;
use crate::cache::structs::cache_connector_filesystem::CacheConnectorFilesystem;
use crate::cache::structs::cache_connector_memcache::CacheConnectorMemcache;
use crate::cache::structs::cache_stats::CacheStats;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::config::structs::cache_config::CacheConfig;

impl CacheConnector {
    pub fn new(config: &CacheConfig) -> Result<CacheConnector, CacheError> {
        match config.engine {
            CacheEngine::filesystem => {
                let filesystem = CacheConnectorFilesystem::from_config(config)?;
                info!("[Cache] Using filesystem cache at {}", config.path);
                Ok(CacheConnector {
                    filesystem: Some(filesystem),
                    memcache: None,
                    engine: CacheEngine::filesystem,
                })
            }
            CacheEngine::memcache => {
                let memcache = CacheConnectorMemcache::connect(&config.memcache)?;
                info!("[Cache] Using memcache cache ({} server(s))", config.memcache.servers.len());
                Ok(CacheConnector {
                    filesystem: None,
                    memcache: Some(memcache),
                    engine: CacheEngine::memcache,
                })
            }
        }
    }

    pub fn from_filesystem(filesystem: CacheConnectorFilesystem) -> CacheConnector {
        CacheConnector {
            filesystem: Some(filesystem),
            memcache: None,
            engine: CacheEngine::filesystem,
        }
    }

    pub fn from_memcache(memcache: CacheConnectorMemcache) -> CacheConnector {
        CacheConnector {
            filesystem: None,
            memcache: Some(memcache),
            engine: CacheEngine::memcache,
        }
    }

    pub fn engine(&self) -> CacheEngine {
        self.engine
    }

    /// The Memcache engine, for server registration.
    pub fn memcache(&self) -> Option<&CacheConnectorMemcache> {
        self.memcache.as_ref()
    }

    pub fn backend(&self) -> Result<&dyn CacheBackend, CacheError> {
        match self.engine {
            CacheEngine::filesystem => self
                .filesystem
                .as_ref()
                .map(|f| f as &dyn CacheBackend)
                .ok_or_else(|| CacheError::ConnectionError("Filesystem cache not initialised".to_string())),
            CacheEngine::memcache => self
                .memcache
                .as_ref()
                .map(|m| m as &dyn CacheBackend)
                .ok_or_else(|| CacheError::ConnectionError("Memcache not connected".to_string())),
        }
    }
}

impl CacheBackend for CacheConnector {
    fn store(
        &self,
        key: &str,
        data: &Value,
        namespace: &str,
        ttl: u64,
        policy: WritePolicy,
    ) -> Result<bool, CacheError> {
        self.backend()?.store(key, data, namespace, ttl, policy)
    }

    fn read(&self, key: &str, namespace: &str) -> Result<Option<Value>, CacheError> {
        self.backend()?.read(key, namespace)
    }

    fn delete(&self, key: &str, namespace: &str) -> Result<bool, CacheError> {
        self.backend()?.delete(key, namespace)
    }

    fn flush(&self) -> Result<bool, CacheError> {
        self.backend()?.flush()
    }

    fn flush_namespace(&self, namespace: &str) -> Result<bool, CacheError> {
        self.backend()?.flush_namespace(namespace)
    }

    fn increment(&self, key: &str, offset: u64, namespace: &str) -> Result<Option<u64>, CacheError> {
        self.backend()?.increment(key, offset, namespace)
    }

    fn decrement(&self, key: &str, offset: u64, namespace: &str) -> Result<Option<u64>, CacheError> {
        self.backend()?.decrement(key, offset, namespace)
    }

    fn get_stats(&self) -> Result<CacheStats, CacheError> {
        self.backend()?.get_stats()
    }
}
