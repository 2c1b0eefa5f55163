use crate::cache::enums::cache_engine::CacheEngine;
use crate::cache::structs::cache_connector_filesystem::CacheConnectorFilesystem;
use crate::cache::structs::cache_connector_memcache::CacheConnectorMemcache;

#[derive(Debug, Clone)]
pub struct CacheConnector {
    pub(crate) filesystem: Option<CacheConnectorFilesystem>,
    pub(crate) memcache: Option<CacheConnectorMemcache>,
    pub(crate) engine: CacheEngine,
}
