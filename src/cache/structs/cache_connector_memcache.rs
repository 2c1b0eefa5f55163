use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use parking_lot::{Mutex, RwLock};
use crate::cache::enums::remote_dialect::RemoteDialect;
use crate::cache::errors::CacheError;
use crate::cache::structs::server_registry::ServerRegistry;
use crate::cache::traits::remote_client::RemoteClient;

/// Builds a client for the given server URLs.
pub type ClientFactory = dyn Fn(&[String], RemoteDialect) -> Result<Arc<dyn RemoteClient>, CacheError> + Send + Sync;

#[derive(Clone)]
pub struct CacheConnectorMemcache {
    pub(crate) dialect: RemoteDialect,
    pub(crate) registry: Arc<RwLock<ServerRegistry>>,
    pub(crate) client: Arc<Mutex<Option<Arc<dyn RemoteClient>>>>,
    pub(crate) factory: Arc<ClientFactory>,
    pub(crate) known: Arc<RwLock<HashMap<String, HashSet<String>>>>,
}
