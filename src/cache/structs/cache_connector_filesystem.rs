use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use parking_lot::RwLock;
use crate::cache::structs::cache_record::MirrorEntry;
use crate::cache::structs::memory_guard::MemoryGuard;
use crate::cache::traits::clock::Clock;

/// Namespace -> key -> mirrored value.
pub type Mirror = HashMap<String, HashMap<String, MirrorEntry>>;

#[derive(Clone)]
pub struct CacheConnectorFilesystem {
    pub(crate) root: PathBuf,
    pub(crate) mirror: Arc<RwLock<Mirror>>,
    pub(crate) guard: MemoryGuard,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) generation: Arc<AtomicU64>,
}
