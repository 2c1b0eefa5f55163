use crate::cache::enums::remote_dialect::RemoteDialect;

pub struct MemcacheClient {
    pub(crate) client: memcache::Client,
    pub(crate) dialect: RemoteDialect,
}
