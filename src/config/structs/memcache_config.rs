use crate::cache::enums::remote_dialect::RemoteDialect;
use crate::cache::structs::server_descriptor::ServerDescriptor;
use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct MemcacheConfig {
    #[serde(default)]
    pub dialect: RemoteDialect,
    #[serde(default)]
    pub servers: Vec<ServerDescriptor>,
}
