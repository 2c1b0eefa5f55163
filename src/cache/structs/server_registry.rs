use crate::cache::structs::server_descriptor::ServerDescriptor;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerRegistry {
    pub(crate) servers: Vec<ServerDescriptor>,
}
