use std::iter;
use crate::cache::enums::remote_dialect::RemoteDialect;
use crate::cache::structs::server_descriptor::ServerDescriptor;
use crate::cache::structs::server_registry::ServerRegistry;

impl ServerRegistry {
    pub fn new() -> ServerRegistry {
        ServerRegistry::default()
    }

    /// Registers `server` unless its `(host, port)` is already known.
    pub fn add(&mut self, server: ServerDescriptor) -> bool {
        if self.contains(&server.host, server.port) {
            return false;
        }
        self.servers.push(server);
        true
    }

    /// Returns how many of `servers` were new.
    pub fn add_all(&mut self, servers: &[ServerDescriptor]) -> usize {
        servers.iter().filter(|server| self.add((*server).clone())).count()
    }

    pub fn contains(&self, host: &str, port: u16) -> bool {
        self.servers.iter().any(|server| server.same_endpoint(host, port))
    }

    pub fn servers(&self) -> &[ServerDescriptor] {
        &self.servers
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    /// Client connection list. Each endpoint appears `weight` times (at least
    /// once) so it receives a proportional share of the key space.
    pub fn urls(&self, dialect: RemoteDialect) -> Vec<String> {
        self.servers
            .iter()
            .flat_map(|server| iter::repeat_n(server.url(dialect), server.weight.max(1) as usize))
            .collect()
    }
}
