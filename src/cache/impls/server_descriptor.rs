use crate::cache::enums::remote_dialect::RemoteDialect;
use crate::cache::structs::server_descriptor::ServerDescriptor;

impl ServerDescriptor {
    pub fn new(host: &str, port: u16, weight: u32) -> ServerDescriptor {
        ServerDescriptor {
            host: host.to_string(),
            port,
            weight,
        }
    }

    pub fn default_weight() -> u32 {
        1
    }

    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn same_endpoint(&self, host: &str, port: u16) -> bool {
        self.port == port && self.host.eq_ignore_ascii_case(host)
    }

    pub fn url(&self, dialect: RemoteDialect) -> String {
        dialect.server_url(&self.host, self.port)
    }
}
