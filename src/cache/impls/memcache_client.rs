use std::fmt;
use log::debug;
use memcache::{CommandError, MemcacheError};
use crate::cache::enums::remote_dialect::RemoteDialect;
use crate::cache::errors::CacheError;
use crate::cache::structs::memcache_client::MemcacheClient;
use crate::cache::traits::remote_client::{RemoteClient, ServerStats};

impl fmt::Debug for MemcacheClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemcacheClient")
            .field("client", &"<memcache::Client>")
            .field("dialect", &self.dialect)
            .finish()
    }
}

impl MemcacheClient {
    pub fn connect(urls: Vec<String>, dialect: RemoteDialect) -> Result<Self, CacheError> {
        let count = urls.len();
        let client = memcache::Client::connect(urls)
            .map_err(|e| CacheError::ConnectionError(format!("Failed to connect to Memcache: {}", e)))?;
        debug!("[Memcache] Client built over {} connection(s) using the {} protocol", count, dialect.protocol());
        Ok(Self { client, dialect })
    }

    fn is_refusal(error: &MemcacheError) -> bool {
        matches!(
            error,
            MemcacheError::CommandError(CommandError::KeyExists) | MemcacheError::CommandError(CommandError::KeyNotFound)
        )
    }

    fn is_missing(error: &MemcacheError) -> bool {
        matches!(error, MemcacheError::CommandError(CommandError::KeyNotFound))
    }
}

impl RemoteClient for MemcacheClient {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.client.get::<String>(key)?)
    }

    fn set(&self, key: &str, value: &str, expiration: u32) -> Result<(), CacheError> {
        self.client.set(key, value, expiration)?;
        Ok(())
    }

    fn add(&self, key: &str, value: &str, expiration: u32) -> Result<bool, CacheError> {
        // The ASCII protocol answers NOT_STORED silently; look first.
        if !self.dialect.atomic_conditional_writes() && self.client.get::<String>(key)?.is_some() {
            return Ok(false);
        }
        match self.client.add(key, value, expiration) {
            Ok(()) => Ok(true),
            Err(e) if Self::is_refusal(&e) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn replace(&self, key: &str, value: &str, expiration: u32) -> Result<bool, CacheError> {
        if !self.dialect.atomic_conditional_writes() && self.client.get::<String>(key)?.is_none() {
            return Ok(false);
        }
        match self.client.replace(key, value, expiration) {
            Ok(()) => Ok(true),
            Err(e) if Self::is_refusal(&e) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn delete(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.client.delete(key)?)
    }

    fn increment(&self, key: &str, amount: u64) -> Result<Option<u64>, CacheError> {
        match self.client.increment(key, amount) {
            Ok(value) => Ok(Some(value)),
            Err(e) if Self::is_missing(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn decrement(&self, key: &str, amount: u64) -> Result<Option<u64>, CacheError> {
        match self.client.decrement(key, amount) {
            Ok(value) => Ok(Some(value)),
            Err(e) if Self::is_missing(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn flush(&self) -> Result<(), CacheError> {
        self.client.flush()?;
        Ok(())
    }

    fn stats(&self) -> Result<ServerStats, CacheError> {
        Ok(self.client.stats()?)
    }
}
