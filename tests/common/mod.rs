#![allow(dead_code)]
use std::sync::Arc;
use tempfile::TempDir;
use cms_cache::cache::structs::cache_connector_filesystem::CacheConnectorFilesystem;
use cms_cache::cache::structs::memory_guard::MemoryGuard;
use cms_cache::cache::traits::memory_probe::MemoryProbe;
use cms_cache::common::structs::manual_clock::ManualClock;
use cms_cache::config::structs::configuration::Configuration;

/// Probe that always reports the same usage.
pub struct FixedMemory(pub u64);

impl MemoryProbe for FixedMemory {
    fn current_usage(&self) -> u64 {
        self.0
    }
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn create_test_config(dir: &TempDir) -> Configuration {
    let mut config = Configuration::init();
    config.cache.path = dir.path().join("cache").to_string_lossy().to_string();
    config
}

pub fn create_test_cache(dir: &TempDir) -> (CacheConnectorFilesystem, ManualClock) {
    let clock = ManualClock::new();
    let cache = CacheConnectorFilesystem::new(dir.path().join("cache"))
        .expect("Failed to open cache root")
        .with_clock(Arc::new(clock.clone()));
    (cache, clock)
}

pub fn low_memory_guard() -> MemoryGuard {
    MemoryGuard::new(1_000, 100, Arc::new(FixedMemory(950)))
}
