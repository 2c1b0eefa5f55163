mod common;

use serde_json::json;
use cms_cache::cache::enums::cache_engine::CacheEngine;
use cms_cache::cache::errors::CacheError;
use cms_cache::cache::structs::cache_connector::CacheConnector;
use cms_cache::cache::structs::cache_connector_filesystem::CacheConnectorFilesystem;
use cms_cache::cache::traits::cache_backend::CacheBackend;

#[test]
fn test_connector_dispatches_to_filesystem() {
    let dir = common::create_temp_dir();
    let config = common::create_test_config(&dir);
    let cache = CacheConnector::new(&config.cache).unwrap();

    assert_eq!(cache.engine(), CacheEngine::filesystem);
    assert!(cache.create("k", &json!("v"), "", 60).unwrap());
    assert!(!cache.create("k", &json!("w"), "default", 60).unwrap());
    assert!(cache.update("k", &json!("w"), "", 60).unwrap());
    assert_eq!(cache.read("k", "").unwrap(), Some(json!("w")));
    assert!(cache.delete("k", "").unwrap());
    assert_eq!(cache.read("k", "").unwrap(), None);
}

#[test]
fn test_connector_from_filesystem() {
    let dir = common::create_temp_dir();
    let filesystem = CacheConnectorFilesystem::new(dir.path().join("cache")).unwrap();
    let cache = CacheConnector::from_filesystem(filesystem);
    cache.set("n", &json!(1), "ns", 60).unwrap();
    assert_eq!(cache.increment("n", 2, "ns").unwrap(), Some(3));
}

#[test]
fn test_filesystem_rejects_unusable_root() {
    let dir = common::create_temp_dir();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let mut config = common::create_test_config(&dir);
    config.cache.path = blocker.join("cache").to_string_lossy().to_string();
    assert!(matches!(CacheConnector::new(&config.cache), Err(CacheError::DirectoryError(_))));
}

#[test]
fn test_invalid_memory_threshold_is_a_configuration_error() {
    let dir = common::create_temp_dir();
    let mut config = common::create_test_config(&dir);
    config.cache.memory_limit = Some("1G".to_string());
    config.cache.memory_low = Some("plenty".to_string());
    assert!(matches!(CacheConnector::new(&config.cache), Err(CacheError::ConfigurationError(_))));
}
