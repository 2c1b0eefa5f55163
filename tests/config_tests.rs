mod common;

use std::fs;
use cms_cache::cache::enums::cache_engine::CacheEngine;
use cms_cache::config::enums::configuration_error::ConfigurationError;
use cms_cache::config::structs::configuration::Configuration;

#[test]
fn test_config_default_values() {
    let config = Configuration::init();
    assert_eq!(config.log_level, "info");
    assert_eq!(config.cache.engine, CacheEngine::filesystem);
    assert_eq!(config.cache.memcache.servers.len(), 1, "A local memcached should be listed by default");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_toml_loading() {
    let temp_dir = common::create_temp_dir();
    let config_path = temp_dir.path().join("config.toml");
    let config_content = r#"
log_level = "warn"

[cache]
engine = "memcache"
path = "cache"

[cache.memcache]
dialect = "memcached"
servers = [{ host = "127.0.0.1", port = 11211, weight = 3 }]
"#;
    fs::write(&config_path, config_content).unwrap();

    let config = Configuration::load_from_file(config_path.to_str().unwrap(), false).unwrap();
    assert_eq!(config.log_level, "warn");
    assert_eq!(config.cache.engine, CacheEngine::memcache);
    assert_eq!(config.cache.memcache.servers[0].weight, 3);
}

#[test]
fn test_config_invalid_toml() {
    let temp_dir = common::create_temp_dir();
    let config_path = temp_dir.path().join("invalid.toml");
    fs::write(&config_path, "this is not [valid toml").unwrap();

    let result = Configuration::load_file(config_path.to_str().unwrap());
    assert!(matches!(result, Err(ConfigurationError::ParseError(_))));
}

#[test]
fn test_config_validation_failure_is_reported() {
    let temp_dir = common::create_temp_dir();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "log_level = \"loud\"\n\n[cache]\nengine = \"filesystem\"\npath = \"cache\"\n").unwrap();

    assert!(Configuration::load_from_file(config_path.to_str().unwrap(), false).is_err());
}

#[test]
fn test_config_created_on_request() {
    let temp_dir = common::create_temp_dir();
    let config_path = temp_dir.path().join("config.toml");
    let path = config_path.to_str().unwrap();

    assert!(Configuration::load_from_file(path, false).is_err());
    assert!(!config_path.exists(), "Config should not be written without --create-config");

    assert!(Configuration::load_from_file(path, true).is_err());
    assert!(config_path.exists());
    let created = Configuration::load_from_file(path, false).unwrap();
    assert_eq!(created.cache.path, "cache");
}

#[test]
fn test_config_save_and_reload() {
    let temp_dir = common::create_temp_dir();
    let config_path = temp_dir.path().join("saved.toml");
    let mut config = common::create_test_config(&temp_dir);
    config.cache.memory_limit = Some("256M".to_string());
    config.cache.memory_low = Some("32M".to_string());

    Configuration::save_file(config_path.to_str().unwrap(), toml::to_string(&config).unwrap()).unwrap();
    let reloaded = Configuration::load_file(config_path.to_str().unwrap()).unwrap();
    assert_eq!(reloaded.cache.memory_limit.as_deref(), Some("256M"));
    assert!(reloaded.validate().is_ok());
}
