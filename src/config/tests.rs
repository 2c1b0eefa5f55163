#[cfg(test)]
mod config_tests {
    mod configuration_tests {
        use crate::cache::enums::cache_engine::CacheEngine;
        use crate::cache::enums::remote_dialect::RemoteDialect;
        use crate::config::enums::configuration_error::ConfigurationError;
        use crate::config::structs::configuration::Configuration;

        #[test]
        fn test_init_is_valid() {
            let config = Configuration::init();
            assert_eq!(config.log_level, "info");
            assert_eq!(config.cache.engine, CacheEngine::filesystem);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_init_round_trips_through_toml() {
            let config = Configuration::init();
            let serialized = toml::to_string(&config).unwrap();
            let loaded = Configuration::load(serialized.as_bytes()).unwrap();
            assert_eq!(loaded.cache.path, config.cache.path);
            assert_eq!(loaded.cache.memcache.servers, config.cache.memcache.servers);
        }

        #[test]
        fn test_load_memcache_section() {
            let data = r#"
log_level = "debug"

[cache]
engine = "memcache"
path = "/tmp/unused"

[cache.memcache]
dialect = "memcache"
servers = [
    { host = "10.0.0.1", port = 11211, weight = 2 },
    { host = "10.0.0.2", port = 11212 },
]
"#;
            let config = Configuration::load(data.as_bytes()).unwrap();
            assert_eq!(config.cache.engine, CacheEngine::memcache);
            assert_eq!(config.cache.memcache.dialect, RemoteDialect::memcache);
            assert_eq!(config.cache.memcache.servers.len(), 2);
            assert_eq!(config.cache.memcache.servers[1].weight, 1);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_load_defaults_memcache_section() {
            let data = r#"
log_level = "info"

[cache]
engine = "filesystem"
path = "cache"
memory_limit = "128M"
memory_low = "16M"
"#;
            let config = Configuration::load(data.as_bytes()).unwrap();
            assert_eq!(config.cache.memcache.dialect, RemoteDialect::memcached);
            assert!(config.cache.memcache.servers.is_empty());
            assert_eq!(config.cache.memory_limit.as_deref(), Some("128M"));
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_validate_rejects_unknown_log_level() {
            let mut config = Configuration::init();
            config.log_level = "verbose".to_string();
            assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));
        }

        #[test]
        fn test_validate_rejects_bad_byte_size() {
            let mut config = Configuration::init();
            config.cache.memory_limit = Some("lots".to_string());
            config.cache.memory_low = Some("16M".to_string());
            let error = config.validate().unwrap_err();
            assert!(error.to_string().contains("memory_limit"));
        }

        #[test]
        fn test_validate_requires_both_thresholds() {
            let mut config = Configuration::init();
            config.cache.memory_limit = Some("128M".to_string());
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_validate_memcache_requires_servers() {
            let mut config = Configuration::init();
            config.cache.engine = CacheEngine::memcache;
            config.cache.memcache.servers.clear();
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_load_file_missing() {
            let result = Configuration::load_file("/nonexistent/cms-cache/config.toml");
            let error = result.unwrap_err();
            assert!(matches!(error, ConfigurationError::IOError(_)));
            assert!(std::error::Error::source(&error).is_some());
            assert!(error.to_string().starts_with("unable to read or write the configuration"));
        }
    }

    mod cache_config_tests {
        use crate::config::structs::cache_config::CacheConfig;

        #[test]
        fn test_memory_guard_disabled_by_default() {
            let config = CacheConfig::default();
            assert!(!config.memory_guard().unwrap().is_enabled());
        }

        #[test]
        fn test_memory_guard_armed_with_thresholds() {
            let config = CacheConfig {
                memory_limit: Some("1G".to_string()),
                memory_low: Some("1M".to_string()),
                ..CacheConfig::default()
            };
            assert!(config.memory_guard().unwrap().is_enabled());
        }

        #[test]
        fn test_memory_guard_invalid_threshold() {
            let config = CacheConfig {
                memory_limit: Some("1G".to_string()),
                memory_low: Some("abc".to_string()),
                ..CacheConfig::default()
            };
            assert!(config.memory_guard().is_err());
        }
    }
}
