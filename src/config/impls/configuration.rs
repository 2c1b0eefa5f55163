use std::fs::File;
use std::io::Write;
use regex::Regex;
use crate::cache::enums::cache_engine::CacheEngine;
use crate::cache::enums::remote_dialect::RemoteDialect;
use crate::cache::structs::server_descriptor::ServerDescriptor;
use crate::common::common::log_level_filter;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::memcache_config::MemcacheConfig;

const BYTE_SIZE_PATTERN: &str = r"^\s*-?[0-9]+\s*[kKmMgG]?\s*$";

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            cache: CacheConfig {
                engine: CacheEngine::filesystem,
                path: String::from("cache"),
                memory_limit: None,
                memory_low: None,
                memcache: MemcacheConfig {
                    dialect: RemoteDialect::memcached,
                    servers: vec![ServerDescriptor::new("127.0.0.1", 11211, 1)],
                },
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => Self::load(data.as_slice()).map_err(ConfigurationError::ParseError),
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => file.write_all(data.as_ref()).map_err(ConfigurationError::IOError),
            Err(e) => Err(ConfigurationError::IOError(e)),
        }
    }

    /// Loads and validates `path`. When the file is missing or broken and
    /// `create` is set, a default file is written and an error returned so
    /// the operator can edit it first.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(CustomError::new(&format!("will not create automatically {} file", path)));
                }
                eprintln!("Creating config file..");

                let config_toml = toml::to_string(&Configuration::init())
                    .map_err(|e| CustomError::new(&format!("could not serialize default configuration: {}", e)))?;
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit {} and start again, exiting now...", path);
                        Err(CustomError::new(&format!("create {} file", path)))
                    }
                    Err(e) => {
                        eprintln!("{} file could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {} file", path)))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate().map_err(|e| {
            eprintln!("[VALIDATE] {}", e);
            CustomError::new(&e.to_string())
        })?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if log_level_filter(&self.log_level).is_none() {
            return Err(ConfigurationError::ValidationError(format!(
                "[log_level] Unknown log level '{}'",
                self.log_level
            )));
        }

        let byte_size = Regex::new(BYTE_SIZE_PATTERN)
            .map_err(|e| ConfigurationError::ValidationError(e.to_string()))?;
        let check_map = vec![
            ("[cache] memory_limit", self.cache.memory_limit.as_deref()),
            ("[cache] memory_low", self.cache.memory_low.as_deref()),
        ];
        for (name, value) in check_map {
            if let Some(value) = value
                && !byte_size.is_match(value) {
                    return Err(ConfigurationError::ValidationError(format!(
                        "{} Invalid byte size '{}', expected a number with an optional k/m/g suffix",
                        name, value
                    )));
                }
        }
        if self.cache.memory_limit.is_some() != self.cache.memory_low.is_some() {
            return Err(ConfigurationError::ValidationError(
                "[cache] memory_limit and memory_low must be set together".to_string(),
            ));
        }

        match self.cache.engine {
            CacheEngine::filesystem => {
                if self.cache.path.trim().is_empty() {
                    return Err(ConfigurationError::ValidationError("[cache] path must not be empty".to_string()));
                }
            }
            CacheEngine::memcache => {
                if self.cache.memcache.servers.is_empty() {
                    return Err(ConfigurationError::ValidationError(
                        "[cache.memcache] at least one server is required".to_string(),
                    ));
                }
                for server in &self.cache.memcache.servers {
                    if server.host.trim().is_empty() || server.port == 0 {
                        return Err(ConfigurationError::ValidationError(format!(
                            "[cache.memcache] Invalid server '{}'",
                            server.endpoint()
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}
