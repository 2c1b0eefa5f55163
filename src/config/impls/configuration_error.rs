use std::fmt;
use crate::config::enums::configuration_error::ConfigurationError;

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::IOError(e) => write!(f, "unable to read or write the configuration: {}", e),
            ConfigurationError::ParseError(e) => write!(f, "invalid TOML: {}", e),
            ConfigurationError::ValidationError(e) => f.write_str(e),
        }
    }
}

impl std::error::Error for ConfigurationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigurationError::IOError(e) => Some(e),
            ConfigurationError::ParseError(e) => Some(e),
            ConfigurationError::ValidationError(_) => None,
        }
    }
}
