/// Failure while reading, parsing or validating `config.toml`.
#[derive(Debug)]
pub enum ConfigurationError {
    IOError(std::io::Error),
    ParseError(toml::de::Error),
    /// Message names the offending section, e.g. `[cache] memory_low ...`.
    ValidationError(String),
}
