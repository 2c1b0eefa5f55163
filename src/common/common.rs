use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

/// Parses a byte count with an optional `k`, `m` or `g` suffix (case
/// insensitive, powers of 1024). Zero or negative values yield `Some(0)`,
/// which leaves the memory guard disabled.
pub fn parse_byte_size(value: &str) -> Option<u64> {
    let value = value.trim();
    let last = value.chars().last()?;
    let (digits, multiplier) = match last.to_ascii_lowercase() {
        'g' => (&value[..value.len() - 1], 1_073_741_824u64),
        'm' => (&value[..value.len() - 1], 1_048_576u64),
        'k' => (&value[..value.len() - 1], 1_024u64),
        _ => (value, 1u64),
    };
    let amount = digits.trim().parse::<i64>().ok()?;
    if amount <= 0 {
        return Some(0);
    }
    (amount as u64).checked_mul(multiplier)
}

pub fn log_level_filter(level: &str) -> Option<log::LevelFilter> {
    match level {
        "off" => Some(log::LevelFilter::Off),
        "trace" => Some(log::LevelFilter::Trace),
        "debug" => Some(log::LevelFilter::Debug),
        "info" => Some(log::LevelFilter::Info),
        "warn" => Some(log::LevelFilter::Warn),
        "error" => Some(log::LevelFilter::Error),
        _ => None,
    }
}

pub fn setup_logging(config: &Configuration) -> Result<(), CustomError> {
    let level = log_level_filter(config.log_level.as_str()).ok_or_else(|| {
        CustomError::new(&format!("Unknown log level encountered: '{}'", config.log_level))
    })?;

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
        .map_err(|_| CustomError::new("Failed to initialize logging."))?;
    info!("logging initialized.");
    Ok(())
}
