use std::process::ExitCode;
use clap::Parser;
use log::{error, info};
use serde_json::Value;
use cms_cache::cache::errors::CacheError;
use cms_cache::cache::structs::cache_connector::CacheConnector;
use cms_cache::cache::traits::cache_backend::CacheBackend;
use cms_cache::common::common::setup_logging;
use cms_cache::config::structs::configuration::Configuration;
use cms_cache::structs::{Cli, Command};

fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn report(done: bool, what: &str) -> String {
    if done { format!("OK {}", what) } else { format!("NOT {}", what) }
}

fn run(cache: &CacheConnector, namespace: &str, command: Command) -> Result<(String, bool), CacheError> {
    Ok(match command {
        Command::Get { key } => match cache.read(&key, namespace)? {
            Some(value) => (value.to_string(), true),
            None => (format!("MISS {}", key), false),
        },
        Command::Set { key, value, ttl } => {
            let done = cache.set(&key, &parse_value(&value), namespace, ttl)?;
            (report(done, "STORED"), done)
        }
        Command::Create { key, value, ttl } => {
            let done = cache.create(&key, &parse_value(&value), namespace, ttl)?;
            (report(done, "STORED"), done)
        }
        Command::Update { key, value, ttl } => {
            let done = cache.update(&key, &parse_value(&value), namespace, ttl)?;
            (report(done, "STORED"), done)
        }
        Command::Delete { key } => {
            let done = cache.delete(&key, namespace)?;
            (report(done, "DELETED"), done)
        }
        Command::Flush => {
            let done = cache.flush()?;
            (report(done, "FLUSHED"), done)
        }
        Command::FlushNamespace { target } => {
            let done = cache.flush_namespace(&target)?;
            (report(done, "FLUSHED"), done)
        }
        Command::Incr { key, by } => match cache.increment(&key, by, namespace)? {
            Some(value) => (value.to_string(), true),
            None => (format!("MISS {}", key), false),
        },
        Command::Decr { key, by } => match cache.decrement(&key, by, namespace)? {
            Some(value) => (value.to_string(), true),
            None => (format!("MISS {}", key), false),
        },
        Command::Stats => (cache.get_stats()?.to_string(), true),
    })
}

fn main() -> ExitCode
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[CONFIG] {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let cache = match CacheConnector::new(&config.cache) {
        Ok(cache) => cache,
        Err(e) => {
            error!("[Cache] Unable to start the {} engine: {}", config.cache.engine, e);
            return ExitCode::FAILURE;
        }
    };

    match run(&cache, &args.namespace, args.command) {
        Ok((output, true)) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Ok((output, false)) => {
            println!("{}", output);
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("[Cache] {}", e);
            ExitCode::FAILURE
        }
    }
}
