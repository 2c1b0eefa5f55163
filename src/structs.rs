use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// Namespace the command operates on.
    #[arg(short, long, global = true, default_value = "default")]
    pub namespace: String,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the value stored under a key.
    Get { key: String },
    /// Store a value, replacing any existing one.
    Set {
        key: String,
        /// JSON value; anything that does not parse is stored as a string.
        value: String,
        #[arg(long, default_value_t = 0)]
        ttl: u64,
    },
    /// Store a value only if the key is not present.
    Create {
        key: String,
        value: String,
        #[arg(long, default_value_t = 0)]
        ttl: u64,
    },
    /// Store a value only if the key is already present.
    Update {
        key: String,
        value: String,
        #[arg(long, default_value_t = 0)]
        ttl: u64,
    },
    Delete { key: String },
    /// Drop every entry in every namespace.
    Flush,
    /// Drop every entry in one namespace.
    FlushNamespace {
        #[arg(value_name = "NAMESPACE")]
        target: String,
    },
    Incr {
        key: String,
        #[arg(long, default_value_t = 1)]
        by: u64,
    },
    Decr {
        key: String,
        #[arg(long, default_value_t = 1)]
        by: u64,
    },
    /// Print engine statistics.
    Stats,
}
