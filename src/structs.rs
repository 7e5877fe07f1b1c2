use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the config file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// Profile to operate on instead of the default one.
    #[arg(long)]
    pub profile: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// List the configured profiles, marking the default.
    Profiles,
    /// Print the value stored under a key.
    Fetch { key: String },
    /// Tell whether a key is present.
    Contains { key: String },
    /// Store a value; anything that is not valid JSON is stored as a string.
    Save {
        key: String,
        value: String,
        /// Lifetime in seconds, 0 for no expiry.
        #[arg(long)]
        ttl: Option<u64>,
    },
    /// Remove a key.
    Delete { key: String },
    /// Remove every entry of the profile.
    Flush,
}
