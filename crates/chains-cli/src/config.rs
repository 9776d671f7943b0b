//! Checker configuration.
//!
//! Defaults come from environment variables; command-line flags override
//! them in `check`.

use std::path::PathBuf;

/// Default location of chain records, relative to the repository root.
pub const DEFAULT_DATA_DIR: &str = "_data/chains";

/// Settings for a checker run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    /// Directory tree holding chain records.
    pub data_dir: PathBuf,
    /// Probe each record's RPC endpoints after static checks pass.
    pub rpc_connect: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            rpc_connect: false,
        }
    }
}

impl CheckerConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `CHAINS_DATA_DIR` (default: `_data/chains`)
    /// - `CHAINS_RPC_CONNECT` (default: `false`; accepts `1/0/true/false/yes/no`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = lookup("CHAINS_DATA_DIR")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let rpc_connect = match lookup("CHAINS_RPC_CONNECT") {
            Some(raw) => parse_bool("CHAINS_RPC_CONNECT", &raw)?,
            None => false,
        };

        Ok(Self {
            data_dir,
            rpc_connect,
        })
    }
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "" | "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool(var.to_string(), raw.to_string())),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid boolean for {0}: \"{1}\" (expected 1/0/true/false/yes/no)")]
    InvalidBool(String, String),
}
