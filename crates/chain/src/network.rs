//! Named network presets with a config-file override.

use std::{fs::File, path::Path};

use serde::{Deserialize, Serialize};
use serde_json::from_reader;
use thiserror::Error;
use tracing::debug;

/// Error type for network configuration loading.
#[derive(Debug, Error)]
pub enum NetworkConfigError {
    /// The name matched no preset and no file at that path exists.
    #[error("unknown network {0:?} (expected a preset name or a path to a config file)")]
    Unknown(String),
    /// Failed to open the configuration file.
    #[error("failed to open network config file: {0}")]
    OpenFile(#[source] std::io::Error),
    /// Failed to parse the configuration file.
    #[error("failed to parse network config: {0}")]
    Parse(#[source] serde_json::Error),
}

/// A target network: JSON-RPC endpoint plus the chain id the wallet session
/// verifies against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Human-readable network name.
    pub name: String,
    /// HTTP JSON-RPC endpoint.
    pub rpc_url: String,
    /// Expected chain id of the node behind `rpc_url`.
    pub chain_id: u64,
}

impl NetworkConfig {
    /// Returns the built-in preset with the given name, if any.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "testnet" => Some(Self {
                name: "testnet".to_string(),
                rpc_url: "https://data-seed-prebsc-1-s1.binance.org:8545".to_string(),
                chain_id: 97,
            }),
            "mainnet" => Some(Self {
                name: "mainnet".to_string(),
                rpc_url: "https://bsc-dataseed.binance.org".to_string(),
                chain_id: 56,
            }),
            _ => None,
        }
    }

    /// Loads a network configuration from a preset name or a JSON file path.
    ///
    /// Presets take precedence; anything that is not a preset name is treated
    /// as a path.
    pub fn load(name_or_path: &str) -> Result<Self, NetworkConfigError> {
        if let Some(preset) = Self::preset(name_or_path) {
            debug!(network = %preset.name, "using network preset");
            return Ok(preset);
        }
        let path = Path::new(name_or_path);
        if !path.exists() {
            return Err(NetworkConfigError::Unknown(name_or_path.to_string()));
        }
        debug!(path = %path.display(), "loading network config from file");
        let file = File::open(path).map_err(NetworkConfigError::OpenFile)?;
        from_reader(file).map_err(NetworkConfigError::Parse)
    }
}
