//! Wallet sessions: a local signer bound to a JSON-RPC provider.
//!
//! A CLI process cannot ask a remote node to switch networks, so the session
//! verifies the node's chain id at connect time and refuses to operate
//! against the wrong chain.

use std::path::PathBuf;

use alloy_network::EthereumWallet;
use alloy_primitives::Address;
use alloy_provider::{DynProvider, Provider, ProviderBuilder};
use alloy_signer_local::{LocalSignerError, PrivateKeySigner};
use alloy_transport::TransportError;
use thiserror::Error;
use tracing::info;

use crate::NetworkConfig;

/// Errors that can occur establishing a wallet session.
#[derive(Debug, Error)]
pub enum WalletError {
    /// The private key hex string was invalid.
    #[error("invalid private key: {0}")]
    InvalidKey(#[from] LocalSignerError),
    /// The key file could not be read.
    #[error("failed to read key file {path}: {source}")]
    KeyFile {
        /// Path the key was loaded from.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The configured RPC endpoint is not a valid URL.
    #[error("invalid rpc url {url:?}: {source}")]
    InvalidRpcUrl {
        /// The offending URL string.
        url: String,
        /// Underlying parse error.
        #[source]
        source: url::ParseError,
    },
    /// The node answered with a different chain id than the configuration
    /// expects.
    #[error("node is on chain {actual}, expected chain {expected}")]
    ChainMismatch {
        /// Chain id from the network configuration.
        expected: u64,
        /// Chain id reported by the node.
        actual: u64,
    },
    /// The chain id query failed.
    #[error("failed to query chain id: {0}")]
    Rpc(#[from] TransportError),
}

/// Where the session's signing key comes from.
///
/// One adapter per key style; both resolve to a local secp256k1 signer.
#[derive(Debug, Clone)]
pub enum KeySource {
    /// A raw hex-encoded private key.
    Raw(String),
    /// A file containing a hex-encoded private key.
    File(PathBuf),
}

impl KeySource {
    fn resolve(&self) -> Result<PrivateKeySigner, WalletError> {
        match self {
            Self::Raw(key) => Ok(key.trim().parse()?),
            Self::File(path) => {
                let key = std::fs::read_to_string(path).map_err(|source| {
                    WalletError::KeyFile { path: path.clone(), source }
                })?;
                Ok(key.trim().parse()?)
            }
        }
    }
}

/// An established connection to a network: signer address, verified chain id,
/// and a provider with the signing wallet attached.
///
/// One session per process; contract bindings built from it must be rebuilt
/// if a [`ChainWatcher`](crate::ChainWatcher) reports the node changing
/// chains.
#[derive(Debug, Clone)]
pub struct WalletSession {
    address: Address,
    chain_id: u64,
    provider: DynProvider,
}

impl WalletSession {
    /// Connects to the network and verifies its chain id.
    ///
    /// Fails when the key material is invalid, the endpoint is unreachable,
    /// or the node reports a chain id other than the configured one.
    pub async fn connect(network: &NetworkConfig, key: KeySource) -> Result<Self, WalletError> {
        let signer = key.resolve()?;
        let address = signer.address();
        let url = network.rpc_url.parse().map_err(|source| WalletError::InvalidRpcUrl {
            url: network.rpc_url.clone(),
            source,
        })?;

        let wallet = EthereumWallet::from(signer);
        let provider = ProviderBuilder::new().wallet(wallet).connect_http(url).erased();

        let actual = provider.get_chain_id().await?;
        if actual != network.chain_id {
            return Err(WalletError::ChainMismatch { expected: network.chain_id, actual });
        }

        info!(network = %network.name, chain_id = actual, account = %address, "wallet connected");
        Ok(Self { address, chain_id: actual, provider })
    }

    /// The connected signer address.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// The verified chain id.
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// The provider with the signing wallet attached.
    pub fn provider(&self) -> DynProvider {
        self.provider.clone()
    }
}
