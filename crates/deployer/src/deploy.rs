//! The deployment seam: one create transaction per contract.

use alloy_network::TransactionBuilder;
use alloy_primitives::{Address, Bytes};
use alloy_provider::{DynProvider, PendingTransactionError, Provider};
use alloy_rpc_types_eth::TransactionRequest;
use alloy_transport::TransportError;
use thiserror::Error;
use tracing::info;

/// Deploys a single contract from its init code.
///
/// The production implementation sends a create transaction; tests swap in a
/// scripted mock.
#[allow(async_fn_in_trait)]
pub trait Deploy {
    /// Error type surfaced by a failed deployment step.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Deploys `init_code` and returns the mined contract address. `name` is
    /// for operator logs only.
    async fn deploy(&self, name: &str, init_code: Bytes) -> Result<Address, Self::Error>;
}

/// Errors deploying through a provider.
#[derive(Debug, Error)]
pub enum ProviderDeployError {
    /// The create transaction could not be sent.
    #[error("failed to send deployment transaction: {0}")]
    Send(#[from] TransportError),
    /// The transaction was sent but never confirmed.
    #[error("deployment confirmation failed: {0}")]
    Confirmation(#[from] PendingTransactionError),
    /// The receipt carries no contract address, so the deployment reverted.
    #[error("deployment of {0} reverted: receipt carries no contract address")]
    Reverted(String),
}

/// [`Deploy`] over a wallet-attached provider.
#[derive(Debug, Clone)]
pub struct ProviderDeployer {
    provider: DynProvider,
}

impl ProviderDeployer {
    /// Creates a deployer sending from the provider's wallet.
    pub const fn new(provider: DynProvider) -> Self {
        Self { provider }
    }
}

impl Deploy for ProviderDeployer {
    type Error = ProviderDeployError;

    async fn deploy(&self, name: &str, init_code: Bytes) -> Result<Address, Self::Error> {
        info!(contract = name, code_len = init_code.len(), "deploying contract");
        let tx = TransactionRequest::default().with_deploy_code(init_code);
        let receipt = self.provider.send_transaction(tx).await?.get_receipt().await?;
        let address = receipt
            .contract_address
            .ok_or_else(|| ProviderDeployError::Reverted(name.to_string()))?;
        info!(contract = name, address = %address, "contract deployed");
        Ok(address)
    }
}
