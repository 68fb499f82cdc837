//! The chain-access seam for the flash-transaction view-model.

use alloy_primitives::{Address, Bytes, U256};
use alloy_provider::{DynProvider, PendingTransactionError};
use ftusdt_contracts::Ftusdt;
use ftusdt_primitives::FlashTransaction;
use thiserror::Error;

/// A fully converted flash-transaction submission, in the units the contract
/// expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFlashRequest {
    /// Recipient of the deferred transfer.
    pub recipient: Address,
    /// Amount in raw token units.
    pub amount: U256,
    /// Execution window length in seconds.
    pub time_window_secs: u64,
    /// Minimum delay before execution, in seconds.
    pub min_execution_delay_secs: u64,
    /// Approvals required before execution succeeds.
    pub required_approvals: u64,
    /// Purpose text as UTF-8 bytes.
    pub purpose: Bytes,
}

/// Chain access used by [`FlashService`](crate::FlashService).
///
/// The production implementation talks to the FTUSDT contract; tests swap in
/// a mock.
#[allow(async_fn_in_trait)]
pub trait FlashSource {
    /// Error type surfaced by the underlying transport/contract.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Ordered identifiers of the account's flash transactions.
    async fn transaction_ids(&self, account: Address) -> Result<Vec<U256>, Self::Error>;

    /// Resolves a single flash-transaction record.
    async fn transaction(&self, id: U256) -> Result<FlashTransaction, Self::Error>;

    /// Submits a new flash transaction and waits for inclusion.
    async fn create(&self, request: &RawFlashRequest) -> Result<(), Self::Error>;

    /// Submits an execution call for the given transaction.
    async fn execute(&self, id: U256) -> Result<(), Self::Error>;

    /// Submits a cancellation call for the given transaction.
    async fn cancel(&self, id: U256) -> Result<(), Self::Error>;
}

/// Errors from the contract-backed source.
#[derive(Debug, Error)]
pub enum ContractSourceError {
    /// A call or send failed; the chain's reason is surfaced verbatim.
    #[error("contract call failed: {0}")]
    Call(#[from] alloy_contract::Error),
    /// The transaction was sent but confirmation failed.
    #[error("transaction confirmation failed: {0}")]
    Confirmation(#[from] PendingTransactionError),
}

/// [`FlashSource`] over the deployed FTUSDT contract.
#[derive(Debug, Clone)]
pub struct ContractFlashSource {
    token: Ftusdt::FtusdtInstance<DynProvider>,
}

impl ContractFlashSource {
    /// Wraps a token binding obtained from the gateway.
    pub const fn new(token: Ftusdt::FtusdtInstance<DynProvider>) -> Self {
        Self { token }
    }
}

impl FlashSource for ContractFlashSource {
    type Error = ContractSourceError;

    async fn transaction_ids(&self, account: Address) -> Result<Vec<U256>, Self::Error> {
        Ok(self.token._userFlashTransactions(account).call().await?)
    }

    async fn transaction(&self, id: U256) -> Result<FlashTransaction, Self::Error> {
        let record = self.token._flashTransactions(id).call().await?;
        Ok(FlashTransaction {
            id,
            sender: record.sender,
            recipient: record.recipient,
            amount: record.amount,
            // Timestamps and counters fit in u64 for any record the contract
            // can produce; saturate rather than trust the node blindly.
            deadline: record.deadline.saturating_to(),
            min_execution_time: record.minExecutionTime.saturating_to(),
            fee: record.fee,
            executed: record.executed,
            cancelled: record.cancelled,
            purpose: record.purpose,
            required_approvals: record.requiredApprovals.saturating_to(),
            current_approvals: record.currentApprovals.saturating_to(),
        })
    }

    async fn create(&self, request: &RawFlashRequest) -> Result<(), Self::Error> {
        self.token
            .createFlashTransaction(
                request.recipient,
                request.amount,
                U256::from(request.time_window_secs),
                U256::from(request.min_execution_delay_secs),
                U256::from(request.required_approvals),
                request.purpose.clone(),
            )
            .send()
            .await?
            .get_receipt()
            .await?;
        Ok(())
    }

    async fn execute(&self, id: U256) -> Result<(), Self::Error> {
        self.token.executeFlashTransaction(id).send().await?.get_receipt().await?;
        Ok(())
    }

    async fn cancel(&self, id: U256) -> Result<(), Self::Error> {
        self.token.cancelFlashTransaction(id).send().await?.get_receipt().await?;
        Ok(())
    }
}
