//! The flash-transaction view-model.

use alloy_primitives::{Address, Bytes, U256};
use futures::future::try_join_all;
use ftusdt_primitives::{
    minutes_to_seconds, validate_flash_transaction, AmountError, FlashValidationError,
    TokenAmount,
};
use thiserror::Error;
use tracing::{debug, info};

use crate::{FlashSource, FlashTxView, RawFlashRequest, ViewError};

/// A flash-transaction submission in user-facing units, as entered in the
/// create form.
#[derive(Debug, Clone)]
pub struct CreateFlashRequest {
    /// Recipient address.
    pub recipient: Address,
    /// Decimal token amount, e.g. `"10.5"`.
    pub amount: String,
    /// Execution window length in minutes.
    pub time_window_minutes: u64,
    /// Minimum delay before execution, in minutes.
    pub min_execution_delay_minutes: u64,
    /// Approvals required before execution succeeds.
    pub required_approvals: u64,
    /// Free-text purpose.
    pub purpose: String,
}

/// Errors from the flash-transaction view-model.
#[derive(Debug, Error)]
pub enum FlashError<E: std::error::Error> {
    /// The request violates a contract limit.
    #[error(transparent)]
    Validation(#[from] FlashValidationError),
    /// The amount string could not be parsed.
    #[error("invalid amount: {0}")]
    Amount(#[from] AmountError),
    /// A fetched record could not be converted for display.
    #[error(transparent)]
    View(#[from] ViewError),
    /// The underlying chain access failed.
    #[error(transparent)]
    Source(E),
}

/// View-model over a [`FlashSource`].
///
/// Holds no chain state: every list call re-fetches, and results reflect the
/// chain at call time only.
#[derive(Debug, Clone)]
pub struct FlashService<S> {
    source: S,
    decimals: u8,
}

impl<S: FlashSource> FlashService<S> {
    /// Creates a view-model formatting amounts at the given token scale.
    pub const fn new(source: S, decimals: u8) -> Self {
        Self { source, decimals }
    }

    /// The underlying chain source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Fetches the account's flash transactions.
    ///
    /// Records are resolved concurrently and returned in the contract's id
    /// order. Any single failure fails the whole list; a corrupt record is
    /// never rendered partially.
    pub async fn list_for_account(
        &self,
        account: Address,
    ) -> Result<Vec<FlashTxView>, FlashError<S::Error>> {
        let ids = self.source.transaction_ids(account).await.map_err(FlashError::Source)?;
        debug!(account = %account, count = ids.len(), "resolving flash transactions");
        let records = try_join_all(ids.iter().map(|id| self.source.transaction(*id)))
            .await
            .map_err(FlashError::Source)?;
        records
            .iter()
            .map(|record| FlashTxView::from_record(record, self.decimals).map_err(Into::into))
            .collect()
    }

    /// Validates and submits a new flash transaction.
    ///
    /// Converts the user-facing units (decimal amount to raw fixed point,
    /// minutes to seconds, purpose text to bytes) before submission.
    pub async fn create(&self, request: &CreateFlashRequest) -> Result<(), FlashError<S::Error>> {
        let amount = TokenAmount::parse(&request.amount, self.decimals)?;
        let time_window_secs = minutes_to_seconds(request.time_window_minutes);
        let min_execution_delay_secs = minutes_to_seconds(request.min_execution_delay_minutes);
        validate_flash_transaction(&amount, time_window_secs, min_execution_delay_secs)?;

        let raw = RawFlashRequest {
            recipient: request.recipient,
            amount: amount.raw(),
            time_window_secs,
            min_execution_delay_secs,
            required_approvals: request.required_approvals,
            purpose: Bytes::from(request.purpose.clone().into_bytes()),
        };
        self.source.create(&raw).await.map_err(FlashError::Source)?;
        info!(recipient = %request.recipient, amount = %request.amount, "flash transaction created");
        Ok(())
    }

    /// Submits an execution call. The contract enforces the execution window
    /// and approval threshold; its rejection is surfaced verbatim.
    pub async fn execute(&self, id: U256) -> Result<(), FlashError<S::Error>> {
        self.source.execute(id).await.map_err(FlashError::Source)?;
        info!(id = %id, "flash transaction executed");
        Ok(())
    }

    /// Submits a cancellation call.
    pub async fn cancel(&self, id: U256) -> Result<(), FlashError<S::Error>> {
        self.source.cancel(id).await.map_err(FlashError::Source)?;
        info!(id = %id, "flash transaction cancelled");
        Ok(())
    }
}
