//! Display form of a flash-transaction record.

use alloy_primitives::{Address, U256};
use ftusdt_primitives::{AmountError, FlashStatus, FlashTransaction, PurposeDecodeError, TokenAmount};
use thiserror::Error;

/// A record that could not be converted for display. The whole list fails
/// rather than rendering the entry partially.
#[derive(Debug, Error)]
pub enum ViewError {
    /// An amount field could not be formatted.
    #[error("flash transaction {id}: {source}")]
    Amount {
        /// Identifier of the corrupt record.
        id: U256,
        /// Underlying conversion error.
        #[source]
        source: AmountError,
    },
    /// The purpose bytes were not valid UTF-8.
    #[error("flash transaction {id}: {source}")]
    Purpose {
        /// Identifier of the corrupt record.
        id: U256,
        /// Underlying decode error.
        #[source]
        source: PurposeDecodeError,
    },
}

/// A flash transaction converted into display units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashTxView {
    /// Identifier assigned by the contract.
    pub id: U256,
    /// Creating account.
    pub sender: Address,
    /// Receiving account.
    pub recipient: Address,
    /// Amount as a decimal token string.
    pub amount: String,
    /// Fee as a decimal token string.
    pub fee: String,
    /// Unix deadline timestamp.
    pub deadline: u64,
    /// Unix timestamp the execution window opens at.
    pub min_execution_time: u64,
    /// Lifecycle state.
    pub status: FlashStatus,
    /// Decoded purpose text.
    pub purpose: String,
    /// Approvals required for execution.
    pub required_approvals: u64,
    /// Approvals collected so far.
    pub current_approvals: u64,
}

impl FlashTxView {
    /// Converts a raw record, formatting amounts at the given scale and
    /// decoding the purpose bytes.
    pub fn from_record(record: &FlashTransaction, decimals: u8) -> Result<Self, ViewError> {
        let amount = TokenAmount::from_raw(record.amount, decimals)
            .format()
            .map_err(|source| ViewError::Amount { id: record.id, source })?;
        let fee = TokenAmount::from_raw(record.fee, decimals)
            .format()
            .map_err(|source| ViewError::Amount { id: record.id, source })?;
        let purpose = record
            .purpose_utf8()
            .map_err(|source| ViewError::Purpose { id: record.id, source })?
            .to_string();
        Ok(Self {
            id: record.id,
            sender: record.sender,
            recipient: record.recipient,
            amount,
            fee,
            deadline: record.deadline,
            min_execution_time: record.min_execution_time,
            status: record.status(),
            purpose,
            required_approvals: record.required_approvals,
            current_approvals: record.current_approvals,
        })
    }

    /// Whether the execute action should be offered at `now`. Inclusive at
    /// the exact minimum execution time; the contract still has the final
    /// word.
    pub const fn executable_at(&self, now: u64) -> bool {
        matches!(self.status, FlashStatus::Pending) && now >= self.min_execution_time
    }
}
