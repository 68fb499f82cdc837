//! Flash-transaction records.
//!
//! A flash transaction is a deferred token transfer held by the FTUSDT
//! contract until its execution window opens and enough approvals have been
//! collected. The contract is the sole source of truth; these types mirror
//! its storage for display and for client-side hints only.

use core::fmt;
use std::str::Utf8Error;

use alloy_primitives::{Address, Bytes, U256};
use thiserror::Error;

/// Converts the minutes entered in the create form into the seconds the
/// contract expects.
pub const fn minutes_to_seconds(minutes: u64) -> u64 {
    minutes.saturating_mul(60)
}

/// Lifecycle state of a flash transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashStatus {
    /// Created, neither executed nor cancelled yet.
    Pending,
    /// Funds were released to the recipient.
    Executed,
    /// The transfer was cancelled before execution.
    Cancelled,
}

impl fmt::Display for FlashStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Executed => write!(f, "executed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// The purpose bytes stored on-chain were not valid UTF-8.
#[derive(Debug, Error)]
#[error("purpose bytes are not valid UTF-8: {0}")]
pub struct PurposeDecodeError(#[source] pub Utf8Error);

/// A flash transaction as stored by the FTUSDT contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashTransaction {
    /// Identifier assigned by the contract at creation.
    pub id: U256,
    /// Account that created the transaction and escrowed the funds.
    pub sender: Address,
    /// Account the funds are released to on execution.
    pub recipient: Address,
    /// Transfer amount in raw token units.
    pub amount: U256,
    /// Unix timestamp after which the transaction can no longer execute.
    pub deadline: u64,
    /// Unix timestamp before which the transaction cannot execute.
    pub min_execution_time: u64,
    /// Fee in raw token units.
    pub fee: U256,
    /// Whether the transfer was executed.
    pub executed: bool,
    /// Whether the transfer was cancelled.
    pub cancelled: bool,
    /// Free-text purpose, stored on-chain as UTF-8 bytes.
    pub purpose: Bytes,
    /// Approvals required before execution succeeds.
    pub required_approvals: u64,
    /// Approvals collected so far.
    pub current_approvals: u64,
}

impl FlashTransaction {
    /// Current lifecycle state. The contract never sets both flags; if a
    /// record somehow carries both, `executed` wins.
    pub const fn status(&self) -> FlashStatus {
        if self.executed {
            FlashStatus::Executed
        } else if self.cancelled {
            FlashStatus::Cancelled
        } else {
            FlashStatus::Pending
        }
    }

    /// Whether the execution window has opened at `now` (inclusive at the
    /// exact minimum execution time). Advisory only: the contract enforces
    /// the authoritative check.
    pub const fn is_executable_at(&self, now: u64) -> bool {
        now >= self.min_execution_time
    }

    /// Whether the deadline has passed at `now`.
    pub const fn is_expired_at(&self, now: u64) -> bool {
        now > self.deadline
    }

    /// Decodes the on-chain purpose bytes as UTF-8.
    pub fn purpose_utf8(&self) -> Result<&str, PurposeDecodeError> {
        std::str::from_utf8(&self.purpose).map_err(PurposeDecodeError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending_tx(min_execution_time: u64, deadline: u64) -> FlashTransaction {
        FlashTransaction {
            id: U256::from(1),
            sender: Address::from([0x11; 20]),
            recipient: Address::from([0x22; 20]),
            amount: U256::from(1_000_000u64),
            deadline,
            min_execution_time,
            fee: U256::from(1_000u64),
            executed: false,
            cancelled: false,
            purpose: Bytes::from_static(b"rent"),
            required_approvals: 2,
            current_approvals: 0,
        }
    }

    #[test]
    fn status_reflects_flags() {
        let mut tx = pending_tx(100, 200);
        assert_eq!(tx.status(), FlashStatus::Pending);
        tx.cancelled = true;
        assert_eq!(tx.status(), FlashStatus::Cancelled);
        tx.executed = true;
        assert_eq!(tx.status(), FlashStatus::Executed);
    }

    #[test]
    fn execution_window_is_inclusive_at_min_time() {
        let tx = pending_tx(1_000, 2_000);
        assert!(!tx.is_executable_at(999));
        assert!(tx.is_executable_at(1_000));
        assert!(tx.is_executable_at(1_001));
    }

    #[test]
    fn deadline_is_inclusive() {
        let tx = pending_tx(1_000, 2_000);
        assert!(!tx.is_expired_at(2_000));
        assert!(tx.is_expired_at(2_001));
    }

    #[test]
    fn purpose_decodes_or_errors() {
        let mut tx = pending_tx(100, 200);
        assert_eq!(tx.purpose_utf8().unwrap(), "rent");
        tx.purpose = Bytes::from_static(&[0xff, 0xfe]);
        assert!(tx.purpose_utf8().is_err());
    }

    #[test]
    fn converts_minutes() {
        assert_eq!(minutes_to_seconds(1), 60);
        assert_eq!(minutes_to_seconds(60), 3_600);
        assert_eq!(minutes_to_seconds(u64::MAX), u64::MAX);
    }
}
