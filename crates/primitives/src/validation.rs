//! Client-side checks for new flash transactions.
//!
//! These mirror the contract's own limits so obviously invalid submissions
//! are caught before a transaction is signed. The contract remains the
//! authoritative enforcer.

use alloy_primitives::U256;
use thiserror::Error;

use crate::TokenAmount;

/// Smallest accepted time window: one minute.
pub const MIN_FLASH_WINDOW_SECS: u64 = 60;
/// Largest accepted time window: 365 days.
pub const MAX_FLASH_WINDOW_SECS: u64 = 31_536_000;
/// Smallest accepted execution delay: one minute.
pub const MIN_EXECUTION_DELAY_SECS: u64 = 60;
/// Largest flash amount: 1,000,000 FTUSDT in raw 6-decimal units.
pub const MAX_FLASH_AMOUNT_RAW: U256 = U256::from_limbs([1_000_000_000_000, 0, 0, 0]);

/// A flash-transaction request violates one of the contract limits.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlashValidationError {
    /// The amount exceeds the 1,000,000 FTUSDT cap.
    #[error("amount exceeds the maximum of 1000000 FTUSDT")]
    AmountTooLarge,
    /// The time window falls outside the accepted range.
    #[error(
        "time window must be between {MIN_FLASH_WINDOW_SECS} and {MAX_FLASH_WINDOW_SECS} seconds, got {0}"
    )]
    TimeWindowOutOfRange(u64),
    /// The execution delay is shorter than the contract allows.
    #[error("execution delay must be at least {MIN_EXECUTION_DELAY_SECS} seconds, got {0}")]
    ExecutionDelayTooShort(u64),
}

/// Validates a flash-transaction request before submission.
///
/// Boundary values are accepted: a 60-second window, a 31,536,000-second
/// window, and a 60-second delay all pass.
pub fn validate_flash_transaction(
    amount: &TokenAmount,
    time_window_secs: u64,
    min_execution_delay_secs: u64,
) -> Result<(), FlashValidationError> {
    if amount.raw() > MAX_FLASH_AMOUNT_RAW {
        return Err(FlashValidationError::AmountTooLarge);
    }
    if !(MIN_FLASH_WINDOW_SECS..=MAX_FLASH_WINDOW_SECS).contains(&time_window_secs) {
        return Err(FlashValidationError::TimeWindowOutOfRange(time_window_secs));
    }
    if min_execution_delay_secs < MIN_EXECUTION_DELAY_SECS {
        return Err(FlashValidationError::ExecutionDelayTooShort(min_execution_delay_secs));
    }
    Ok(())
}
