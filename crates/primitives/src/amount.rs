//! Fixed-point token amounts.
//!
//! On-chain balances are integers scaled by the token's decimal count. This
//! module converts between the raw representation and the decimal strings
//! users type and read.

use alloy_primitives::{
    utils::{format_units, parse_units, UnitsError},
    U256,
};
use thiserror::Error;

/// Decimal count of the FTUSDT token (USDT convention).
pub const FTUSDT_DECIMALS: u8 = 6;

/// Errors that can occur converting between decimal strings and raw amounts.
#[derive(Debug, Error)]
pub enum AmountError {
    /// The input string was not a valid decimal amount for the token's scale.
    #[error("failed to parse token amount: {0}")]
    Parse(#[source] UnitsError),
    /// Negative amounts have no raw representation.
    #[error("negative token amounts are not representable")]
    Negative,
    /// The raw value could not be rendered at the requested scale.
    #[error("failed to format token amount: {0}")]
    Format(#[source] UnitsError),
}

/// A token quantity as the integer raw value plus the scale it was parsed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAmount {
    raw: U256,
    decimals: u8,
}

impl TokenAmount {
    /// Wraps a raw on-chain value at the given scale.
    pub const fn from_raw(raw: U256, decimals: u8) -> Self {
        Self { raw, decimals }
    }

    /// Parses a decimal string (e.g. `"10"` or `"0.5"`) into a raw amount.
    ///
    /// Rejects malformed input, values with more fractional digits than the
    /// token carries, and negative values.
    pub fn parse(text: &str, decimals: u8) -> Result<Self, AmountError> {
        let parsed = parse_units(text, decimals).map_err(AmountError::Parse)?;
        if parsed.is_negative() {
            return Err(AmountError::Negative);
        }
        Ok(Self { raw: parsed.get_absolute(), decimals })
    }

    /// The raw on-chain integer value.
    pub const fn raw(&self) -> U256 {
        self.raw
    }

    /// The scale this amount was parsed at.
    pub const fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Renders the amount back into a decimal string without trailing zeros,
    /// so that parsing and formatting round-trip: `"10"` stays `"10"`.
    pub fn format(&self) -> Result<String, AmountError> {
        let text = format_units(self.raw, self.decimals).map_err(AmountError::Format)?;
        if !text.contains('.') {
            return Ok(text);
        }
        let trimmed = text.trim_end_matches('0').trim_end_matches('.');
        if trimmed.is_empty() {
            Ok("0".to_string())
        } else {
            Ok(trimmed.to_string())
        }
    }
}
