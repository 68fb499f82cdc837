//! Deployed contract addresses, read from the environment.
//!
//! The deployment tool writes these three variables; the client reads them as
//! configuration. Each is optional at load time so read-only commands can run
//! against a partial deployment, but binding an unset contract fails at the
//! gateway.

use alloy_primitives::{hex::FromHexError, Address};
use thiserror::Error;

/// Environment variable holding the price-oracle address.
pub const PRICE_ORACLE_ADDRESS_VAR: &str = "PRICE_ORACLE_ADDRESS";
/// Environment variable holding the collateral-manager address.
pub const COLLATERAL_MANAGER_ADDRESS_VAR: &str = "COLLATERAL_MANAGER_ADDRESS";
/// Environment variable holding the FTUSDT token address.
pub const CONTRACT_ADDRESS_VAR: &str = "CONTRACT_ADDRESS";

/// An address variable was present but did not parse.
#[derive(Debug, Error)]
#[error("{var} is not a valid address: {source}")]
pub struct AddressError {
    /// The offending environment variable.
    pub var: &'static str,
    /// Underlying hex parse error.
    #[source]
    pub source: FromHexError,
}

/// The set of deployed contract addresses, immutable after deployment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContractAddresses {
    /// Price-oracle contract.
    pub price_oracle: Option<Address>,
    /// Collateral-manager contract.
    pub collateral_manager: Option<Address>,
    /// FTUSDT token contract.
    pub token: Option<Address>,
}

impl ContractAddresses {
    /// Loads the addresses from the process environment. Unset variables stay
    /// `None`; set-but-invalid values are an error.
    pub fn from_env() -> Result<Self, AddressError> {
        Ok(Self {
            price_oracle: read_address(PRICE_ORACLE_ADDRESS_VAR)?,
            collateral_manager: read_address(COLLATERAL_MANAGER_ADDRESS_VAR)?,
            token: read_address(CONTRACT_ADDRESS_VAR)?,
        })
    }
}

fn read_address(var: &'static str) -> Result<Option<Address>, AddressError> {
    match std::env::var(var) {
        Ok(value) => {
            let address = value.trim().parse().map_err(|source| AddressError { var, source })?;
            Ok(Some(address))
        }
        Err(_) => Ok(None),
    }
}
