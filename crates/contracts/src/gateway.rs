//! Binds configured addresses to callable contract instances.

use alloy_provider::DynProvider;
use thiserror::Error;

use crate::{
    bindings::{CollateralManager, Ftusdt},
    ContractAddresses, COLLATERAL_MANAGER_ADDRESS_VAR, CONTRACT_ADDRESS_VAR,
};

/// Errors binding a contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// The contract's address was never configured.
    #[error("contract address not configured: set {0}")]
    AddressUnset(&'static str),
}

/// Access point for the deployed platform contracts.
///
/// Holds the wallet-attached provider and the configured addresses; returns
/// typed instances on demand. No retry policy: provider and contract errors
/// surface verbatim to the caller.
#[derive(Debug, Clone)]
pub struct Gateway {
    provider: DynProvider,
    addresses: ContractAddresses,
}

impl Gateway {
    /// Creates a gateway over the given provider and address set.
    pub const fn new(provider: DynProvider, addresses: ContractAddresses) -> Self {
        Self { provider, addresses }
    }

    /// The FTUSDT token binding.
    pub fn token(&self) -> Result<Ftusdt::FtusdtInstance<DynProvider>, GatewayError> {
        let address =
            self.addresses.token.ok_or(GatewayError::AddressUnset(CONTRACT_ADDRESS_VAR))?;
        Ok(Ftusdt::new(address, self.provider.clone()))
    }

    /// The collateral-manager binding.
    pub fn collateral_manager(
        &self,
    ) -> Result<CollateralManager::CollateralManagerInstance<DynProvider>, GatewayError> {
        let address = self
            .addresses
            .collateral_manager
            .ok_or(GatewayError::AddressUnset(COLLATERAL_MANAGER_ADDRESS_VAR))?;
        Ok(CollateralManager::new(address, self.provider.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::Address;
    use alloy_provider::{Provider, ProviderBuilder};

    fn offline_provider() -> DynProvider {
        ProviderBuilder::new()
            .connect_http("http://127.0.0.1:1".parse().unwrap())
            .erased()
    }

    #[test]
    fn unset_address_fails_with_the_variable_name() {
        let gateway = Gateway::new(offline_provider(), ContractAddresses::default());
        assert_eq!(gateway.token().unwrap_err(), GatewayError::AddressUnset(CONTRACT_ADDRESS_VAR));
        assert_eq!(
            gateway.collateral_manager().unwrap_err(),
            GatewayError::AddressUnset(COLLATERAL_MANAGER_ADDRESS_VAR)
        );
    }

    #[test]
    fn configured_address_binds_an_instance() {
        let token = Address::from([0x42; 20]);
        let addresses = ContractAddresses { token: Some(token), ..Default::default() };
        let gateway = Gateway::new(offline_provider(), addresses);
        assert_eq!(*gateway.token().unwrap().address(), token);
    }
}
