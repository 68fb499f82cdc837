//! Solidity bindings for the deployed platform contracts.
//!
//! The interfaces mirror the deployed bytecode, including the
//! leading-underscore public-mapping getters; renaming anything here changes
//! the selector and breaks the call.

use alloy_sol_macro::sol;

sol! {
    /// The FTUSDT token: balances, transfers, collateral-backed minting, and
    /// the flash-transaction workflow.
    #[sol(rpc)]
    contract Ftusdt {
        constructor(uint256 initialSupply, address priceOracle, address collateralManager);

        function balanceOf(address owner) external view returns (uint256 balance);
        function transfer(address to, uint256 amount) external returns (bool success);
        function mint() external;

        function createFlashTransaction(
            address recipient,
            uint256 amount,
            uint256 timeWindow,
            uint256 minExecutionDelay,
            uint256 requiredApprovals,
            bytes memory purpose
        ) external returns (uint256 id);
        function executeFlashTransaction(uint256 id) external;
        function cancelFlashTransaction(uint256 id) external;

        function _userFlashTransactions(address owner) external view returns (uint256[] memory ids);
        function _flashTransactions(uint256 id) external view returns (
            address sender,
            address recipient,
            uint256 amount,
            uint256 deadline,
            uint256 minExecutionTime,
            uint256 fee,
            bool executed,
            bool cancelled,
            bytes memory purpose,
            uint256 requiredApprovals,
            uint256 currentApprovals
        );
    }
}

sol! {
    /// The collateral manager backing FTUSDT minting.
    #[sol(rpc)]
    contract CollateralManager {
        function transferCollateralFrom(address from, address to, uint256 amount) external returns (bool success);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_sol_types::SolCall;

    #[test]
    fn selectors_match_the_deployed_abi() {
        assert_eq!(Ftusdt::balanceOfCall::SIGNATURE, "balanceOf(address)");
        assert_eq!(Ftusdt::transferCall::SIGNATURE, "transfer(address,uint256)");
        assert_eq!(Ftusdt::mintCall::SIGNATURE, "mint()");
        assert_eq!(
            Ftusdt::createFlashTransactionCall::SIGNATURE,
            "createFlashTransaction(address,uint256,uint256,uint256,uint256,bytes)"
        );
        assert_eq!(
            Ftusdt::executeFlashTransactionCall::SIGNATURE,
            "executeFlashTransaction(uint256)"
        );
        assert_eq!(
            Ftusdt::cancelFlashTransactionCall::SIGNATURE,
            "cancelFlashTransaction(uint256)"
        );
        assert_eq!(
            Ftusdt::_userFlashTransactionsCall::SIGNATURE,
            "_userFlashTransactions(address)"
        );
        assert_eq!(Ftusdt::_flashTransactionsCall::SIGNATURE, "_flashTransactions(uint256)");
        assert_eq!(
            CollateralManager::transferCollateralFromCall::SIGNATURE,
            "transferCollateralFrom(address,address,uint256)"
        );
    }
}
