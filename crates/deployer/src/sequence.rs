//! The three-step deployment sequence.

use std::path::Path;

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolConstructor;
use ftusdt_contracts::Ftusdt;
use thiserror::Error;
use tracing::info;

use crate::{ArtifactError, ContractArtifact, Deploy};

/// Errors running the deployment sequence.
#[derive(Debug, Error)]
pub enum DeployError<E: std::error::Error> {
    /// A deployment step failed; the sequence stops without writing output.
    #[error("deployment step failed: {0}")]
    Step(#[source] E),
    /// The env file could not be written after a successful deployment.
    #[error("failed to write address file: {0}")]
    WriteEnv(#[source] std::io::Error),
}

/// Creation bytecode for the three platform contracts.
#[derive(Debug, Clone)]
pub struct DeploymentPlan {
    /// `PriceOracle` creation code (no constructor arguments).
    pub price_oracle_code: Bytes,
    /// `CollateralManager` creation code (no constructor arguments).
    pub collateral_manager_code: Bytes,
    /// `FTUSDT` creation code, before constructor arguments are appended.
    pub token_code: Bytes,
}

impl DeploymentPlan {
    /// Loads the three artifacts from a build directory.
    pub fn load(artifacts_dir: &Path) -> Result<Self, ArtifactError> {
        Ok(Self {
            price_oracle_code: ContractArtifact::load(artifacts_dir, "PriceOracle")?.bytecode,
            collateral_manager_code: ContractArtifact::load(artifacts_dir, "CollateralManager")?
                .bytecode,
            token_code: ContractArtifact::load(artifacts_dir, "FTUSDT")?.bytecode,
        })
    }
}

/// Addresses produced by a completed deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeployedAddresses {
    /// The price-oracle contract.
    pub price_oracle: Address,
    /// The collateral-manager contract.
    pub collateral_manager: Address,
    /// The FTUSDT token contract.
    pub token: Address,
}

impl DeployedAddresses {
    /// Renders the env-file content the client reads.
    pub fn to_env_file(&self) -> String {
        format!(
            "PRICE_ORACLE_ADDRESS={}\nCOLLATERAL_MANAGER_ADDRESS={}\nCONTRACT_ADDRESS={}\n",
            self.price_oracle, self.collateral_manager, self.token
        )
    }
}

/// Deploys the platform in dependency order and persists the addresses.
///
/// Order: `PriceOracle`, `CollateralManager`, then `FTUSDT` constructed with
/// the initial supply and both prior addresses. A failing step aborts before
/// the env file is touched; contracts already mined stay deployed (there is
/// no rollback on a chain).
pub async fn run_deployment<D: Deploy>(
    deployer: &D,
    plan: &DeploymentPlan,
    initial_supply: U256,
    output: &Path,
) -> Result<DeployedAddresses, DeployError<D::Error>> {
    let price_oracle = deployer
        .deploy("PriceOracle", plan.price_oracle_code.clone())
        .await
        .map_err(DeployError::Step)?;

    let collateral_manager = deployer
        .deploy("CollateralManager", plan.collateral_manager_code.clone())
        .await
        .map_err(DeployError::Step)?;

    let constructor = Ftusdt::constructorCall {
        initialSupply: initial_supply,
        priceOracle: price_oracle,
        collateralManager: collateral_manager,
    };
    let token_init_code =
        Bytes::from([plan.token_code.to_vec(), constructor.abi_encode()].concat());
    let token = deployer.deploy("FTUSDT", token_init_code).await.map_err(DeployError::Step)?;

    let addresses = DeployedAddresses { price_oracle, collateral_manager, token };
    std::fs::write(output, addresses.to_env_file()).map_err(DeployError::WriteEnv)?;
    info!(path = %output.display(), "contract addresses saved");
    Ok(addresses)
}
