//! Collateral operations backing FTUSDT minting.

use alloy_primitives::Address;
use anyhow::{Context, Result};
use ftusdt_chain::WalletSession;
use ftusdt_contracts::Gateway;
use ftusdt_primitives::TokenAmount;
use tracing::info;

use crate::cli::CollateralCommands;

/// Collateral is denominated in the chain's 18-decimal native unit, not in
/// FTUSDT's token scale.
const COLLATERAL_DECIMALS: u8 = 18;

pub(crate) async fn run(
    session: &WalletSession,
    gateway: &Gateway,
    command: CollateralCommands,
) -> Result<()> {
    match command {
        CollateralCommands::Lock { amount, treasury } => {
            lock(session, gateway, &amount, treasury).await
        }
    }
}

async fn lock(
    session: &WalletSession,
    gateway: &Gateway,
    amount: &str,
    treasury: Address,
) -> Result<()> {
    let manager = gateway.collateral_manager()?;
    let amount = TokenAmount::parse(amount, COLLATERAL_DECIMALS)?;

    let receipt = manager
        .transferCollateralFrom(session.address(), treasury, amount.raw())
        .send()
        .await
        .context("collateral lock rejected")?
        .get_receipt()
        .await
        .context("collateral lock confirmation failed")?;
    info!(tx = %receipt.transaction_hash, treasury = %treasury, "collateral locked");
    println!("collateral locked in tx {}", receipt.transaction_hash);
    Ok(())
}
