//! Balance, transfer, and mint operations on the FTUSDT token.

use alloy_primitives::Address;
use anyhow::{Context, Result};
use ftusdt_chain::WalletSession;
use ftusdt_contracts::Gateway;
use ftusdt_primitives::{TokenAmount, FTUSDT_DECIMALS};
use tracing::info;

pub(crate) async fn balance(session: &WalletSession, gateway: &Gateway) -> Result<()> {
    let token = gateway.token()?;
    let raw = token
        .balanceOf(session.address())
        .call()
        .await
        .context("balance query failed")?;
    let amount = TokenAmount::from_raw(raw, FTUSDT_DECIMALS).format()?;
    println!("{amount} FTUSDT");
    Ok(())
}

pub(crate) async fn transfer(
    session: &WalletSession,
    gateway: &Gateway,
    to: Address,
    amount: &str,
) -> Result<()> {
    let token = gateway.token()?;
    let amount = TokenAmount::parse(amount, FTUSDT_DECIMALS)?;

    let receipt = token
        .transfer(to, amount.raw())
        .send()
        .await
        .context("transfer rejected")?
        .get_receipt()
        .await
        .context("transfer confirmation failed")?;
    info!(tx = %receipt.transaction_hash, to = %to, "transfer confirmed");

    balance(session, gateway).await
}

pub(crate) async fn mint(session: &WalletSession, gateway: &Gateway) -> Result<()> {
    let token = gateway.token()?;
    let receipt = token
        .mint()
        .send()
        .await
        .context("mint rejected")?
        .get_receipt()
        .await
        .context("mint confirmation failed")?;
    info!(tx = %receipt.transaction_hash, "mint confirmed");

    balance(session, gateway).await
}
