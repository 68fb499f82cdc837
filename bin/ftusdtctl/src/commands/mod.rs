//! Command dispatch: establishes the wallet session and gateway, then hands
//! off to the per-area handlers.

mod collateral;
mod flash;
mod token;

use anyhow::{bail, Context, Result};
use ftusdt_chain::{KeySource, NetworkConfig, WalletSession};
use ftusdt_contracts::{ContractAddresses, Gateway};

use crate::cli::{Cli, Commands};

pub(crate) async fn run(cli: Cli) -> Result<()> {
    let network = NetworkConfig::load(&cli.network).context("failed to load network config")?;

    let key = match (cli.private_key, cli.key_file) {
        (Some(key), _) => KeySource::Raw(key),
        (None, Some(path)) => KeySource::File(path),
        (None, None) => bail!("no signing key: set --private-key or --key-file"),
    };
    let session =
        WalletSession::connect(&network, key).await.context("failed to connect wallet")?;

    let addresses = ContractAddresses::from_env()?;
    let gateway = Gateway::new(session.provider(), addresses);

    match cli.command {
        Commands::Balance => token::balance(&session, &gateway).await,
        Commands::Transfer { to, amount } => token::transfer(&session, &gateway, to, &amount).await,
        Commands::Mint => token::mint(&session, &gateway).await,
        Commands::Collateral { command } => collateral::run(&session, &gateway, command).await,
        Commands::Flash { command } => flash::run(&session, &gateway, command).await,
    }
}
