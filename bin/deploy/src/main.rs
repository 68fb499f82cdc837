//! Deploys the FTUSDT platform contracts and records their addresses.

use std::path::PathBuf;

use alloy_primitives::U256;
use anyhow::{Context, Result};
use clap::Parser;
use dotenvy::dotenv;
use ftusdt_chain::{KeySource, NetworkConfig, WalletSession};
use ftusdt_deployer::{run_deployment, DeploymentPlan, ProviderDeployer};
use tracing::{error, Level};
use tracing_subscriber::EnvFilter;

/// Deploys PriceOracle, CollateralManager, and FTUSDT in dependency order,
/// then writes the mined addresses to an env file the client reads.
#[derive(Debug, Parser)]
#[command(name = "deploy")]
struct Args {
    /// Hex private key of the deploying account
    #[arg(long = "private-key", env = "PRIVATE_KEY", hide_env_values = true)]
    private_key: String,

    /// Target network (testnet, mainnet, or path to a network config file)
    #[arg(short = 'n', long = "network", env = "NETWORK", default_value = "testnet")]
    network: String,

    /// Directory holding the compiled contract artifacts
    #[arg(long, default_value = "build")]
    artifacts: PathBuf,

    /// File the deployed addresses are written to
    #[arg(long, default_value = ".env.deployed")]
    output: PathBuf,

    /// Initial FTUSDT supply in whole tokens
    #[arg(long = "initial-supply", default_value_t = 1_000_000)]
    initial_supply: u64,

    /// Log level
    #[arg(long, env, default_value = "info")]
    log_level: Level,

    /// Format for logs, can be json or text
    #[arg(long, env, default_value = "text")]
    log_format: String,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    let args = Args::parse();

    let log_level = args.log_level.to_string();
    if args.log_format.to_lowercase() == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(EnvFilter::new(log_level))
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(EnvFilter::new(log_level)).init();
    }

    if let Err(err) = run(args).await {
        error!(error = ?err, "deployment failed");
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let network = NetworkConfig::load(&args.network).context("failed to load network config")?;
    let session = WalletSession::connect(&network, KeySource::Raw(args.private_key))
        .await
        .context("failed to connect wallet")?;

    let plan = DeploymentPlan::load(&args.artifacts)
        .with_context(|| format!("failed to load artifacts from {}", args.artifacts.display()))?;

    let deployer = ProviderDeployer::new(session.provider());
    let addresses =
        run_deployment(&deployer, &plan, U256::from(args.initial_supply), &args.output)
            .await
            .context("deployment sequence failed")?;

    println!("PriceOracle:       {}", addresses.price_oracle);
    println!("CollateralManager: {}", addresses.collateral_manager);
    println!("FTUSDT:            {}", addresses.token);
    println!("addresses written to {}", args.output.display());
    Ok(())
}
