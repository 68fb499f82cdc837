//! Contains the CLI arguments for the ftusdtctl binary.

use std::path::PathBuf;

use alloy_primitives::{Address, U256};
use clap::{Parser, Subcommand};
use tracing::Level;

/// FTUSDT platform control CLI.
#[derive(Debug, Parser)]
#[command(name = "ftusdtctl")]
#[command(about = "FTUSDT platform control CLI")]
pub(crate) struct Cli {
    /// Target network (testnet, mainnet, or path to a network config file)
    #[arg(short = 'n', long = "network", env = "NETWORK", default_value = "testnet", global = true)]
    pub(crate) network: String,

    /// Hex private key of the acting account
    #[arg(long = "private-key", env = "PRIVATE_KEY", hide_env_values = true, global = true)]
    pub(crate) private_key: Option<String>,

    /// Path to a file containing the private key
    #[arg(long = "key-file", env = "PRIVATE_KEY_FILE", conflicts_with = "private_key", global = true)]
    pub(crate) key_file: Option<PathBuf>,

    /// Log level
    #[arg(long, env, default_value = "info", global = true)]
    pub(crate) log_level: Level,

    /// Format for logs, can be json or text
    #[arg(long, env, default_value = "text", global = true)]
    pub(crate) log_format: String,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

/// Subcommands for the ftusdtctl CLI.
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Show the connected account's FTUSDT balance
    #[command(visible_alias = "b")]
    Balance,
    /// Transfer FTUSDT to another account
    #[command(visible_alias = "t")]
    Transfer {
        /// Recipient address
        #[arg(long)]
        to: Address,
        /// Decimal token amount, e.g. 10.5
        #[arg(long)]
        amount: String,
    },
    /// Mint FTUSDT against locked collateral
    #[command(visible_alias = "m")]
    Mint,
    /// Collateral operations
    #[command(visible_alias = "c")]
    Collateral {
        #[command(subcommand)]
        command: CollateralCommands,
    },
    /// Flash transaction operations
    #[command(visible_alias = "f")]
    Flash {
        #[command(subcommand)]
        command: FlashCommands,
    },
}

/// Collateral subcommands.
#[derive(Debug, Subcommand)]
pub(crate) enum CollateralCommands {
    /// Lock collateral with the treasury to back FTUSDT minting
    Lock {
        /// Decimal collateral amount
        #[arg(long)]
        amount: String,
        /// Treasury address the collateral is transferred to
        #[arg(long, env = "TREASURY_ADDRESS")]
        treasury: Address,
    },
}

/// Flash transaction subcommands.
#[derive(Debug, Subcommand)]
pub(crate) enum FlashCommands {
    /// List the connected account's flash transactions
    List,
    /// Create a time-delayed, multi-approval transfer
    Create {
        /// Recipient address
        #[arg(long)]
        recipient: Address,
        /// Decimal token amount
        #[arg(long)]
        amount: String,
        /// Execution window in minutes
        #[arg(long = "time-window", default_value_t = 60)]
        time_window_minutes: u64,
        /// Minimum delay before execution, in minutes
        #[arg(long = "min-delay", default_value_t = 1)]
        min_execution_delay_minutes: u64,
        /// Approvals required before execution succeeds
        #[arg(long = "approvals", default_value_t = 1)]
        required_approvals: u64,
        /// Free-text purpose stored with the transaction
        #[arg(long, default_value = "")]
        purpose: String,
    },
    /// Execute a pending flash transaction
    Execute {
        /// Transaction identifier
        #[arg(long)]
        id: U256,
    },
    /// Cancel a pending flash transaction
    Cancel {
        /// Transaction identifier
        #[arg(long)]
        id: U256,
    },
}
