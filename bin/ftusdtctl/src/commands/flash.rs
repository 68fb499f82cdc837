//! Flash-transaction commands: list, create, execute, cancel.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use ftusdt_chain::WalletSession;
use ftusdt_contracts::Gateway;
use ftusdt_flash::{ContractFlashSource, CreateFlashRequest, FlashService, FlashTxView};
use ftusdt_primitives::{FlashStatus, FTUSDT_DECIMALS};

use crate::cli::FlashCommands;

pub(crate) async fn run(
    session: &WalletSession,
    gateway: &Gateway,
    command: FlashCommands,
) -> Result<()> {
    let service = FlashService::new(ContractFlashSource::new(gateway.token()?), FTUSDT_DECIMALS);

    match command {
        FlashCommands::List => {}
        FlashCommands::Create {
            recipient,
            amount,
            time_window_minutes,
            min_execution_delay_minutes,
            required_approvals,
            purpose,
        } => {
            let request = CreateFlashRequest {
                recipient,
                amount,
                time_window_minutes,
                min_execution_delay_minutes,
                required_approvals,
                purpose,
            };
            service.create(&request).await.context("failed to create flash transaction")?;
        }
        FlashCommands::Execute { id } => {
            service.execute(id).await.context("failed to execute flash transaction")?;
        }
        FlashCommands::Cancel { id } => {
            service.cancel(id).await.context("failed to cancel flash transaction")?;
        }
    }

    // Every command ends with a fresh listing so the resulting state is
    // visible without a second invocation.
    let views = service
        .list_for_account(session.address())
        .await
        .context("failed to list flash transactions")?;
    render(&views);
    Ok(())
}

fn render(views: &[FlashTxView]) {
    if views.is_empty() {
        println!("no flash transactions found");
        return;
    }

    let now = unix_now();
    for view in views {
        println!(
            "#{} {} -> {}  {} FTUSDT (fee {})  approvals {}/{}  {}",
            view.id,
            view.sender,
            view.recipient,
            view.amount,
            view.fee,
            view.current_approvals,
            view.required_approvals,
            view.status,
        );
        if !view.purpose.is_empty() {
            println!("    purpose: {}", view.purpose);
        }
        match window_hint(view, now) {
            Some(hint) => println!("    deadline: {}  ({hint})", view.deadline),
            None => println!("    deadline: {}", view.deadline),
        }
    }
}

/// Human hint for where the record sits in its execution window.
fn window_hint(view: &FlashTxView, now: u64) -> Option<String> {
    if view.executable_at(now) {
        Some("executable now".to_string())
    } else if view.status == FlashStatus::Pending && view.min_execution_time > now {
        Some(format!("executable in {}s", view.min_execution_time - now))
    } else {
        None
    }
}

fn unix_now() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or_default()
}
