//! Chain-change detection for long-lived sessions.
//!
//! The watcher polls the node's chain id and publishes changes on a watch
//! channel. Clients holding contract bindings should treat any change as a
//! signal to rebuild them from a fresh session.

use std::time::Duration;

use alloy_provider::{DynProvider, Provider};
use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, warn};

/// Polls the node's chain id and notifies subscribers when it changes.
///
/// The background task is aborted when the watcher is dropped, so
/// subscriptions cannot outlive the component that created them.
#[derive(Debug)]
pub struct ChainWatcher {
    rx: watch::Receiver<u64>,
    handle: JoinHandle<()>,
}

impl ChainWatcher {
    /// Starts watching the given provider, seeding subscribers with the chain
    /// id the session verified at connect time.
    pub fn spawn(provider: DynProvider, initial_chain_id: u64, poll_interval: Duration) -> Self {
        let (tx, rx) = watch::channel(initial_chain_id);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(poll_interval);
            // The first tick fires immediately; skip it so the verified id
            // stands until the node actually answers again.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                match provider.get_chain_id().await {
                    Ok(id) => {
                        tx.send_if_modified(|current| {
                            if *current != id {
                                warn!(previous = *current, current = id, "node changed chains");
                                *current = id;
                                true
                            } else {
                                false
                            }
                        });
                    }
                    Err(err) => debug!(error = %err, "chain id poll failed"),
                }
            }
        });
        Self { rx, handle }
    }

    /// Returns a receiver that yields the latest observed chain id.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.rx.clone()
    }
}

impl Drop for ChainWatcher {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
