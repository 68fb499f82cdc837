#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod network;
pub use network::{NetworkConfig, NetworkConfigError};

mod session;
pub use session::{KeySource, WalletError, WalletSession};

mod watcher;
pub use watcher::ChainWatcher;
