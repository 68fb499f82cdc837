#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod source;
pub use source::{ContractFlashSource, ContractSourceError, FlashSource, RawFlashRequest};

mod service;
pub use service::{CreateFlashRequest, FlashError, FlashService};

mod view;
pub use view::{FlashTxView, ViewError};
