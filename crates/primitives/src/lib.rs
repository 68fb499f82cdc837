#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod amount;
pub use amount::{AmountError, TokenAmount, FTUSDT_DECIMALS};

mod flash;
pub use flash::{minutes_to_seconds, FlashStatus, FlashTransaction, PurposeDecodeError};

pub mod validation;
pub use validation::{
    validate_flash_transaction, FlashValidationError, MAX_FLASH_AMOUNT_RAW,
    MAX_FLASH_WINDOW_SECS, MIN_EXECUTION_DELAY_SECS, MIN_FLASH_WINDOW_SECS,
};
