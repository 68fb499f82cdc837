#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod bindings;
pub use bindings::{CollateralManager, Ftusdt};

mod addresses;
pub use addresses::{
    AddressError, ContractAddresses, COLLATERAL_MANAGER_ADDRESS_VAR, CONTRACT_ADDRESS_VAR,
    PRICE_ORACLE_ADDRESS_VAR,
};

mod gateway;
pub use gateway::{Gateway, GatewayError};
