//! 业务服务层

pub mod address_ledger;
pub mod processor;
pub mod wallet_address_service;

pub use address_ledger::{AddressLedger, TracingLedger};
pub use processor::{AddressProvider, ProcessorClient};
pub use wallet_address_service::WalletAddressRequester;
