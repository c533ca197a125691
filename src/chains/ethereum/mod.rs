pub mod config;
pub mod models;
pub mod transfer_service;

pub use config::EthereumConfig;
pub use models::{Erc20Transfer, EtherscanResponse};
pub use transfer_service::{EtherscanClient, TokenTransferSource};
