pub mod config;
pub mod models;
pub mod transfer_service;

pub use config::TronConfig;
pub use models::{TokenInfo, Trc20Transfer, TronScanResponse};
pub use transfer_service::{Trc20TransferSource, TronScanClient};
