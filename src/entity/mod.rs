mod ethereum_transfer;
mod monitor_error;
mod native_transfer;
mod report;
mod target_token;
mod token_transfer;
mod tron_transfer;

pub use ethereum_transfer::EthereumTransfer;
pub use monitor_error::MonitorError;
pub use native_transfer::NativeTransfer;
pub use report::{BitcoinReport, BitcoinSummary, FailureReport, TransferReport, TransferSummary};
pub use target_token::{TargetToken, TokenContract};
pub use token_transfer::TokenTransfer;
pub use tron_transfer::TronTransfer;
