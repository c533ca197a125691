pub mod config;
pub mod history_source;
pub mod models;
pub mod price_service;
pub mod token_ledger;

pub use config::BitcoinConfig;
pub use history_source::{
    AddressHistorySource, BlockchainInfoSource, BlockstreamSource, HistorySourceChain,
};
pub use models::{AddressHistory, OmniTransaction, RawTransaction, TxInput, TxOutput};
pub use price_service::{resolve_btc_price, CoinGeckoPriceService, PriceService};
pub use token_ledger::{OmniExplorerLedger, TokenLedger};
