use clap::{Args, Parser};
use log::warn;
use std::path::PathBuf;

use crate::chains::bitcoin::BitcoinConfig;
use crate::chains::ethereum::EthereumConfig;
use crate::chains::tron::TronConfig;
use crate::utils::{validate_bitcoin_address, validate_ethereum_address, validate_tron_address};

/// Output switches shared by every monitor
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Skip writing CSV files
    #[arg(long, default_value_t = false)]
    pub no_csv: bool,

    /// Directory the CSV files are written to
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

impl OutputArgs {
    fn apply(&self, output_dir: &mut PathBuf, write_csv: &mut bool) {
        if let Some(dir) = &self.output_dir {
            *output_dir = dir.clone();
        }
        if self.no_csv {
            *write_csv = false;
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "btc_monitor")]
#[command(about = "Incoming BTC and Omni Layer stablecoin transfers of a Bitcoin address")]
pub struct BtcArgs {
    /// Address to monitor
    #[arg(value_name = "ADDRESS")]
    pub address: Option<String>,

    /// Maximum transactions fetched from the history source
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl BtcArgs {
    pub fn into_config(self, mut config: BitcoinConfig) -> BitcoinConfig {
        if let Some(address) = self.address {
            config.target_address = address;
        }
        if let Some(limit) = self.limit {
            config.tx_limit = limit;
        }
        self.output.apply(&mut config.output_dir, &mut config.write_csv);

        if !validate_bitcoin_address(&config.target_address) {
            warn!("{} does not look like a Bitcoin address", config.target_address);
        }
        config
    }
}

#[derive(Parser, Debug)]
#[command(name = "eth_monitor")]
#[command(about = "Incoming USDT/USDC/DAI transfers of an Ethereum address")]
pub struct EthArgs {
    /// Address to monitor
    #[arg(value_name = "ADDRESS")]
    pub address: Option<String>,

    /// Etherscan API key, overrides ETHERSCAN_API_KEY
    #[arg(value_name = "API_KEY")]
    pub api_key: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl EthArgs {
    pub fn into_config(self, mut config: EthereumConfig) -> EthereumConfig {
        if let Some(address) = self.address {
            config.target_address = address;
        }
        if let Some(api_key) = self.api_key {
            config.api_key = api_key;
        }
        self.output.apply(&mut config.output_dir, &mut config.write_csv);

        if !validate_ethereum_address(&config.target_address) {
            warn!("{} does not look like an Ethereum address", config.target_address);
        }
        if config.api_key.is_empty() {
            warn!("No Etherscan API key configured, requests may be rejected");
        }
        config
    }
}

#[derive(Parser, Debug)]
#[command(name = "tron_monitor")]
#[command(about = "Incoming TRC-20 stablecoin transfers of a TRON address")]
pub struct TronArgs {
    /// Address to monitor
    #[arg(value_name = "ADDRESS")]
    pub address: Option<String>,

    /// TronScan API key, overrides TRONSCAN_API_KEY
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Token symbols to report
    #[arg(long, value_name = "SYMBOLS", value_delimiter = ',')]
    pub tokens: Option<Vec<String>>,

    /// Transfers requested from TronScan
    #[arg(long, value_name = "N")]
    pub limit: Option<u32>,

    /// Window start in milliseconds
    #[arg(long, value_name = "MS")]
    pub start_timestamp: Option<i64>,

    /// Window end in milliseconds
    #[arg(long, value_name = "MS")]
    pub end_timestamp: Option<i64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl TronArgs {
    pub fn into_config(self, mut config: TronConfig) -> TronConfig {
        if let Some(address) = self.address {
            config.target_address = address;
        }
        if let Some(api_key) = self.api_key.filter(|k| !k.trim().is_empty()) {
            config.api_key = Some(api_key);
        }
        if let Some(tokens) = self.tokens {
            config.tokens = tokens
                .into_iter()
                .map(|t| t.trim().to_uppercase())
                .filter(|t| !t.is_empty())
                .collect();
        }
        if let Some(limit) = self.limit {
            config.limit = limit;
        }
        if self.start_timestamp.is_some() {
            config.start_timestamp = self.start_timestamp;
        }
        if self.end_timestamp.is_some() {
            config.end_timestamp = self.end_timestamp;
        }
        self.output.apply(&mut config.output_dir, &mut config.write_csv);

        if !validate_tron_address(&config.target_address) {
            warn!("{} does not look like a TRON address", config.target_address);
        }
        config
    }
}
