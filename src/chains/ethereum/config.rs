use std::env;
use std::path::PathBuf;

use crate::chains::constants::{
    DEFAULT_ETH_ADDRESS, DEFAULT_USER_AGENT, ETH_DAI_CONTRACT, ETH_USDC_CONTRACT,
    ETH_USDT_CONTRACT,
};
use crate::entity::{TargetToken, TokenContract};

/// Ethereum monitor configuration
#[derive(Debug, Clone)]
pub struct EthereumConfig {
    /// Address being monitored
    pub target_address: String,

    /// Etherscan API key, may be empty
    pub api_key: String,

    /// Etherscan V2 endpoint
    pub api_url: String,

    pub chain_id: u64,

    /// Stablecoin contracts, first match wins
    pub token_contracts: Vec<TokenContract>,

    pub start_block: u64,
    pub end_block: u64,
    pub page: u32,

    /// Maximum transfers returned by the single request
    pub offset: u32,

    pub user_agent: String,

    /// Directory receiving the CSV file
    pub output_dir: PathBuf,

    pub write_csv: bool,
}

impl Default for EthereumConfig {
    fn default() -> Self {
        Self {
            target_address: DEFAULT_ETH_ADDRESS.to_string(),
            api_key: String::new(),
            api_url: "https://api.etherscan.io/v2/api".to_string(),
            chain_id: 1,
            token_contracts: vec![
                TokenContract::new(TargetToken::Usdt, ETH_USDT_CONTRACT),
                TokenContract::new(TargetToken::Usdc, ETH_USDC_CONTRACT),
                TokenContract::new(TargetToken::Dai, ETH_DAI_CONTRACT),
            ],
            start_block: 0,
            end_block: 99_999_999,
            page: 1,
            offset: 10_000,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            output_dir: PathBuf::from("."),
            write_csv: true,
        }
    }
}

impl EthereumConfig {
    /// Creates configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            target_address: env::var("ETH_TARGET_ADDRESS").unwrap_or(defaults.target_address),
            api_key: env::var("ETHERSCAN_API_KEY").unwrap_or(defaults.api_key),
            api_url: env::var("ETHERSCAN_API_URL").unwrap_or(defaults.api_url),
            chain_id: env::var("ETH_CHAIN_ID")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.chain_id),
            user_agent: env::var("MONITOR_USER_AGENT").unwrap_or(defaults.user_agent),
            output_dir: env::var("MONITOR_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            ..defaults
        }
    }

    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join("incoming_token_transfers.csv")
    }

    /// Symbol of the first configured contract matching `contract_address`
    pub fn token_for_contract(&self, contract_address: &str) -> Option<TargetToken> {
        self.token_contracts
            .iter()
            .find(|c| c.matches(contract_address))
            .map(|c| c.token)
    }
}
