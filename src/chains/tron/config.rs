use std::env;
use std::path::PathBuf;

use crate::chains::constants::{
    DEFAULT_TRON_ADDRESS, DEFAULT_USER_AGENT, TRON_DAI_CONTRACT, TRON_USDC_CONTRACT,
    TRON_USDT_CONTRACT,
};
use crate::entity::{MonitorError, TargetToken, TokenContract};

/// TRON monitor configuration
#[derive(Debug, Clone)]
pub struct TronConfig {
    /// Address being monitored
    pub target_address: String,

    /// Sent as `TRON-PRO-API-KEY` when present
    pub api_key: Option<String>,

    /// TronScan API base URL
    pub api_url: String,

    /// Known TRC-20 stablecoin contracts
    pub token_contracts: Vec<TokenContract>,

    /// Requested token symbols, validated against `token_contracts` per run
    pub tokens: Vec<String>,

    /// Page size of the single transfer request
    pub limit: u32,

    /// Optional window bounds in milliseconds
    pub start_timestamp: Option<i64>,
    pub end_timestamp: Option<i64>,

    pub user_agent: String,

    /// Directory receiving the CSV file
    pub output_dir: PathBuf,

    pub write_csv: bool,
}

impl Default for TronConfig {
    fn default() -> Self {
        Self {
            target_address: DEFAULT_TRON_ADDRESS.to_string(),
            api_key: None,
            api_url: "https://apilist.tronscanapi.com".to_string(),
            token_contracts: vec![
                TokenContract::new(TargetToken::Usdt, TRON_USDT_CONTRACT),
                TokenContract::new(TargetToken::Usdc, TRON_USDC_CONTRACT),
                TokenContract::new(TargetToken::Dai, TRON_DAI_CONTRACT),
            ],
            tokens: TargetToken::all()
                .iter()
                .map(|t| t.symbol().to_string())
                .collect(),
            limit: 100,
            start_timestamp: None,
            end_timestamp: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            output_dir: PathBuf::from("."),
            write_csv: true,
        }
    }
}

impl TronConfig {
    /// Creates configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            target_address: env::var("TRON_TARGET_ADDRESS").unwrap_or(defaults.target_address),
            api_key: env::var("TRONSCAN_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .or(defaults.api_key),
            api_url: env::var("TRONSCAN_API_URL").unwrap_or(defaults.api_url),
            user_agent: env::var("MONITOR_USER_AGENT").unwrap_or(defaults.user_agent),
            output_dir: env::var("MONITOR_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            ..defaults
        }
    }

    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join("tron_incoming_transfers.csv")
    }

    /// Resolve a requested symbol to its configured contract
    pub fn contract_for(&self, symbol: &str) -> Result<&TokenContract, MonitorError> {
        let unsupported = || MonitorError::UnsupportedToken {
            symbol: symbol.to_string(),
            available: self
                .token_contracts
                .iter()
                .map(|c| c.token.symbol().to_string())
                .collect(),
        };

        let token: TargetToken = symbol.parse().map_err(|_| unsupported())?;
        self.token_contracts
            .iter()
            .find(|c| c.token == token)
            .ok_or_else(unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_for_known_symbols() {
        let config = TronConfig::default();

        assert_eq!(
            config.contract_for("USDT").unwrap().contract_address,
            TRON_USDT_CONTRACT
        );
        assert_eq!(config.contract_for("dai").unwrap().token, TargetToken::Dai);
    }

    #[test]
    fn test_contract_for_unknown_symbol() {
        let config = TronConfig::default();

        let err = config.contract_for("BTT").unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"Token BTT not supported. Available: ["USDT", "USDC", "DAI"]"#
        );
    }

    #[test]
    fn test_symbol_without_configured_contract() {
        let config = TronConfig {
            token_contracts: vec![TokenContract::new(TargetToken::Usdt, TRON_USDT_CONTRACT)],
            ..Default::default()
        };

        assert!(matches!(
            config.contract_for("USDC"),
            Err(MonitorError::UnsupportedToken { .. })
        ));
    }
}
