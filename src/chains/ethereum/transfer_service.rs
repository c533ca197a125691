use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{error, info, warn};
use reqwest::Client;

use crate::chains::ethereum::config::EthereumConfig;
use crate::chains::ethereum::models::{Erc20Transfer, EtherscanResponse};
use crate::chains::http::get_json;

/// Source of raw ERC-20 transfer events for an address
#[async_trait]
pub trait TokenTransferSource: Send + Sync {
    /// Transfers in either direction, newest first. An explorer-level
    /// rejection is an empty list; transport and decoding failures are errors.
    async fn fetch_token_transfers(&self, address: &str) -> Result<Vec<Erc20Transfer>>;
}

/// Etherscan V2 `account/tokentx`
pub struct EtherscanClient {
    http_client: Client,
    config: EthereumConfig,
}

impl EtherscanClient {
    pub fn new(http_client: Client, config: EthereumConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    fn query_params(&self, address: &str) -> Vec<(&'static str, String)> {
        vec![
            ("chainid", self.config.chain_id.to_string()),
            ("module", "account".to_string()),
            ("action", "tokentx".to_string()),
            ("address", address.to_string()),
            ("startblock", self.config.start_block.to_string()),
            ("endblock", self.config.end_block.to_string()),
            ("page", self.config.page.to_string()),
            ("offset", self.config.offset.to_string()),
            ("sort", "desc".to_string()),
            ("apikey", self.config.api_key.clone()),
        ]
    }
}

#[async_trait]
impl TokenTransferSource for EtherscanClient {
    async fn fetch_token_transfers(&self, address: &str) -> Result<Vec<Erc20Transfer>> {
        info!("Fetching ERC-20 transfers for {} from Etherscan", address);

        let request = self
            .http_client
            .get(&self.config.api_url)
            .query(&self.query_params(address));
        let response: EtherscanResponse = get_json(request, "Etherscan").await?;

        if !response.is_ok() {
            error!("Etherscan API error: {}", response.message);
            if let Some(detail) = response.result.as_str() {
                error!("Etherscan API detail: {}", detail);
            }
            if response.mentions_deprecation() {
                warn!("The endpoint looks deprecated; check ETHERSCAN_API_URL points at the V2 API");
            }
            return Ok(Vec::new());
        }

        let transfers: Vec<Erc20Transfer> = serde_json::from_value(response.result)
            .context("Failed to parse Etherscan transfer list")?;
        info!("Etherscan returned {} token transfers", transfers.len());

        Ok(transfers)
    }
}
