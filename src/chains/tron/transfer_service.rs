use anyhow::Result;
use async_trait::async_trait;
use log::{info, warn};
use reqwest::Client;

use crate::chains::http::get_json;
use crate::chains::tron::config::TronConfig;
use crate::chains::tron::models::{Trc20Transfer, TronScanResponse};

/// Source of raw TRC-20 transfer events for an address
#[async_trait]
pub trait Trc20TransferSource: Send + Sync {
    /// All transfers touching `address`, either direction
    async fn fetch_transfers(&self, address: &str) -> Result<Vec<Trc20Transfer>>;
}

/// TronScan `api/token_trc20/transfers`
pub struct TronScanClient {
    http_client: Client,
    config: TronConfig,
}

impl TronScanClient {
    pub fn new(http_client: Client, config: TronConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    fn query_params(&self, address: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("limit", self.config.limit.to_string()),
            ("start", "0".to_string()),
            ("relatedAddress", address.to_string()),
        ];
        if let Some(start) = self.config.start_timestamp {
            params.push(("start_timestamp", start.to_string()));
        }
        if let Some(end) = self.config.end_timestamp {
            params.push(("end_timestamp", end.to_string()));
        }
        params
    }
}

#[async_trait]
impl Trc20TransferSource for TronScanClient {
    async fn fetch_transfers(&self, address: &str) -> Result<Vec<Trc20Transfer>> {
        let url = format!(
            "{}/api/token_trc20/transfers",
            self.config.api_url.trim_end_matches('/')
        );
        info!("Fetching all TRC20 transfers for {}", address);

        let mut request = self.http_client.get(&url).query(&self.query_params(address));
        if let Some(api_key) = &self.config.api_key {
            request = request.header("TRON-PRO-API-KEY", api_key);
        }

        let response: TronScanResponse = get_json(request, "TronScan").await?;
        let Some(rows) = response.token_transfers else {
            warn!("No token_transfers in TronScan response");
            return Ok(Vec::new());
        };
        info!(
            "TronScan returned {} transfers ({} available)",
            rows.len(),
            response.total
        );

        let transfers = rows
            .into_iter()
            .filter_map(|row| match serde_json::from_value::<Trc20Transfer>(row) {
                Ok(transfer) => Some(transfer),
                Err(e) => {
                    warn!("Skipping malformed transfer record: {}", e);
                    None
                }
            })
            .collect();

        Ok(transfers)
    }
}
