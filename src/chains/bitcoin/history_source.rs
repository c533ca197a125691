use anyhow::Result;
use async_trait::async_trait;
use log::{info, warn};
use reqwest::Client;
use std::sync::Arc;

use crate::chains::bitcoin::models::{AddressHistory, EsploraTransaction};
use crate::chains::http::get_json;

/// A named explorer able to produce the canonical history of an address
#[async_trait]
pub trait AddressHistorySource: Send + Sync {
    fn name(&self) -> &str;

    /// Fetch up to `limit` transactions touching `address`
    async fn fetch_history(&self, address: &str, limit: usize) -> Result<AddressHistory>;
}

/// blockchain.info `rawaddr` endpoint, already in canonical shape
pub struct BlockchainInfoSource {
    http_client: Client,
    base_url: String,
}

impl BlockchainInfoSource {
    pub fn new(http_client: Client, base_url: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl AddressHistorySource for BlockchainInfoSource {
    fn name(&self) -> &str {
        "blockchain.info"
    }

    async fn fetch_history(&self, address: &str, limit: usize) -> Result<AddressHistory> {
        let url = format!("{}/rawaddr/{}", self.base_url, address);
        info!("Fetching transactions from: {}?limit={}", url, limit);

        let request = self.http_client.get(&url).query(&[("limit", limit)]);
        get_json::<AddressHistory>(request, self.name()).await
    }
}

/// Esplora `address/{address}/txs` endpoint, reshaped into the canonical history
pub struct BlockstreamSource {
    http_client: Client,
    base_url: String,
}

impl BlockstreamSource {
    pub fn new(http_client: Client, base_url: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl AddressHistorySource for BlockstreamSource {
    fn name(&self) -> &str {
        "blockstream.info"
    }

    // Esplora pages are fixed-size, the limit is not forwarded
    async fn fetch_history(&self, address: &str, _limit: usize) -> Result<AddressHistory> {
        let url = format!("{}/address/{}/txs", self.base_url, address);
        info!("Fetching transactions from: {}", url);

        let txs = get_json::<Vec<EsploraTransaction>>(self.http_client.get(&url), self.name()).await?;
        Ok(AddressHistory::from_esplora(address, txs))
    }
}

/// Ordered list of history sources tried until one succeeds
pub struct HistorySourceChain {
    sources: Vec<Arc<dyn AddressHistorySource>>,
}

impl HistorySourceChain {
    pub fn new(sources: Vec<Arc<dyn AddressHistorySource>>) -> Self {
        Self { sources }
    }

    pub fn source_names(&self) -> Vec<String> {
        self.sources.iter().map(|s| s.name().to_string()).collect()
    }

    /// Returns `None` when every source failed
    pub async fn fetch_history(&self, address: &str, limit: usize) -> Option<AddressHistory> {
        for source in &self.sources {
            match source.fetch_history(address, limit).await {
                Ok(history) => {
                    info!(
                        "Fetched {} transactions from {}",
                        history.txs.len(),
                        source.name()
                    );
                    return Some(history);
                }
                Err(e) => {
                    warn!("Error fetching from {}: {:#}", source.name(), e);
                }
            }
        }

        warn!(
            "All history sources failed for {} ({})",
            address,
            self.source_names().join(", ")
        );
        None
    }
}
