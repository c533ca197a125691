use anyhow::Result;
use async_trait::async_trait;
use log::{info, warn};
use reqwest::Client;

use crate::chains::bitcoin::models::SimplePriceResponse;
use crate::chains::http::get_json;

/// Spot price feed for BTC
#[async_trait]
pub trait PriceService: Send + Sync {
    /// Current BTC price in USD
    async fn get_btc_price(&self) -> Result<f64>;
}

/// CoinGecko `simple/price` implementation
pub struct CoinGeckoPriceService {
    http_client: Client,
    price_api_url: String,
}

impl CoinGeckoPriceService {
    /// `http_client` is expected to carry the short request timeout
    pub fn new(http_client: Client, price_api_url: &str) -> Self {
        Self {
            http_client,
            price_api_url: price_api_url.to_string(),
        }
    }
}

#[async_trait]
impl PriceService for CoinGeckoPriceService {
    async fn get_btc_price(&self) -> Result<f64> {
        let response: SimplePriceResponse =
            get_json(self.http_client.get(&self.price_api_url), "CoinGecko").await?;

        Ok(response.bitcoin.usd)
    }
}

/// Fetch the spot price once, substituting `fallback` on any failure
pub async fn resolve_btc_price(price_service: &dyn PriceService, fallback: f64) -> f64 {
    match price_service.get_btc_price().await {
        Ok(price) if price.is_finite() && price > 0.0 => {
            info!("Current BTC price: ${:.2} USD", price);
            price
        }
        Ok(price) => {
            warn!("Ignoring implausible BTC price {}", price);
            info!("Using fallback BTC price: ${:.2} USD", fallback);
            fallback
        }
        Err(e) => {
            warn!("Error fetching BTC price: {:#}", e);
            info!("Using fallback BTC price: ${:.2} USD", fallback);
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct FixedPrice(Option<f64>);

    #[async_trait]
    impl PriceService for FixedPrice {
        async fn get_btc_price(&self) -> Result<f64> {
            self.0.ok_or_else(|| anyhow!("price feed down"))
        }
    }

    #[tokio::test]
    async fn test_uses_live_price() {
        assert_eq!(resolve_btc_price(&FixedPrice(Some(64_000.5)), 50_000.0).await, 64_000.5);
    }

    #[tokio::test]
    async fn test_failure_uses_fallback_exactly() {
        assert_eq!(resolve_btc_price(&FixedPrice(None), 50_000.0).await, 50_000.0);
    }

    #[tokio::test]
    async fn test_zero_price_uses_fallback() {
        assert_eq!(resolve_btc_price(&FixedPrice(Some(0.0)), 42_000.0).await, 42_000.0);
    }

    #[test]
    fn test_parse_simple_price_body() {
        let body = r#"{"bitcoin": {"usd": 67123.45}}"#;
        let parsed: SimplePriceResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.bitcoin.usd, 67123.45);
    }
}
