use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::chains::constants::{DEFAULT_BTC_ADDRESS, DEFAULT_USER_AGENT};
use crate::entity::TargetToken;

/// Bitcoin monitor configuration
#[derive(Debug, Clone)]
pub struct BitcoinConfig {
    /// Address being monitored
    pub target_address: String,

    /// Token names matched against layered-token property names
    pub target_tokens: Vec<TargetToken>,

    /// blockchain.info base URL (primary history source)
    pub primary_api_url: String,

    /// Esplora/Blockstream base URL (fallback history source)
    pub secondary_api_url: String,

    /// Spot price endpoint returning `{"bitcoin": {"usd": ..}}`
    pub price_api_url: String,

    /// Omni explorer base URL for per-transaction token lookups
    pub omni_api_url: String,

    /// Price used when the spot price cannot be fetched
    pub fallback_price_usd: f64,

    /// Maximum transactions requested from the history source
    pub tx_limit: usize,

    /// Token lookups issued concurrently per batch
    pub lookup_batch_size: usize,

    /// Pause between lookup batches
    pub lookup_batch_delay: Duration,

    /// Timeout for the price and token-ledger calls
    pub request_timeout: Duration,

    pub user_agent: String,

    /// Directory receiving the CSV files
    pub output_dir: PathBuf,

    pub write_csv: bool,
}

impl Default for BitcoinConfig {
    fn default() -> Self {
        Self {
            target_address: DEFAULT_BTC_ADDRESS.to_string(),
            target_tokens: TargetToken::all().to_vec(),
            primary_api_url: "https://blockchain.info".to_string(),
            secondary_api_url: "https://blockstream.info/api".to_string(),
            price_api_url: "https://api.coingecko.com/api/v3/simple/price?ids=bitcoin&vs_currencies=usd"
                .to_string(),
            omni_api_url: "https://api.omniexplorer.info/v1".to_string(),
            fallback_price_usd: 50_000.0,
            tx_limit: 1000,
            lookup_batch_size: 5,
            lookup_batch_delay: Duration::from_millis(500),
            request_timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            output_dir: PathBuf::from("."),
            write_csv: true,
        }
    }
}

impl BitcoinConfig {
    /// Creates configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            target_address: env::var("BTC_TARGET_ADDRESS").unwrap_or(defaults.target_address),
            primary_api_url: env::var("BTC_PRIMARY_API_URL").unwrap_or(defaults.primary_api_url),
            secondary_api_url: env::var("BTC_SECONDARY_API_URL")
                .unwrap_or(defaults.secondary_api_url),
            price_api_url: env::var("BTC_PRICE_API_URL").unwrap_or(defaults.price_api_url),
            omni_api_url: env::var("BTC_OMNI_API_URL").unwrap_or(defaults.omni_api_url),
            fallback_price_usd: env::var("BTC_FALLBACK_PRICE_USD")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.fallback_price_usd),
            user_agent: env::var("MONITOR_USER_AGENT").unwrap_or(defaults.user_agent),
            output_dir: env::var("MONITOR_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            ..defaults
        }
    }

    pub fn token_csv_path(&self) -> PathBuf {
        self.output_dir.join("btc_incoming_token_transfers.csv")
    }

    pub fn native_csv_path(&self) -> PathBuf {
        self.output_dir.join("btc_bitcoin_transfers.csv")
    }

    /// Shared token file that Bitcoin token transfers are merged into when present
    pub fn merged_csv_path(&self) -> PathBuf {
        self.output_dir.join("incoming_token_transfers.csv")
    }
}
