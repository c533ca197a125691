use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::Value;

use crate::chains::bitcoin::models::OmniTransaction;
use crate::chains::http::get_json;

/// Per-transaction lookup of layered-token activity.
///
/// Implementations fail closed: a missing record, an unknown transaction and
/// an unreachable ledger all come back as `Ok(None)`.
#[async_trait]
pub trait TokenLedger: Send + Sync {
    async fn lookup(&self, tx_hash: &str) -> Result<Option<OmniTransaction>>;
}

/// Omni Layer explorer (`/transaction/tx/{hash}`)
pub struct OmniExplorerLedger {
    http_client: Client,
    base_url: String,
}

impl OmniExplorerLedger {
    /// `http_client` is expected to carry the short request timeout
    pub fn new(http_client: Client, base_url: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl TokenLedger for OmniExplorerLedger {
    async fn lookup(&self, tx_hash: &str) -> Result<Option<OmniTransaction>> {
        let url = format!("{}/transaction/tx/{}", self.base_url, tx_hash);

        // Most transactions carry no Omni payload, so failures stay at debug level
        match get_json::<Value>(self.http_client.get(&url), "Omni explorer").await {
            Ok(body) => Ok(parse_ledger_body(body)),
            Err(e) => {
                debug!("No Omni data for {}: {:#}", tx_hash, e);
                Ok(None)
            }
        }
    }
}

/// The explorer answers with either a single object or a list; the first
/// list element is used. Anything else, including error objects, is no data.
pub fn parse_ledger_body(body: Value) -> Option<OmniTransaction> {
    let record = match body {
        Value::Array(mut items) if !items.is_empty() => items.swap_remove(0),
        Value::Object(_) => body,
        _ => return None,
    };

    if record.get("propertyid").is_none() && record.get("propertyname").is_none() {
        return None;
    }

    serde_json::from_value(record).ok()
}
