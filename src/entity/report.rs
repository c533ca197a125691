use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::entity::{NativeTransfer, TokenTransfer};

/// JSON document printed by `btc_monitor`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BitcoinReport {
    pub success: bool,
    pub address: String,
    pub btc_price: f64,
    pub token_transfers: Vec<TokenTransfer>,
    pub bitcoin_transfers: Vec<NativeTransfer>,
    pub summary: BitcoinSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BitcoinSummary {
    pub token_count: usize,
    pub bitcoin_count: usize,
    pub total_btc_value: f64,
    pub total_usd_value: f64,
}

impl BitcoinReport {
    pub fn new(
        address: &str,
        btc_price: f64,
        token_transfers: Vec<TokenTransfer>,
        bitcoin_transfers: Vec<NativeTransfer>,
    ) -> Self {
        let summary = BitcoinSummary {
            token_count: token_transfers.len(),
            bitcoin_count: bitcoin_transfers.len(),
            total_btc_value: bitcoin_transfers.iter().map(|t| t.amount_btc).sum(),
            total_usd_value: bitcoin_transfers.iter().map(|t| t.amount_usd).sum(),
        };

        Self {
            success: true,
            address: address.to_string(),
            btc_price,
            token_transfers,
            bitcoin_transfers,
            summary,
        }
    }
}

/// JSON document printed by the token-only monitors (Ethereum, TRON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferReport<T> {
    pub success: bool,
    pub address: String,
    pub transfers: Vec<T>,
    pub summary: TransferSummary,
}

impl<T> TransferReport<T> {
    pub fn new(address: &str, transfers: Vec<T>, summary: TransferSummary) -> Self {
        Self {
            success: true,
            address: address.to_string(),
            transfers,
            summary,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransferSummary {
    pub total_transfers: usize,
    pub total_value: f64,
    pub token_totals: BTreeMap<String, f64>,
}

impl TransferSummary {
    /// Sum `(symbol, amount)` pairs into an overall and per-token total.
    pub fn from_amounts<'a, I>(amounts: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut summary = TransferSummary::default();

        for (symbol, amount) in amounts {
            summary.total_transfers += 1;
            summary.total_value += amount;
            *summary.token_totals.entry(symbol.to_string()).or_insert(0.0) += amount;
        }

        summary
    }
}

/// Printed instead of a report when a run fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureReport {
    pub success: bool,
    pub error: String,
    pub address: String,
}

impl FailureReport {
    pub fn new(address: &str, error: &anyhow::Error) -> Self {
        Self {
            success: false,
            error: error.to_string(),
            address: address.to_string(),
        }
    }
}
