use serde::{Deserialize, Serialize};

use crate::chains::serde_utils::{string_or_number, u64_or_string};

// Canonical address history (blockchain.info `rawaddr` shape). Every history
// source normalizes into these types.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressHistory {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub total_received: u64,
    #[serde(default)]
    pub total_sent: u64,
    #[serde(default)]
    pub final_balance: u64,
    #[serde(default)]
    pub txs: Vec<RawTransaction>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTransaction {
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub time: i64,
    #[serde(default)]
    pub block_height: Option<u64>,
    #[serde(default)]
    pub inputs: Vec<TxInput>,
    #[serde(default)]
    pub out: Vec<TxOutput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TxInput {
    #[serde(default)]
    pub prev_out: Option<TxOutput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TxOutput {
    #[serde(default)]
    pub addr: Option<String>,
    #[serde(default)]
    pub value: u64,
}

// Esplora (Blockstream) `address/{address}/txs` response

#[derive(Debug, Clone, Deserialize)]
pub struct EsploraTransaction {
    #[serde(default)]
    pub txid: String,
    #[serde(default)]
    pub status: EsploraStatus,
    #[serde(default)]
    pub vin: Vec<EsploraInput>,
    #[serde(default)]
    pub vout: Vec<EsploraOutput>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EsploraStatus {
    #[serde(default)]
    pub confirmed: bool,
    #[serde(default)]
    pub block_height: Option<u64>,
    #[serde(default)]
    pub block_time: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EsploraInput {
    #[serde(default)]
    pub prevout: Option<EsploraOutput>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EsploraOutput {
    #[serde(default)]
    pub scriptpubkey_address: Option<String>,
    #[serde(default)]
    pub value: u64,
}

impl From<EsploraOutput> for TxOutput {
    fn from(out: EsploraOutput) -> Self {
        Self {
            addr: out.scriptpubkey_address,
            value: out.value,
        }
    }
}

impl From<EsploraTransaction> for RawTransaction {
    fn from(tx: EsploraTransaction) -> Self {
        Self {
            hash: tx.txid,
            time: tx.status.block_time.unwrap_or(0),
            block_height: tx.status.block_height,
            inputs: tx
                .vin
                .into_iter()
                .map(|vin| TxInput {
                    prev_out: vin.prevout.map(TxOutput::from),
                })
                .collect(),
            out: tx.vout.into_iter().map(TxOutput::from).collect(),
        }
    }
}

impl AddressHistory {
    /// Reshape an Esplora transaction list. Esplora carries no address totals,
    /// so they are reported as zero.
    pub fn from_esplora(address: &str, txs: Vec<EsploraTransaction>) -> Self {
        Self {
            address: address.to_string(),
            total_received: 0,
            total_sent: 0,
            final_balance: 0,
            txs: txs.into_iter().map(RawTransaction::from).collect(),
        }
    }
}

/// Omni Layer transaction as returned by the token-ledger explorer
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OmniTransaction {
    #[serde(default)]
    pub txid: String,
    #[serde(default)]
    pub sendingaddress: String,
    #[serde(default)]
    pub referenceaddress: String,
    #[serde(default, deserialize_with = "u64_or_string::deserialize")]
    pub propertyid: u64,
    #[serde(default)]
    pub propertyname: String,
    #[serde(default, deserialize_with = "string_or_number::deserialize")]
    pub amount: String,
    #[serde(default)]
    pub valid: bool,
}

/// CoinGecko `simple/price` response for bitcoin
#[derive(Debug, Deserialize)]
pub struct SimplePriceResponse {
    pub bitcoin: UsdQuote,
}

#[derive(Debug, Deserialize)]
pub struct UsdQuote {
    pub usd: f64,
}
