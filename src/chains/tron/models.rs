use serde::Deserialize;
use serde_json::Value;

use crate::chains::serde_utils::{string_or_number, u64_or_string};

/// TronScan `token_trc20/transfers` response. Rows are kept raw so a single
/// malformed record does not sink the whole page.
#[derive(Debug, Default, Deserialize)]
pub struct TronScanResponse {
    #[serde(default, deserialize_with = "u64_or_string::deserialize")]
    pub total: u64,
    #[serde(default)]
    pub token_transfers: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Trc20Transfer {
    #[serde(default)]
    pub transaction_id: String,
    #[serde(default, deserialize_with = "u64_or_string::deserialize")]
    pub block_ts: u64, // milliseconds
    #[serde(default, deserialize_with = "u64_or_string::deserialize")]
    pub block: u64,
    #[serde(default)]
    pub from_address: String,
    #[serde(default)]
    pub to_address: String,
    #[serde(default)]
    pub contract_address: String,
    #[serde(default, deserialize_with = "string_or_number::deserialize")]
    pub quant: String,
    #[serde(default, deserialize_with = "string_or_number::deserialize")]
    pub status: String,
    #[serde(default)]
    pub confirmed: bool,
    #[serde(default, rename = "tokenInfo")]
    pub token_info: TokenInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TokenInfo {
    #[serde(default, rename = "tokenName")]
    pub token_name: String,
    #[serde(default, rename = "tokenDecimal", deserialize_with = "u64_or_string::deserialize")]
    pub token_decimal: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_transfer_row() {
        let row = serde_json::json!({
            "transaction_id": "abc123",
            "block_ts": 1700000000000u64,
            "block": 56000000,
            "from_address": "TSender",
            "to_address": "TTarget",
            "contract_address": "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t",
            "quant": "25000000",
            "status": 0,
            "confirmed": true,
            "tokenInfo": {"tokenName": "Tether USD", "tokenAbbr": "USDT", "tokenDecimal": 6}
        });
        let transfer: Trc20Transfer = serde_json::from_value(row).unwrap();

        assert_eq!(transfer.quant, "25000000");
        assert_eq!(transfer.status, "0");
        assert_eq!(transfer.token_info.token_decimal, 6);
        assert_eq!(transfer.token_info.token_name, "Tether USD");
    }

    #[test]
    fn test_missing_transfer_list() {
        let response: TronScanResponse = serde_json::from_str(r#"{"total": 0}"#).unwrap();
        assert!(response.token_transfers.is_none());
    }
}
