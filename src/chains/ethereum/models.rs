use serde::Deserialize;
use serde_json::Value;

use crate::chains::serde_utils::string_or_number;

/// Etherscan response envelope. `result` is a list on success and a message
/// string on failure, so it stays untyped until `status` is known.
#[derive(Debug, Deserialize)]
pub struct EtherscanResponse {
    #[serde(default, deserialize_with = "string_or_number::deserialize")]
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub result: Value,
}

impl EtherscanResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "1"
    }

    pub fn mentions_deprecation(&self) -> bool {
        let result_text = self.result.as_str().unwrap_or_default();
        self.message.to_lowercase().contains("deprecat")
            || result_text.to_lowercase().contains("deprecat")
    }
}

/// One `tokentx` row. Etherscan sends every field as a string.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Erc20Transfer {
    #[serde(default, deserialize_with = "string_or_number::deserialize")]
    pub block_number: String,
    #[serde(default, deserialize_with = "string_or_number::deserialize")]
    pub time_stamp: String,
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub contract_address: String,
    #[serde(default, deserialize_with = "string_or_number::deserialize")]
    pub value: String,
    #[serde(default)]
    pub token_name: String,
    #[serde(default)]
    pub token_symbol: String,
    #[serde(default, deserialize_with = "string_or_number::deserialize")]
    pub token_decimal: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokentx_row() {
        let body = r#"{
            "status": "1",
            "message": "OK",
            "result": [{
                "blockNumber": "19000000",
                "timeStamp": "1700000000",
                "hash": "0xhash",
                "from": "0xsender",
                "to": "0xtarget",
                "contractAddress": "0xdac17f958d2ee523a2206206994597c13d831ec7",
                "value": "1000000",
                "tokenName": "Tether USD",
                "tokenSymbol": "USDT",
                "tokenDecimal": "6"
            }]
        }"#;
        let response: EtherscanResponse = serde_json::from_str(body).unwrap();
        assert!(response.is_ok());

        let rows: Vec<Erc20Transfer> = serde_json::from_value(response.result).unwrap();
        assert_eq!(rows[0].block_number, "19000000");
        assert_eq!(rows[0].token_decimal, "6");
        assert_eq!(rows[0].contract_address, "0xdac17f958d2ee523a2206206994597c13d831ec7");
    }

    #[test]
    fn test_error_envelope_with_string_result() {
        let body = r#"{
            "status": "0",
            "message": "NOTOK",
            "result": "You are using a deprecated V1 endpoint, switch to Etherscan API V2"
        }"#;
        let response: EtherscanResponse = serde_json::from_str(body).unwrap();

        assert!(!response.is_ok());
        assert!(response.mentions_deprecation());
    }
}
