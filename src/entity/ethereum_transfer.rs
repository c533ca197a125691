use serde::{Deserialize, Serialize};

/// Incoming ERC-20 stablecoin transfer, already formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EthereumTransfer {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Token")]
    pub token: String,
    #[serde(rename = "Amount")]
    pub amount: String,
    #[serde(rename = "From")]
    pub from: String,
    #[serde(rename = "Transaction Hash")]
    pub transaction_hash: String,
    #[serde(rename = "Block Number")]
    pub block_number: String,
}

impl EthereumTransfer {
    pub const CSV_HEADERS: [&'static str; 6] = [
        "Date",
        "Token",
        "Amount",
        "From",
        "Transaction Hash",
        "Block Number",
    ];

    pub fn csv_record(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.token.clone(),
            self.amount.clone(),
            self.from.clone(),
            self.transaction_hash.clone(),
            self.block_number.clone(),
        ]
    }
}
