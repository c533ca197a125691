use serde::{Deserialize, Serialize};

/// Incoming TRC-20 stablecoin transfer scaled to token units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TronTransfer {
    pub transaction_id: String,
    pub date: String,
    pub timestamp: i64, // Block time in milliseconds
    pub from_address: String,
    pub to_address: String,
    pub token_symbol: String,
    pub token_name: String,
    pub amount: f64,
    pub raw_amount: u128,
    pub token_decimals: u32,
    pub status: String,
    pub confirmed: bool,
    pub contract_address: String,
    pub block_number: u64,
}

impl TronTransfer {
    pub const CSV_HEADERS: [&'static str; 10] = [
        "date",
        "token_symbol",
        "token_name",
        "amount",
        "from_address",
        "to_address",
        "transaction_id",
        "status",
        "confirmed",
        "contract_address",
    ];

    pub fn csv_record(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.token_symbol.clone(),
            self.token_name.clone(),
            self.amount.to_string(),
            self.from_address.clone(),
            self.to_address.clone(),
            self.transaction_id.clone(),
            self.status.clone(),
            if self.confirmed { "True" } else { "False" }.to_string(),
            self.contract_address.clone(),
        ]
    }
}
