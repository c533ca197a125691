use serde::{Deserialize, Serialize};

/// Layered-token (Omni) transfer received by a Bitcoin address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenTransfer {
    pub date: String,
    pub token_symbol: String,
    pub token_name: String,
    pub amount: String, // Decimal string as reported by the ledger
    pub from_address: String,
    pub to_address: String,
    pub transaction_id: String,
    pub status: String, // "1" valid, "0" invalid
    pub confirmed: bool,
    pub contract_address: String,
    pub protocol: String,
}

impl TokenTransfer {
    pub const CSV_HEADERS: [&'static str; 11] = [
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
        "protocol",
    ];

    pub fn csv_record(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.token_symbol.clone(),
            self.token_name.clone(),
            self.amount.clone(),
            self.from_address.clone(),
            self.to_address.clone(),
            self.transaction_id.clone(),
            self.status.clone(),
            if self.confirmed { "True" } else { "False" }.to_string(),
            self.contract_address.clone(),
            self.protocol.clone(),
        ]
    }
}
