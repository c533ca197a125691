use serde::{Deserialize, Serialize};

/// Plain BTC payment to the monitored address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NativeTransfer {
    pub date: String,
    pub amount_btc: f64,
    pub amount_usd: f64,
    pub amount_satoshi: u64,
    pub from_addresses: Vec<String>,
    pub transaction_id: String,
    #[serde(rename = "type")]
    pub transfer_type: String,
}

impl NativeTransfer {
    pub const INCOMING: &'static str = "incoming";

    pub const CSV_HEADERS: [&'static str; 7] = [
        "date",
        "amount_btc",
        "amount_usd",
        "amount_satoshi",
        "from_addresses",
        "transaction_id",
        "type",
    ];

    pub fn csv_record(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.amount_btc.to_string(),
            self.amount_usd.to_string(),
            self.amount_satoshi.to_string(),
            self.from_addresses.join(", "),
            self.transaction_id.clone(),
            self.transfer_type.clone(),
        ]
    }
}
