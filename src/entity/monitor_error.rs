#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Explorer API error: {0}")]
    Api(String),

    #[error("Token {symbol} not supported. Available: {available:?}")]
    UnsupportedToken {
        symbol: String,
        available: Vec<String>,
    },

    #[error("No address history source returned data for {0}")]
    NoHistorySource(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
