// Default monitored addresses
pub const DEFAULT_BTC_ADDRESS: &str = "bc1qxm0m3g2k0lfj37slknha946hgk4aekhwc7dsj3";
pub const DEFAULT_ETH_ADDRESS: &str = "0x1896e1468878D0A8dE79398775200E6f00A2B6Dc";
pub const DEFAULT_TRON_ADDRESS: &str = "TQJAhuv9NYNcsvpvThRXZHafQNa1hmBGSi";

// ERC-20 stablecoin contracts (Ethereum mainnet)
pub const ETH_USDT_CONTRACT: &str = "0xdac17f958d2ee523a2206206994597c13d831ec7";
pub const ETH_USDC_CONTRACT: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";
pub const ETH_DAI_CONTRACT: &str = "0x6b175474e89094c44da98b954eedeac495271d0f";

// TRC-20 stablecoin contracts
pub const TRON_USDT_CONTRACT: &str = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t";
pub const TRON_USDC_CONTRACT: &str = "TEkxiTehnzSmSe2XqrBj4w32RUN966rdz8";
pub const TRON_DAI_CONTRACT: &str = "TKfjV9RNKJJCqPvBtK8L7Knykh7DNWvnYt";

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
