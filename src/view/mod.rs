pub mod bitcoin_view;
pub mod csv_view;
pub mod ethereum_view;
pub mod json_view;
pub mod tron_view;

pub use bitcoin_view::{BitcoinView, ConsoleBitcoinView};
pub use ethereum_view::{ConsoleEthereumView, EthereumView};
pub use json_view::{print_json, write_json};
pub use tron_view::{ConsoleTronView, TronView};
