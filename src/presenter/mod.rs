pub mod bitcoin_presenter;
pub mod ethereum_presenter;
pub mod tron_presenter;

pub use bitcoin_presenter::{BitcoinPresenter, BitcoinPresenterImpl};
pub use ethereum_presenter::{EthereumPresenter, EthereumPresenterImpl};
pub use tron_presenter::{TronPresenter, TronPresenterImpl};
