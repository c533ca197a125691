pub mod bitcoin_interactor;
pub mod ethereum_interactor;
pub mod tron_interactor;

pub use bitcoin_interactor::{BitcoinInteractor, BitcoinInteractorImpl};
pub use ethereum_interactor::{EthereumInteractor, EthereumInteractorImpl};
pub use tron_interactor::{TronInteractor, TronInteractorImpl};
