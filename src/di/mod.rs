pub mod container;

pub use container::{
    BitcoinContainer, BitcoinMonitor, EthereumContainer, EthereumMonitor, TronContainer,
    TronMonitor,
};
