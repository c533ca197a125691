pub mod chains;
pub mod commands;
pub mod di;
pub mod entity;
pub mod interactor;
pub mod presenter;
pub mod utils;
pub mod view;

// Re-export commonly used items
pub use chains::bitcoin::BitcoinConfig;
pub use chains::ethereum::EthereumConfig;
pub use chains::tron::TronConfig;
pub use di::*;
pub use entity::*;
pub use interactor::*;
pub use presenter::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
