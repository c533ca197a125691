//! Ethereum address monitor.
//!
//! Prints one JSON report on stdout; progress goes to stderr through the logger.
use clap::Parser;
use dotenv::dotenv;
use log::{error, info};
use stablecoin_monitor::commands::EthArgs;
use stablecoin_monitor::view::print_json;
use stablecoin_monitor::{EthereumConfig, EthereumContainer, EthereumPresenter, FailureReport};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = EthArgs::parse().into_config(EthereumConfig::from_env());
    let address = config.target_address.clone();
    info!("eth_monitor v{} for {}", stablecoin_monitor::VERSION, address);

    match EthereumContainer::new(config) {
        Ok(container) => {
            let monitor = container.monitor();
            monitor.run(&container.config().target_address).await
        }
        Err(e) => {
            error!("Failed to initialize Ethereum monitor: {:#}", e);
            print_json(&FailureReport::new(&address, &e))
        }
    }
}
