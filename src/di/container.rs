use std::sync::Arc;

use anyhow::Result;

use crate::chains::bitcoin::{
    AddressHistorySource, BitcoinConfig, BlockchainInfoSource, BlockstreamSource,
    CoinGeckoPriceService, HistorySourceChain, OmniExplorerLedger, PriceService, TokenLedger,
};
use crate::chains::ethereum::{EthereumConfig, EtherscanClient, TokenTransferSource};
use crate::chains::http::build_client;
use crate::chains::tron::{Trc20TransferSource, TronConfig, TronScanClient};
use crate::interactor::{BitcoinInteractorImpl, EthereumInteractorImpl, TronInteractorImpl};
use crate::presenter::{BitcoinPresenterImpl, EthereumPresenterImpl, TronPresenterImpl};
use crate::view::{ConsoleBitcoinView, ConsoleEthereumView, ConsoleTronView};

pub type BitcoinMonitor = BitcoinPresenterImpl<BitcoinInteractorImpl, ConsoleBitcoinView>;
pub type EthereumMonitor = EthereumPresenterImpl<EthereumInteractorImpl, ConsoleEthereumView>;
pub type TronMonitor = TronPresenterImpl<TronInteractorImpl, ConsoleTronView>;

/// Services of the Bitcoin pipeline
pub struct BitcoinContainer {
    history_sources: Arc<HistorySourceChain>,
    token_ledger: Arc<dyn TokenLedger + Send + Sync>,
    price_service: Arc<dyn PriceService + Send + Sync>,
    config: BitcoinConfig,
}

impl BitcoinContainer {
    pub fn new(config: BitcoinConfig) -> Result<Self> {
        // History sources have no timeout; price and ledger calls do
        let http_client = build_client(&config.user_agent, None)?;
        let timeout_client = build_client(&config.user_agent, Some(config.request_timeout))?;

        let sources: Vec<Arc<dyn AddressHistorySource>> = vec![
            Arc::new(BlockchainInfoSource::new(
                http_client.clone(),
                &config.primary_api_url,
            )),
            Arc::new(BlockstreamSource::new(http_client, &config.secondary_api_url)),
        ];
        let history_sources = Arc::new(HistorySourceChain::new(sources));

        let token_ledger = Arc::new(OmniExplorerLedger::new(
            timeout_client.clone(),
            &config.omni_api_url,
        )) as Arc<dyn TokenLedger + Send + Sync>;

        let price_service = Arc::new(CoinGeckoPriceService::new(
            timeout_client,
            &config.price_api_url,
        )) as Arc<dyn PriceService + Send + Sync>;

        Ok(Self {
            history_sources,
            token_ledger,
            price_service,
            config,
        })
    }

    pub fn history_sources(&self) -> Arc<HistorySourceChain> {
        self.history_sources.clone()
    }

    pub fn token_ledger(&self) -> Arc<dyn TokenLedger + Send + Sync> {
        self.token_ledger.clone()
    }

    pub fn price_service(&self) -> Arc<dyn PriceService + Send + Sync> {
        self.price_service.clone()
    }

    pub fn config(&self) -> &BitcoinConfig {
        &self.config
    }

    pub fn monitor(&self) -> BitcoinMonitor {
        let interactor = BitcoinInteractorImpl::new(
            self.history_sources(),
            self.token_ledger(),
            self.price_service(),
            self.config.clone(),
        );
        let view = ConsoleBitcoinView::new(
            self.config.token_csv_path(),
            self.config.native_csv_path(),
            self.config.merged_csv_path(),
            self.config.write_csv,
        );

        BitcoinPresenterImpl::new(Arc::new(interactor), Arc::new(view))
    }
}

/// Services of the Ethereum pipeline
pub struct EthereumContainer {
    transfer_source: Arc<dyn TokenTransferSource + Send + Sync>,
    config: EthereumConfig,
}

impl EthereumContainer {
    pub fn new(config: EthereumConfig) -> Result<Self> {
        let http_client = build_client(&config.user_agent, None)?;
        let transfer_source = Arc::new(EtherscanClient::new(http_client, config.clone()))
            as Arc<dyn TokenTransferSource + Send + Sync>;

        Ok(Self {
            transfer_source,
            config,
        })
    }

    pub fn transfer_source(&self) -> Arc<dyn TokenTransferSource + Send + Sync> {
        self.transfer_source.clone()
    }

    pub fn config(&self) -> &EthereumConfig {
        &self.config
    }

    pub fn monitor(&self) -> EthereumMonitor {
        let interactor = EthereumInteractorImpl::new(self.transfer_source(), self.config.clone());
        let view = ConsoleEthereumView::new(self.config.csv_path(), self.config.write_csv);

        EthereumPresenterImpl::new(Arc::new(interactor), Arc::new(view))
    }
}

/// Services of the TRON pipeline
pub struct TronContainer {
    transfer_source: Arc<dyn Trc20TransferSource + Send + Sync>,
    config: TronConfig,
}

impl TronContainer {
    pub fn new(config: TronConfig) -> Result<Self> {
        let http_client = build_client(&config.user_agent, None)?;
        let transfer_source = Arc::new(TronScanClient::new(http_client, config.clone()))
            as Arc<dyn Trc20TransferSource + Send + Sync>;

        Ok(Self {
            transfer_source,
            config,
        })
    }

    pub fn transfer_source(&self) -> Arc<dyn Trc20TransferSource + Send + Sync> {
        self.transfer_source.clone()
    }

    pub fn config(&self) -> &TronConfig {
        &self.config
    }

    pub fn monitor(&self) -> TronMonitor {
        let interactor = TronInteractorImpl::new(self.transfer_source(), self.config.clone());
        let view = ConsoleTronView::new(self.config.csv_path(), self.config.write_csv);

        TronPresenterImpl::new(Arc::new(interactor), Arc::new(view))
    }
}
