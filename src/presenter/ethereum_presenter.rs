use crate::entity::FailureReport;
use crate::interactor::ethereum_interactor::EthereumInteractor;
use crate::view::ethereum_view::EthereumView;
use anyhow::Result;
use async_trait::async_trait;
use log::error;
use std::sync::Arc;

#[async_trait]
pub trait EthereumPresenter: Send + Sync {
    /// Run one monitoring pass and emit its outputs. Monitoring failures are
    /// reported as a failure document; only output errors are returned.
    async fn run(&self, address: &str) -> Result<()>;
}

pub struct EthereumPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> EthereumPresenterImpl<I, V>
where
    I: EthereumInteractor,
    V: EthereumView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I, V> EthereumPresenter for EthereumPresenterImpl<I, V>
where
    I: EthereumInteractor + Send + Sync,
    V: EthereumView + Send + Sync,
{
    async fn run(&self, address: &str) -> Result<()> {
        match self.interactor.monitor_address(address).await {
            Ok(report) => {
                self.view.save_transfers(&report);
                self.view.display_summary(&report);
                self.view.display_report(&report)
            }
            Err(e) => {
                error!("Error during Ethereum monitoring: {:#}", e);
                self.view.display_failure(&FailureReport::new(address, &e))
            }
        }
    }
}
