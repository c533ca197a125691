use crate::entity::FailureReport;
use crate::interactor::bitcoin_interactor::BitcoinInteractor;
use crate::view::bitcoin_view::BitcoinView;
use anyhow::Result;
use async_trait::async_trait;
use log::error;
use std::sync::Arc;

#[async_trait]
pub trait BitcoinPresenter: Send + Sync {
    /// Run one monitoring pass and emit its outputs. Monitoring failures are
    /// reported as a failure document; only output errors are returned.
    async fn run(&self, address: &str) -> Result<()>;
}

pub struct BitcoinPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> BitcoinPresenterImpl<I, V>
where
    I: BitcoinInteractor,
    V: BitcoinView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I, V> BitcoinPresenter for BitcoinPresenterImpl<I, V>
where
    I: BitcoinInteractor + Send + Sync,
    V: BitcoinView + Send + Sync,
{
    async fn run(&self, address: &str) -> Result<()> {
        match self.interactor.monitor_address(address).await {
            Ok(report) => {
                self.view.save_transfers(&report);
                self.view.display_summary(&report);
                self.view.display_report(&report)
            }
            Err(e) => {
                error!("Error during Bitcoin monitoring: {:#}", e);
                self.view.display_failure(&FailureReport::new(address, &e))
            }
        }
    }
}
