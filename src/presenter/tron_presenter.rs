use crate::entity::FailureReport;
use crate::interactor::tron_interactor::TronInteractor;
use crate::view::tron_view::TronView;
use anyhow::Result;
use async_trait::async_trait;
use log::error;
use std::sync::Arc;

#[async_trait]
pub trait TronPresenter: Send + Sync {
    async fn run(&self, address: &str) -> Result<()>;
}

pub struct TronPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> TronPresenterImpl<I, V>
where
    I: TronInteractor,
    V: TronView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I, V> TronPresenter for TronPresenterImpl<I, V>
where
    I: TronInteractor + Send + Sync,
    V: TronView + Send + Sync,
{
    async fn run(&self, address: &str) -> Result<()> {
        match self.interactor.monitor_address(address).await {
            Ok(report) => {
                self.view.save_transfers(&report);
                self.view.display_summary(&report);
                self.view.display_report(&report)
            }
            Err(e) => {
                error!("Error during TRON monitoring: {:#}", e);
                self.view.display_failure(&FailureReport::new(address, &e))
            }
        }
    }
}
