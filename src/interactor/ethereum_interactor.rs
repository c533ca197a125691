use crate::chains::ethereum::{Erc20Transfer, EthereumConfig, TokenTransferSource};
use crate::entity::{EthereumTransfer, TargetToken, TransferReport, TransferSummary};
use crate::utils::{
    addresses_match, format_timestamp, format_with_commas, parse_formatted_amount, scale_amount,
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{error, info, warn};
use std::sync::Arc;

#[async_trait]
pub trait EthereumInteractor: Send + Sync {
    /// Incoming stablecoin transfers of `address` with per-token totals
    async fn monitor_address(&self, address: &str) -> Result<TransferReport<EthereumTransfer>>;
}

pub struct EthereumInteractorImpl {
    transfer_source: Arc<dyn TokenTransferSource + Send + Sync>,
    config: EthereumConfig,
}

impl EthereumInteractorImpl {
    pub fn new(
        transfer_source: Arc<dyn TokenTransferSource + Send + Sync>,
        config: EthereumConfig,
    ) -> Self {
        Self {
            transfer_source,
            config,
        }
    }
}

#[async_trait]
impl EthereumInteractor for EthereumInteractorImpl {
    async fn monitor_address(&self, address: &str) -> Result<TransferReport<EthereumTransfer>> {
        let raw_transfers = match self.transfer_source.fetch_token_transfers(address).await {
            Ok(transfers) => transfers,
            Err(e) => {
                error!("Error fetching token transfers: {:#}", e);
                Vec::new()
            }
        };

        let incoming = filter_incoming(&raw_transfers, address);
        info!("Found {} incoming token transfers", incoming.len());

        let transfers: Vec<EthereumTransfer> = filter_target_tokens(&incoming, &self.config)
            .into_iter()
            .filter_map(|(raw, token)| match to_ethereum_transfer(raw, token) {
                Ok(transfer) => Some(transfer),
                Err(e) => {
                    warn!("Skipping transfer {}: {:#}", raw.hash, e);
                    None
                }
            })
            .collect();
        info!("Found {} incoming stablecoin transfers", transfers.len());

        let summary = summarize(&transfers)?;
        Ok(TransferReport::new(address, transfers, summary))
    }
}

/// Transfers whose recipient is `target`, compared case-insensitively
pub fn filter_incoming<'a>(transfers: &'a [Erc20Transfer], target: &str) -> Vec<&'a Erc20Transfer> {
    transfers
        .iter()
        .filter(|t| addresses_match(&t.to, target))
        .collect()
}

/// Pair each transfer with the first configured stablecoin its contract matches
pub fn filter_target_tokens<'a>(
    transfers: &[&'a Erc20Transfer],
    config: &EthereumConfig,
) -> Vec<(&'a Erc20Transfer, TargetToken)> {
    transfers
        .iter()
        .filter_map(|t| {
            config
                .token_for_contract(&t.contract_address)
                .map(|token| (*t, token))
        })
        .collect()
}

/// Scale the raw value by the declared decimals and format it for display
pub fn to_ethereum_transfer(raw: &Erc20Transfer, token: TargetToken) -> Result<EthereumTransfer> {
    let decimals: u32 = raw
        .token_decimal
        .trim()
        .parse()
        .with_context(|| format!("invalid tokenDecimal {:?}", raw.token_decimal))?;
    let amount = scale_amount(&raw.value, decimals)?;
    let timestamp: i64 = raw.time_stamp.trim().parse().unwrap_or(0);

    Ok(EthereumTransfer {
        date: format_timestamp(timestamp),
        token: token.symbol().to_string(),
        amount: format_with_commas(amount, 2),
        from: raw.from.clone(),
        transaction_hash: raw.hash.clone(),
        block_number: raw.block_number.clone(),
    })
}

/// Totals at par value, summed from the displayed two-decimal amounts
pub fn summarize(transfers: &[EthereumTransfer]) -> Result<TransferSummary> {
    let mut amounts = Vec::with_capacity(transfers.len());
    for transfer in transfers {
        amounts.push((transfer.token.as_str(), parse_formatted_amount(&transfer.amount)?));
    }

    Ok(TransferSummary::from_amounts(amounts))
}
