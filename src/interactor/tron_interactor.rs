use crate::chains::tron::{Trc20Transfer, Trc20TransferSource, TronConfig};
use crate::entity::{TokenContract, TransferReport, TransferSummary, TronTransfer};
use crate::utils::{addresses_match, format_timestamp_millis};
use anyhow::Result;
use async_trait::async_trait;
use log::{error, info, warn};
use std::sync::Arc;

#[async_trait]
pub trait TronInteractor: Send + Sync {
    /// Incoming TRC-20 transfers of `address` for every configured token symbol
    async fn monitor_address(&self, address: &str) -> Result<TransferReport<TronTransfer>>;
}

pub struct TronInteractorImpl {
    transfer_source: Arc<dyn Trc20TransferSource + Send + Sync>,
    config: TronConfig,
}

impl TronInteractorImpl {
    pub fn new(transfer_source: Arc<dyn Trc20TransferSource + Send + Sync>, config: TronConfig) -> Self {
        Self {
            transfer_source,
            config,
        }
    }
}

#[async_trait]
impl TronInteractor for TronInteractorImpl {
    async fn monitor_address(&self, address: &str) -> Result<TransferReport<TronTransfer>> {
        // Unknown symbols fail the run before any request is made
        let contracts = self
            .config
            .tokens
            .iter()
            .map(|symbol| self.config.contract_for(symbol))
            .collect::<Result<Vec<&TokenContract>, _>>()?;

        let raw_transfers = match self.transfer_source.fetch_transfers(address).await {
            Ok(transfers) => transfers,
            Err(e) => {
                error!("Error fetching transfers: {:#}", e);
                Vec::new()
            }
        };
        if raw_transfers.is_empty() {
            info!("No transfers found for {}", address);
        }

        let mut transfers = Vec::new();
        for contract in contracts {
            let incoming = get_token_transfers(&raw_transfers, address, contract);
            info!(
                "Added {} incoming {} transfers to results",
                incoming.len(),
                contract.token
            );
            transfers.extend(
                incoming
                    .into_iter()
                    .filter_map(|raw| parse_transfer(raw, contract.token.symbol())),
            );
        }

        let summary = TransferSummary::from_amounts(
            transfers.iter().map(|t| (t.token_symbol.as_str(), t.amount)),
        );
        Ok(TransferReport::new(address, transfers, summary))
    }
}

/// Incoming transfers of one contract; outgoing ones are only counted
pub fn get_token_transfers<'a>(
    transfers: &'a [Trc20Transfer],
    address: &str,
    contract: &TokenContract,
) -> Vec<&'a Trc20Transfer> {
    let token_transfers: Vec<&Trc20Transfer> = transfers
        .iter()
        .filter(|t| contract.matches(&t.contract_address))
        .collect();

    let incoming: Vec<&Trc20Transfer> = token_transfers
        .iter()
        .copied()
        .filter(|t| addresses_match(&t.to_address, address))
        .collect();
    let outgoing = token_transfers
        .iter()
        .filter(|t| addresses_match(&t.from_address, address))
        .count();

    info!(
        "{}: {} total, {} incoming, {} outgoing",
        contract.token,
        token_transfers.len(),
        incoming.len(),
        outgoing
    );
    incoming
}

/// Scale `quant` by the token's declared decimals; unparseable records are skipped
pub fn parse_transfer(raw: &Trc20Transfer, token_symbol: &str) -> Option<TronTransfer> {
    let raw_amount = match raw.quant.trim().parse::<u128>() {
        Ok(value) => value,
        Err(e) => {
            warn!(
                "Error parsing transfer {}: bad quant {:?} ({})",
                raw.transaction_id, raw.quant, e
            );
            return None;
        }
    };
    let Ok(token_decimals) = u32::try_from(raw.token_info.token_decimal) else {
        warn!(
            "Error parsing transfer {}: bad tokenDecimal {}",
            raw.transaction_id, raw.token_info.token_decimal
        );
        return None;
    };

    let amount = if token_decimals > 0 {
        raw_amount as f64 / 10f64.powi(token_decimals as i32)
    } else {
        raw_amount as f64
    };
    let timestamp = i64::try_from(raw.block_ts).unwrap_or(0);

    Some(TronTransfer {
        transaction_id: raw.transaction_id.clone(),
        date: format_timestamp_millis(timestamp),
        timestamp,
        from_address: raw.from_address.clone(),
        to_address: raw.to_address.clone(),
        token_symbol: token_symbol.to_string(),
        token_name: raw.token_info.token_name.clone(),
        amount,
        raw_amount,
        token_decimals,
        status: raw.status.clone(),
        confirmed: raw.confirmed,
        contract_address: raw.contract_address.clone(),
        block_number: raw.block,
    })
}
