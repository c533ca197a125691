use crate::chains::bitcoin::{
    resolve_btc_price, BitcoinConfig, HistorySourceChain, OmniTransaction, PriceService,
    RawTransaction, TokenLedger,
};
use crate::entity::{BitcoinReport, MonitorError, NativeTransfer, TargetToken, TokenTransfer};
use crate::utils::{format_timestamp, satoshi_to_btc};
use anyhow::Result;
use async_trait::async_trait;
use futures::future::join_all;
use log::{info, warn};
use std::sync::Arc;

pub const OMNI_PROTOCOL: &str = "Omni Layer";

#[async_trait]
pub trait BitcoinInteractor: Send + Sync {
    /// Scan the address history for native payments and layered-token transfers
    async fn monitor_address(&self, address: &str) -> Result<BitcoinReport>;
}

pub struct BitcoinInteractorImpl {
    history_sources: Arc<HistorySourceChain>,
    token_ledger: Arc<dyn TokenLedger + Send + Sync>,
    price_service: Arc<dyn PriceService + Send + Sync>,
    config: BitcoinConfig,
}

impl BitcoinInteractorImpl {
    pub fn new(
        history_sources: Arc<HistorySourceChain>,
        token_ledger: Arc<dyn TokenLedger + Send + Sync>,
        price_service: Arc<dyn PriceService + Send + Sync>,
        config: BitcoinConfig,
    ) -> Self {
        Self {
            history_sources,
            token_ledger,
            price_service,
            config,
        }
    }

    /// Ledger lookups for every transaction, `lookup_batch_size` at a time
    async fn collect_token_transfers(
        &self,
        txs: &[RawTransaction],
        target: &str,
    ) -> Vec<TokenTransfer> {
        let batch_size = self.config.lookup_batch_size.max(1);
        let batch_count = txs.len().div_ceil(batch_size);
        let mut transfers = Vec::new();

        for (batch_index, batch) in txs.chunks(batch_size).enumerate() {
            if batch_index > 0 && !self.config.lookup_batch_delay.is_zero() {
                tokio::time::sleep(self.config.lookup_batch_delay).await;
            }
            info!(
                "Checking token ledger for batch {}/{} ({} transactions)",
                batch_index + 1,
                batch_count,
                batch.len()
            );

            let lookups = batch.iter().map(|tx| self.token_ledger.lookup(&tx.hash));
            let results = join_all(lookups).await;

            for (tx, result) in batch.iter().zip(results) {
                match result {
                    Ok(Some(omni)) => {
                        if let Some(transfer) =
                            parse_omni_transaction(&omni, tx, target, &self.config.target_tokens)
                        {
                            transfers.push(transfer);
                        }
                    }
                    Ok(None) => {}
                    Err(e) => warn!("Token ledger lookup failed for {}: {:#}", tx.hash, e),
                }
            }
        }

        transfers
    }
}

#[async_trait]
impl BitcoinInteractor for BitcoinInteractorImpl {
    async fn monitor_address(&self, address: &str) -> Result<BitcoinReport> {
        info!("Starting Bitcoin address monitor for: {}", address);
        info!(
            "Looking for tokens: {}",
            self.config
                .target_tokens
                .iter()
                .map(|t| t.symbol())
                .collect::<Vec<_>>()
                .join(", ")
        );

        let btc_price =
            resolve_btc_price(self.price_service.as_ref(), self.config.fallback_price_usd).await;

        let Some(history) = self
            .history_sources
            .fetch_history(address, self.config.tx_limit)
            .await
        else {
            warn!("{}", MonitorError::NoHistorySource(address.to_string()));
            return Ok(BitcoinReport::new(address, btc_price, Vec::new(), Vec::new()));
        };

        info!("Address summary:");
        info!("  Total received: {} BTC", satoshi_to_btc(history.total_received));
        info!("  Total sent: {} BTC", satoshi_to_btc(history.total_sent));
        info!("  Current balance: {} BTC", satoshi_to_btc(history.final_balance));
        info!("  Number of transactions: {}", history.txs.len());

        let bitcoin_transfers: Vec<NativeTransfer> = history
            .txs
            .iter()
            .flat_map(|tx| analyze_transaction(tx, address, btc_price))
            .collect();

        let token_transfers = self.collect_token_transfers(&history.txs, address).await;

        Ok(BitcoinReport::new(
            address,
            btc_price,
            token_transfers,
            bitcoin_transfers,
        ))
    }
}

/// Native payments made to `target` by one transaction, one per paying output.
///
/// Bitcoin addresses are compared exactly. Zero-value outputs are skipped.
pub fn analyze_transaction(tx: &RawTransaction, target: &str, btc_price: f64) -> Vec<NativeTransfer> {
    let date = format_timestamp(tx.time);

    let from_addresses: Vec<String> = tx
        .inputs
        .iter()
        .filter_map(|input| input.prev_out.as_ref())
        .filter_map(|prev| prev.addr.as_deref())
        .filter(|addr| !addr.is_empty() && *addr != target)
        .map(str::to_string)
        .collect();

    tx.out
        .iter()
        .filter(|output| output.addr.as_deref() == Some(target) && output.value > 0)
        .map(|output| {
            let amount_btc = satoshi_to_btc(output.value);
            NativeTransfer {
                date: date.clone(),
                amount_btc,
                amount_usd: amount_btc * btc_price,
                amount_satoshi: output.value,
                from_addresses: from_addresses.clone(),
                transaction_id: tx.hash.clone(),
                transfer_type: NativeTransfer::INCOMING.to_string(),
            }
        })
        .collect()
}

/// Turn a ledger record into a token transfer when it pays `target` in one of `target_tokens`
pub fn parse_omni_transaction(
    omni: &OmniTransaction,
    tx: &RawTransaction,
    target: &str,
    target_tokens: &[TargetToken],
) -> Option<TokenTransfer> {
    if omni.referenceaddress != target {
        return None;
    }

    let property_name = omni.propertyname.to_uppercase();
    if !target_tokens
        .iter()
        .any(|token| property_name.contains(token.symbol()))
    {
        info!(
            "Found Omni token: {} (Property ID: {}) - Amount: {}",
            omni.propertyname, omni.propertyid, omni.amount
        );
        return None;
    }

    let token_symbol = omni
        .propertyname
        .split_whitespace()
        .next()
        .map(str::to_string)
        .unwrap_or_else(|| format!("OMNI_{}", omni.propertyid));

    Some(TokenTransfer {
        date: format_timestamp(tx.time),
        token_symbol,
        token_name: omni.propertyname.clone(),
        amount: if omni.amount.is_empty() {
            "0".to_string()
        } else {
            omni.amount.clone()
        },
        from_address: omni.sendingaddress.clone(),
        to_address: omni.referenceaddress.clone(),
        transaction_id: tx.hash.clone(),
        status: if omni.valid { "1" } else { "0" }.to_string(),
        confirmed: true,
        contract_address: format!("omni_property_{}", omni.propertyid),
        protocol: OMNI_PROTOCOL.to_string(),
    })
}
