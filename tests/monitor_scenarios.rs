use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tempfile::tempdir;

use stablecoin_monitor::chains::bitcoin::models::EsploraTransaction;
use stablecoin_monitor::chains::bitcoin::{
    AddressHistory, AddressHistorySource, BitcoinConfig, HistorySourceChain, OmniTransaction,
    PriceService, TokenLedger,
};
use stablecoin_monitor::chains::constants::{ETH_USDC_CONTRACT, ETH_USDT_CONTRACT, TRON_USDT_CONTRACT};
use stablecoin_monitor::chains::ethereum::{Erc20Transfer, EthereumConfig, TokenTransferSource};
use stablecoin_monitor::chains::tron::{Trc20Transfer, Trc20TransferSource, TronConfig};
use stablecoin_monitor::view::{BitcoinView, ConsoleBitcoinView, ConsoleEthereumView, EthereumView};
use stablecoin_monitor::{
    BitcoinInteractor, BitcoinInteractorImpl, EthereumInteractor, EthereumInteractorImpl,
    TronInteractor, TronInteractorImpl,
};

const BTC_TARGET: &str = "bc1qxm0m3g2k0lfj37slknha946hgk4aekhwc7dsj3";
const ETH_TARGET: &str = "0x1896e1468878D0A8dE79398775200E6f00A2B6Dc";
const TRON_TARGET: &str = "TQJAhuv9NYNcsvpvThRXZHafQNa1hmBGSi";

const PRIMARY_BODY: &str = r#"{
    "address": "bc1qxm0m3g2k0lfj37slknha946hgk4aekhwc7dsj3",
    "total_received": 30000000,
    "total_sent": 0,
    "final_balance": 30000000,
    "txs": [
        {
            "hash": "tx-b",
            "time": 1700000600,
            "block_height": 815001,
            "inputs": [{"prev_out": {"addr": "bc1qsender2", "value": 40000000}}],
            "out": [{"addr": "bc1qxm0m3g2k0lfj37slknha946hgk4aekhwc7dsj3", "value": 20000000}]
        },
        {
            "hash": "tx-a",
            "time": 1700000000,
            "block_height": 815000,
            "inputs": [{"prev_out": {"addr": "bc1qsender1", "value": 15000000}}],
            "out": [
                {"addr": "bc1qxm0m3g2k0lfj37slknha946hgk4aekhwc7dsj3", "value": 10000000},
                {"addr": "bc1qsender1", "value": 4990000}
            ]
        }
    ]
}"#;

const SECONDARY_BODY: &str = r#"[
    {
        "txid": "tx-b",
        "status": {"confirmed": true, "block_height": 815001, "block_time": 1700000600},
        "vin": [{"prevout": {"scriptpubkey_address": "bc1qsender2", "value": 40000000}}],
        "vout": [{"scriptpubkey_address": "bc1qxm0m3g2k0lfj37slknha946hgk4aekhwc7dsj3", "value": 20000000}]
    },
    {
        "txid": "tx-a",
        "status": {"confirmed": true, "block_height": 815000, "block_time": 1700000000},
        "vin": [{"prevout": {"scriptpubkey_address": "bc1qsender1", "value": 15000000}}],
        "vout": [
            {"scriptpubkey_address": "bc1qxm0m3g2k0lfj37slknha946hgk4aekhwc7dsj3", "value": 10000000},
            {"scriptpubkey_address": "bc1qsender1", "value": 4990000}
        ]
    }
]"#;

struct StaticHistory(Option<AddressHistory>);

#[async_trait]
impl AddressHistorySource for StaticHistory {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_history(&self, _address: &str, _limit: usize) -> Result<AddressHistory> {
        self.0.clone().ok_or_else(|| anyhow!("503 Service Unavailable"))
    }
}

struct EmptyLedger;

#[async_trait]
impl TokenLedger for EmptyLedger {
    async fn lookup(&self, _tx_hash: &str) -> Result<Option<OmniTransaction>> {
        Ok(None)
    }
}

struct Price(Option<f64>);

#[async_trait]
impl PriceService for Price {
    async fn get_btc_price(&self) -> Result<f64> {
        self.0.ok_or_else(|| anyhow!("429 Too Many Requests"))
    }
}

struct EthTransfers(Vec<Erc20Transfer>);

#[async_trait]
impl TokenTransferSource for EthTransfers {
    async fn fetch_token_transfers(&self, _address: &str) -> Result<Vec<Erc20Transfer>> {
        Ok(self.0.clone())
    }
}

struct TronTransfers(Vec<Trc20Transfer>);

#[async_trait]
impl Trc20TransferSource for TronTransfers {
    async fn fetch_transfers(&self, _address: &str) -> Result<Vec<Trc20Transfer>> {
        Ok(self.0.clone())
    }
}

fn bitcoin_interactor(sources: Vec<Arc<dyn AddressHistorySource>>, price: Option<f64>) -> BitcoinInteractorImpl {
    let config = BitcoinConfig {
        lookup_batch_delay: Duration::ZERO,
        ..Default::default()
    };
    BitcoinInteractorImpl::new(
        Arc::new(HistorySourceChain::new(sources)),
        Arc::new(EmptyLedger),
        Arc::new(Price(price)),
        config,
    )
}

fn erc20(to: &str, contract: &str, value: &str, decimals: &str) -> Erc20Transfer {
    Erc20Transfer {
        block_number: "19000000".to_string(),
        time_stamp: "1700000000".to_string(),
        hash: format!("0xhash{}", value),
        from: "0x0000000000000000000000000000000000000001".to_string(),
        to: to.to_string(),
        contract_address: contract.to_string(),
        value: value.to_string(),
        token_decimal: decimals.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn ethereum_single_usdt_transfer() {
    let source = EthTransfers(vec![erc20(ETH_TARGET, ETH_USDT_CONTRACT, "1000000", "6")]);
    let interactor = EthereumInteractorImpl::new(Arc::new(source), EthereumConfig::default());

    let report = interactor.monitor_address(ETH_TARGET).await.unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["transfers"][0]["Amount"], "1.00");
    assert_eq!(json["transfers"][0]["Token"], "USDT");
    assert_eq!(json["summary"]["total_value"], 1.0);
    assert_eq!(json["summary"]["total_transfers"], 1);
}

#[tokio::test]
async fn ethereum_csv_rows_are_transfers_plus_summary() {
    let source = EthTransfers(vec![
        erc20(ETH_TARGET, ETH_USDT_CONTRACT, "1000000", "6"),
        erc20(ETH_TARGET, ETH_USDC_CONTRACT, "2000000", "6"),
        erc20(ETH_TARGET, ETH_USDT_CONTRACT, "3000000", "6"),
    ]);
    let interactor = EthereumInteractorImpl::new(Arc::new(source), EthereumConfig::default());
    let report = interactor.monitor_address(ETH_TARGET).await.unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("incoming_token_transfers.csv");
    let view = ConsoleEthereumView::new(path.clone(), true);
    assert_eq!(view.save_transfers(&report), Some(path.clone()));

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let rows = reader.records().count();
    let token_count = report.summary.token_totals.len();
    assert_eq!(token_count, 2);
    assert_eq!(rows, report.transfers.len() + 3 + token_count);
}

#[tokio::test]
async fn every_emitted_transfer_is_addressed_to_the_target() {
    let eth_source = EthTransfers(vec![
        erc20(&ETH_TARGET.to_uppercase().replace("0X", "0x"), ETH_USDT_CONTRACT, "1", "6"),
        erc20("0x0000000000000000000000000000000000000002", ETH_USDT_CONTRACT, "2", "6"),
    ]);
    let eth = EthereumInteractorImpl::new(Arc::new(eth_source), EthereumConfig::default())
        .monitor_address(ETH_TARGET)
        .await
        .unwrap();
    assert_eq!(eth.transfers.len(), 1);

    let tron_row = |to: &str| {
        serde_json::from_value::<Trc20Transfer>(serde_json::json!({
            "transaction_id": format!("t-{}", to),
            "block_ts": 1700000000000u64,
            "from_address": "TSender",
            "to_address": to,
            "contract_address": TRON_USDT_CONTRACT,
            "quant": "1000000",
            "tokenInfo": {"tokenDecimal": 6, "tokenName": "Tether USD"}
        }))
        .unwrap()
    };
    let tron_source = TronTransfers(vec![
        tron_row(&TRON_TARGET.to_lowercase()),
        tron_row("TSomeoneElse"),
    ]);
    let tron = TronInteractorImpl::new(Arc::new(tron_source), TronConfig::default())
        .monitor_address(TRON_TARGET)
        .await
        .unwrap();

    assert_eq!(tron.transfers.len(), 1);
    assert!(tron
        .transfers
        .iter()
        .all(|t| t.to_address.eq_ignore_ascii_case(TRON_TARGET)));
    assert_eq!(tron.transfers[0].amount, 1.0);
}

#[tokio::test]
async fn zero_upstream_transfers_is_an_empty_success() {
    let eth = EthereumInteractorImpl::new(Arc::new(EthTransfers(vec![])), EthereumConfig::default())
        .monitor_address(ETH_TARGET)
        .await
        .unwrap();
    let json = serde_json::to_value(&eth).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["transfers"], serde_json::json!([]));
    assert_eq!(json["summary"]["total_value"], 0.0);
    assert_eq!(json["summary"]["token_totals"], serde_json::json!({}));

    let tron = TronInteractorImpl::new(Arc::new(TronTransfers(vec![])), TronConfig::default())
        .monitor_address(TRON_TARGET)
        .await
        .unwrap();
    assert!(tron.success);
    assert_eq!(tron.summary.total_transfers, 0);

    let empty = AddressHistory {
        address: BTC_TARGET.to_string(),
        ..Default::default()
    };
    let btc = bitcoin_interactor(vec![Arc::new(StaticHistory(Some(empty)))], Some(60_000.0))
        .monitor_address(BTC_TARGET)
        .await
        .unwrap();
    let json = serde_json::to_value(&btc).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["token_transfers"], serde_json::json!([]));
    assert_eq!(json["bitcoin_transfers"], serde_json::json!([]));
    assert_eq!(json["summary"]["bitcoin_count"], 0);
    assert_eq!(json["summary"]["total_btc_value"], 0.0);
}

#[tokio::test]
async fn price_failure_uses_fallback_exactly() {
    let primary: AddressHistory = serde_json::from_str(PRIMARY_BODY).unwrap();
    let report = bitcoin_interactor(vec![Arc::new(StaticHistory(Some(primary)))], None)
        .monitor_address(BTC_TARGET)
        .await
        .unwrap();

    assert_eq!(report.btc_price, 50_000.0);
    for transfer in &report.bitcoin_transfers {
        assert_eq!(transfer.amount_usd, transfer.amount_btc * 50_000.0);
    }
    assert_eq!(report.bitcoin_transfers[0].amount_usd, 10_000.0);
    assert_eq!(report.bitcoin_transfers[1].amount_usd, 5_000.0);
}

#[tokio::test]
async fn fallback_history_matches_primary_results() {
    let primary: AddressHistory = serde_json::from_str(PRIMARY_BODY).unwrap();
    let esplora: Vec<EsploraTransaction> = serde_json::from_str(SECONDARY_BODY).unwrap();
    let secondary = AddressHistory::from_esplora(BTC_TARGET, esplora);

    let from_primary = bitcoin_interactor(vec![Arc::new(StaticHistory(Some(primary)))], Some(40_000.0))
        .monitor_address(BTC_TARGET)
        .await
        .unwrap();
    let from_fallback = bitcoin_interactor(
        vec![
            Arc::new(StaticHistory(None)),
            Arc::new(StaticHistory(Some(secondary))),
        ],
        Some(40_000.0),
    )
    .monitor_address(BTC_TARGET)
    .await
    .unwrap();

    assert_eq!(from_fallback.bitcoin_transfers, from_primary.bitcoin_transfers);
    assert_eq!(from_fallback.bitcoin_transfers.len(), 2);
    assert_eq!(from_fallback.bitcoin_transfers[1].from_addresses, vec!["bc1qsender1"]);
    assert_eq!(from_fallback.summary.total_btc_value, from_primary.summary.total_btc_value);
}

#[tokio::test]
async fn bitcoin_csv_has_three_summary_rows() {
    let primary: AddressHistory = serde_json::from_str(PRIMARY_BODY).unwrap();
    let report = bitcoin_interactor(vec![Arc::new(StaticHistory(Some(primary)))], Some(50_000.0))
        .monitor_address(BTC_TARGET)
        .await
        .unwrap();

    let dir = tempdir().unwrap();
    let view = ConsoleBitcoinView::new(
        dir.path().join("btc_incoming_token_transfers.csv"),
        dir.path().join("btc_bitcoin_transfers.csv"),
        dir.path().join("incoming_token_transfers.csv"),
        true,
    );
    view.save_transfers(&report);

    let mut reader = csv::Reader::from_path(dir.path().join("btc_bitcoin_transfers.csv")).unwrap();
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

    assert_eq!(rows.len(), report.bitcoin_transfers.len() + 3);
    assert_eq!(rows[rows.len() - 1].get(1), Some("0.30000000"));
    assert_eq!(rows[rows.len() - 1].get(2), Some("$15,000.00"));
}
