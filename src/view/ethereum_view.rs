use anyhow::Result;
use log::{error, info};
use std::path::PathBuf;

use crate::entity::{EthereumTransfer, FailureReport, TransferReport};
use crate::utils::format_with_commas;
use crate::view::csv_view::write_ethereum_transfers;
use crate::view::json_view::print_json;

pub trait EthereumView: Send + Sync {
    fn save_transfers(&self, report: &TransferReport<EthereumTransfer>) -> Option<PathBuf>;
    fn display_summary(&self, report: &TransferReport<EthereumTransfer>);
    fn display_report(&self, report: &TransferReport<EthereumTransfer>) -> Result<()>;
    fn display_failure(&self, failure: &FailureReport) -> Result<()>;
}

pub struct ConsoleEthereumView {
    csv_path: PathBuf,
    write_csv: bool,
}

impl ConsoleEthereumView {
    pub fn new(csv_path: PathBuf, write_csv: bool) -> Self {
        Self {
            csv_path,
            write_csv,
        }
    }
}

impl EthereumView for ConsoleEthereumView {
    fn save_transfers(&self, report: &TransferReport<EthereumTransfer>) -> Option<PathBuf> {
        if !self.write_csv {
            return None;
        }
        if report.transfers.is_empty() {
            info!("No data to save");
            return None;
        }

        match write_ethereum_transfers(&self.csv_path, &report.transfers, &report.summary) {
            Ok(()) => Some(self.csv_path.clone()),
            Err(e) => {
                error!("Error saving transfers: {:#}", e);
                None
            }
        }
    }

    fn display_summary(&self, report: &TransferReport<EthereumTransfer>) {
        if report.transfers.is_empty() {
            info!("No incoming transfers found for the target tokens");
            return;
        }

        info!("Incoming Token Transfers (USDT, USDC, DAI)");
        info!("{}", "=".repeat(100));
        for (i, transfer) in report.transfers.iter().enumerate() {
            info!("{}. {} Transfer", i + 1, transfer.token);
            info!("   Date: {}", transfer.date);
            info!("   Amount: {} {}", transfer.amount, transfer.token);
            info!("   From: {}", transfer.from);
            info!("   Transaction: {}", transfer.transaction_hash);
            info!("   Block: {}", transfer.block_number);
        }

        info!("{}", "=".repeat(100));
        info!("VALUE SUMMARY:");
        for (token, amount) in &report.summary.token_totals {
            info!("{} Total: {}", token, format_with_commas(*amount, 2));
        }
        info!("TOTAL VALUE: ${}", format_with_commas(report.summary.total_value, 2));
    }

    fn display_report(&self, report: &TransferReport<EthereumTransfer>) -> Result<()> {
        print_json(report)
    }

    fn display_failure(&self, failure: &FailureReport) -> Result<()> {
        print_json(failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::TransferSummary;
    use tempfile::tempdir;

    #[test]
    fn test_empty_report_writes_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("incoming_token_transfers.csv");
        let view = ConsoleEthereumView::new(path.clone(), true);
        let report = TransferReport::new("0xtarget", Vec::new(), TransferSummary::default());

        assert_eq!(view.save_transfers(&report), None);
        assert!(!path.exists());
    }
}
