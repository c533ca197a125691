use anyhow::Result;
use log::{error, info};
use std::path::PathBuf;

use crate::entity::{FailureReport, TransferReport, TronTransfer};
use crate::view::csv_view::write_tron_transfers;
use crate::view::json_view::print_json;

pub trait TronView: Send + Sync {
    fn save_transfers(&self, report: &TransferReport<TronTransfer>) -> Option<PathBuf>;
    fn display_summary(&self, report: &TransferReport<TronTransfer>);
    fn display_report(&self, report: &TransferReport<TronTransfer>) -> Result<()>;
    fn display_failure(&self, failure: &FailureReport) -> Result<()>;
}

pub struct ConsoleTronView {
    csv_path: PathBuf,
    write_csv: bool,
}

impl ConsoleTronView {
    pub fn new(csv_path: PathBuf, write_csv: bool) -> Self {
        Self {
            csv_path,
            write_csv,
        }
    }
}

impl TronView for ConsoleTronView {
    fn save_transfers(&self, report: &TransferReport<TronTransfer>) -> Option<PathBuf> {
        if !self.write_csv {
            return None;
        }
        if report.transfers.is_empty() {
            info!("No transfers to save");
            return None;
        }

        match write_tron_transfers(&self.csv_path, &report.transfers) {
            Ok(()) => Some(self.csv_path.clone()),
            Err(e) => {
                error!("Error saving transfers: {:#}", e);
                None
            }
        }
    }

    fn display_summary(&self, report: &TransferReport<TronTransfer>) {
        info!("=== SUMMARY ===");
        for (token, total) in &report.summary.token_totals {
            let count = report
                .transfers
                .iter()
                .filter(|t| &t.token_symbol == token)
                .count();
            info!("{}: {} transfers, Total: {:.6}", token, count, total);
        }
        info!(
            "{} incoming transfers, total {:.6} token units",
            report.summary.total_transfers, report.summary.total_value
        );
    }

    fn display_report(&self, report: &TransferReport<TronTransfer>) -> Result<()> {
        print_json(report)
    }

    fn display_failure(&self, failure: &FailureReport) -> Result<()> {
        print_json(failure)
    }
}
