use anyhow::Result;
use log::{error, info};
use std::path::PathBuf;

use crate::entity::{BitcoinReport, FailureReport};
use crate::utils::{format_with_commas, shorten_address};
use crate::view::csv_view::{merge_token_transfers, write_bitcoin_transfers, write_token_transfers};
use crate::view::json_view::print_json;

pub trait BitcoinView: Send + Sync {
    /// Persist the transfers; returns the files written
    fn save_transfers(&self, report: &BitcoinReport) -> Vec<PathBuf>;
    fn display_summary(&self, report: &BitcoinReport);
    fn display_report(&self, report: &BitcoinReport) -> Result<()>;
    fn display_failure(&self, failure: &FailureReport) -> Result<()>;
}

/// JSON on stdout, summary on the log, CSV files on disk
pub struct ConsoleBitcoinView {
    token_csv_path: PathBuf,
    native_csv_path: PathBuf,
    merged_csv_path: PathBuf,
    write_csv: bool,
}

impl ConsoleBitcoinView {
    pub fn new(
        token_csv_path: PathBuf,
        native_csv_path: PathBuf,
        merged_csv_path: PathBuf,
        write_csv: bool,
    ) -> Self {
        Self {
            token_csv_path,
            native_csv_path,
            merged_csv_path,
            write_csv,
        }
    }
}

impl BitcoinView for ConsoleBitcoinView {
    fn save_transfers(&self, report: &BitcoinReport) -> Vec<PathBuf> {
        let mut written = Vec::new();
        if !self.write_csv {
            return written;
        }

        if !report.token_transfers.is_empty() {
            match write_token_transfers(&self.token_csv_path, &report.token_transfers) {
                Ok(()) => written.push(self.token_csv_path.clone()),
                Err(e) => error!("Error saving token transfers: {:#}", e),
            }

            if self.merged_csv_path.exists() {
                match merge_token_transfers(&self.merged_csv_path, &report.token_transfers) {
                    Ok(_) => written.push(self.merged_csv_path.clone()),
                    Err(e) => error!("Error updating existing CSV: {:#}", e),
                }
            }
        }

        if !report.bitcoin_transfers.is_empty() {
            match write_bitcoin_transfers(&self.native_csv_path, &report.bitcoin_transfers) {
                Ok(()) => written.push(self.native_csv_path.clone()),
                Err(e) => error!("Error saving Bitcoin transfers: {:#}", e),
            }
        }

        written
    }

    fn display_summary(&self, report: &BitcoinReport) {
        info!("{}", "=".repeat(60));
        info!("RESULTS SUMMARY");
        info!("{}", "=".repeat(60));

        if report.token_transfers.is_empty() {
            info!("No incoming token transfers found");
        } else {
            info!("Found {} incoming TOKEN transfers:", report.token_transfers.len());
            for transfer in &report.token_transfers {
                info!(
                    "  {} - {} {} from {}",
                    transfer.date,
                    transfer.amount,
                    transfer.token_symbol,
                    shorten_address(&transfer.from_address)
                );
            }
        }

        if report.bitcoin_transfers.is_empty() {
            info!("No incoming Bitcoin transfers found");
        } else {
            info!("Found {} incoming BITCOIN transfers:", report.bitcoin_transfers.len());
            info!("  Total BTC received: {:.8} BTC", report.summary.total_btc_value);
            info!(
                "  Total USD value: ${} USD",
                format_with_commas(report.summary.total_usd_value, 2)
            );
            for transfer in &report.bitcoin_transfers {
                info!(
                    "  {} - {:.8} BTC (${}) from {} address(es)",
                    transfer.date,
                    transfer.amount_btc,
                    format_with_commas(transfer.amount_usd, 2),
                    transfer.from_addresses.len()
                );
            }
        }

        info!(
            "USD values calculated using BTC price: ${}",
            format_with_commas(report.btc_price, 2)
        );
    }

    fn display_report(&self, report: &BitcoinReport) -> Result<()> {
        print_json(report)
    }

    fn display_failure(&self, failure: &FailureReport) -> Result<()> {
        print_json(failure)
    }
}
