use anyhow::{Context, Result};
use log::info;
use std::cmp::{Ordering, Reverse};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::entity::{
    EthereumTransfer, MonitorError, NativeTransfer, TokenTransfer, TransferSummary, TronTransfer,
};
use crate::utils::format_with_commas;

type Row = HashMap<String, String>;

fn write_rows<I>(path: &Path, headers: &[&str], rows: I) -> Result<()>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let write = || -> Result<(), MonitorError> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(headers)?;
        for row in rows {
            writer.write_record(&row)?;
        }
        writer.flush()?;
        Ok(())
    };

    write().with_context(|| format!("Failed to write {}", path.display()))
}

/// A row of `width` cells with `cells` placed at the given column indexes
fn padded_row(width: usize, cells: &[(usize, String)]) -> Vec<String> {
    let mut row = vec![String::new(); width];
    for (index, value) in cells {
        row[*index] = value.clone();
    }
    row
}

/// Layered-token transfers, no summary rows
pub fn write_token_transfers(path: &Path, transfers: &[TokenTransfer]) -> Result<()> {
    write_rows(
        path,
        &TokenTransfer::CSV_HEADERS,
        transfers.iter().map(TokenTransfer::csv_record),
    )?;
    info!("Saved {} token transfers to {}", transfers.len(), path.display());
    Ok(())
}

/// Native transfers followed by a separator, a label row and the BTC/USD totals
pub fn write_bitcoin_transfers(path: &Path, transfers: &[NativeTransfer]) -> Result<()> {
    let width = NativeTransfer::CSV_HEADERS.len();
    let total_btc: f64 = transfers.iter().map(|t| t.amount_btc).sum();
    let total_usd: f64 = transfers.iter().map(|t| t.amount_usd).sum();

    let summary = vec![
        padded_row(width, &[]),
        padded_row(width, &[(0, "SUMMARY".to_string()), (1, "TOTAL".to_string())]),
        padded_row(
            width,
            &[
                (1, format!("{:.8}", total_btc)),
                (2, format!("${}", format_with_commas(total_usd, 2))),
            ],
        ),
    ];

    write_rows(
        path,
        &NativeTransfer::CSV_HEADERS,
        transfers.iter().map(NativeTransfer::csv_record).chain(summary),
    )?;
    info!("Saved {} Bitcoin transfers to {}", transfers.len(), path.display());
    Ok(())
}

/// Ethereum transfers followed by a separator, a label row, one row per token
/// total and the overall par-value total
pub fn write_ethereum_transfers(
    path: &Path,
    transfers: &[EthereumTransfer],
    summary: &TransferSummary,
) -> Result<()> {
    let width = EthereumTransfer::CSV_HEADERS.len();

    let mut summary_rows = vec![
        padded_row(width, &[]),
        padded_row(width, &[(0, "SUMMARY".to_string()), (1, "TOTAL VALUE".to_string())]),
    ];
    for (token, amount) in &summary.token_totals {
        summary_rows.push(padded_row(
            width,
            &[(1, format!("{} Total", token)), (2, format_with_commas(*amount, 2))],
        ));
    }
    summary_rows.push(padded_row(
        width,
        &[
            (1, "TOTAL VALUE (USD)".to_string()),
            (2, format!("${}", format_with_commas(summary.total_value, 2))),
        ],
    ));

    write_rows(
        path,
        &EthereumTransfer::CSV_HEADERS,
        transfers
            .iter()
            .map(EthereumTransfer::csv_record)
            .chain(summary_rows),
    )?;
    info!(
        "Saved {} transfers to {} (total value ${})",
        transfers.len(),
        path.display(),
        format_with_commas(summary.total_value, 2)
    );
    Ok(())
}

/// TRON transfers newest first, no summary rows
pub fn write_tron_transfers(path: &Path, transfers: &[TronTransfer]) -> Result<()> {
    let mut sorted: Vec<&TronTransfer> = transfers.iter().collect();
    sorted.sort_by_key(|t| Reverse(t.timestamp));

    write_rows(
        path,
        &TronTransfer::CSV_HEADERS,
        sorted.into_iter().map(TronTransfer::csv_record),
    )?;
    info!("Saved {} transfers to {}", transfers.len(), path.display());
    Ok(())
}

/// Merge token transfers into an existing CSV file.
///
/// Columns are the union of the file's and the token columns. Rows sharing a
/// `transaction_id` collapse to the last one written; rows without an id are
/// all kept. The result is sorted by `date`, newest first, undated rows last.
/// Returns the number of rows written.
pub fn merge_token_transfers(path: &Path, transfers: &[TokenTransfer]) -> Result<usize> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let mut columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut rows: Vec<Row> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(
            columns
                .iter()
                .cloned()
                .zip(record.iter().map(str::to_string))
                .collect(),
        );
    }

    for header in TokenTransfer::CSV_HEADERS {
        if !columns.iter().any(|c| c == header) {
            columns.push(header.to_string());
        }
    }
    for transfer in transfers {
        rows.push(
            TokenTransfer::CSV_HEADERS
                .iter()
                .map(|h| h.to_string())
                .zip(transfer.csv_record())
                .collect(),
        );
    }

    let mut rows = dedupe_keep_last(rows, "transaction_id");
    rows.sort_by(|a, b| compare_dates_desc(a.get("date"), b.get("date")));

    let headers: Vec<&str> = columns.iter().map(String::as_str).collect();
    let row_count = rows.len();
    write_rows(
        path,
        &headers,
        rows.iter().map(|row| {
            columns
                .iter()
                .map(|c| row.get(c).cloned().unwrap_or_default())
                .collect()
        }),
    )?;
    info!(
        "Updated {} with {} new transfers ({} rows)",
        path.display(),
        transfers.len(),
        row_count
    );
    Ok(row_count)
}

fn dedupe_keep_last(rows: Vec<Row>, key: &str) -> Vec<Row> {
    let mut seen = HashSet::new();
    let mut kept: Vec<Row> = rows
        .into_iter()
        .rev()
        .filter(|row| match row.get(key).filter(|id| !id.is_empty()) {
            Some(id) => seen.insert(id.clone()),
            None => true,
        })
        .collect();
    kept.reverse();
    kept
}

fn compare_dates_desc(a: Option<&String>, b: Option<&String>) -> Ordering {
    let a = a.filter(|d| !d.is_empty());
    let b = b.filter(|d| !d.is_empty());
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
