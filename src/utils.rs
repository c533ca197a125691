use anyhow::Result;
use chrono::DateTime;
use lazy_static::lazy_static;
use regex::Regex;

use crate::entity::MonitorError;

pub const SATOSHI_PER_BTC: f64 = 100_000_000.0;

lazy_static! {
    static ref BITCOIN_ADDRESS_RE: Regex =
        Regex::new(r"^(bc1[02-9ac-hj-np-z]{11,71}|[13][1-9A-HJ-NP-Za-km-z]{25,34})$").unwrap();
    static ref ETHEREUM_ADDRESS_RE: Regex = Regex::new(r"^0x[0-9a-fA-F]{40}$").unwrap();
    static ref TRON_ADDRESS_RE: Regex = Regex::new(r"^T[1-9A-HJ-NP-Za-km-z]{33}$").unwrap();
}

// Shape checks only, no checksum validation
pub fn validate_bitcoin_address(address: &str) -> bool {
    BITCOIN_ADDRESS_RE.is_match(address)
}

pub fn validate_ethereum_address(address: &str) -> bool {
    ETHEREUM_ADDRESS_RE.is_match(address)
}

pub fn validate_tron_address(address: &str) -> bool {
    TRON_ADDRESS_RE.is_match(address)
}

/// Case-insensitive address comparison used for hex and base58check addresses
pub fn addresses_match(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Convert satoshi to BTC
pub fn satoshi_to_btc(satoshi: u64) -> f64 {
    satoshi as f64 / SATOSHI_PER_BTC
}

/// Render a unix timestamp (seconds) as `YYYY-MM-DD HH:MM:SS`, or `Unknown` when absent
pub fn format_timestamp(secs: i64) -> String {
    if secs <= 0 {
        return "Unknown".to_string();
    }

    match DateTime::from_timestamp(secs, 0) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => secs.to_string(),
    }
}

/// Same as `format_timestamp` for millisecond timestamps; absent renders empty
pub fn format_timestamp_millis(millis: i64) -> String {
    if millis <= 0 {
        return String::new();
    }

    match DateTime::from_timestamp_millis(millis) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => String::new(),
    }
}

/// Divide an integer amount string by `10^decimals`
pub fn scale_amount(raw: &str, decimals: u32) -> Result<f64> {
    let raw = raw.trim();
    let value = match raw.parse::<u128>() {
        Ok(v) => v as f64,
        Err(_) => raw
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0)
            .ok_or_else(|| MonitorError::InvalidAmount(raw.to_string()))?,
    };

    Ok(value / 10f64.powi(decimals as i32))
}

/// Format with thousands separators, e.g. `1234.5` with 2 decimals -> `1,234.50`
pub fn format_with_commas(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (formatted.clone(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value.is_sign_negative() && value != 0.0 { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Parse an amount previously produced by `format_with_commas`
pub fn parse_formatted_amount(amount: &str) -> Result<f64> {
    amount
        .replace(',', "")
        .trim()
        .parse::<f64>()
        .map_err(|_| MonitorError::InvalidAmount(amount.to_string()).into())
}

// Shorten address for display, counting characters rather than bytes
pub fn shorten_address(address: &str) -> String {
    match address.char_indices().nth(20) {
        Some((end, _)) => format!("{}...", &address[..end]),
        None => address.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_with_commas() {
        assert_eq!(format_with_commas(1.0, 2), "1.00");
        assert_eq!(format_with_commas(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_with_commas(999.999, 2), "1,000.00");
        assert_eq!(format_with_commas(0.0, 2), "0.00");
        assert_eq!(format_with_commas(123456.0, 0), "123,456");
    }

    #[test]
    fn test_parse_formatted_amount() {
        assert_eq!(parse_formatted_amount("1,234.50").unwrap(), 1234.5);
        assert!(parse_formatted_amount("n/a").is_err());
    }

    #[test]
    fn test_scale_amount() {
        assert_eq!(scale_amount("1000000", 6).unwrap(), 1.0);
        assert_eq!(scale_amount("2500000000000000000", 18).unwrap(), 2.5);
        assert_eq!(scale_amount("42", 0).unwrap(), 42.0);
        assert!(scale_amount("-5", 6).is_err());
        assert!(scale_amount("abc", 6).is_err());
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0), "Unknown");
        assert_eq!(format_timestamp(1_700_000_000), "2023-11-14 22:13:20");
        assert_eq!(format_timestamp_millis(1_700_000_000_000), "2023-11-14 22:13:20");
        assert_eq!(format_timestamp_millis(0), "");
    }

    #[test]
    fn test_address_shapes() {
        assert!(validate_bitcoin_address(
            "bc1qxm0m3g2k0lfj37slknha946hgk4aekhwc7dsj3"
        ));
        assert!(validate_bitcoin_address("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"));
        assert!(validate_ethereum_address(
            "0x1896e1468878D0A8dE79398775200E6f00A2B6Dc"
        ));
        assert!(!validate_ethereum_address("0x1234"));
        assert!(validate_tron_address("TQJAhuv9NYNcsvpvThRXZHafQNa1hmBGSi"));
        assert!(!validate_tron_address("XQJAhuv9NYNcsvpvThRXZHafQNa1hmBGSi"));
    }

    #[test]
    fn test_addresses_match_ignores_case() {
        assert!(addresses_match("0xABCdef", "0xabcDEF"));
        assert!(!addresses_match("0xabc", "0xabd"));
    }

    #[test]
    fn test_shorten_address() {
        assert_eq!(shorten_address("1Short"), "1Short");
        assert_eq!(shorten_address(&"a".repeat(20)), "a".repeat(20));
        assert_eq!(
            shorten_address("bc1qxm0m3g2k0lfj37slknha946hgk4aekhwc7dsj3"),
            "bc1qxm0m3g2k0lfj37sl..."
        );
    }

    #[test]
    fn test_shorten_address_multibyte() {
        let address = format!("{}é{}", "1".repeat(19), "x".repeat(10));
        assert_eq!(shorten_address(&address), format!("{}é...", "1".repeat(19)));
    }

    #[test]
    fn test_satoshi_to_btc() {
        assert_eq!(satoshi_to_btc(150_000_000), 1.5);
    }
}
