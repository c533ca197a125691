use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{self, Write};

/// Write `report` as one pretty-printed JSON document followed by a newline
pub fn write_json<W: Write, R: Serialize + ?Sized>(mut out: W, report: &R) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, report).context("Failed to serialize report")?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Standard output carries the JSON document and nothing else
pub fn print_json<R: Serialize + ?Sized>(report: &R) -> Result<()> {
    let stdout = io::stdout();
    write_json(stdout.lock(), report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::FailureReport;

    #[test]
    fn test_failure_document() {
        let mut buf = Vec::new();
        let err = anyhow::anyhow!("Token BUSD not supported");
        write_json(&mut buf, &FailureReport::new("TTarget", &err)).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with("}\n"));
        assert!(text.contains("\n  \"success\": false"));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["error"], "Token BUSD not supported");
        assert_eq!(value["address"], "TTarget");
    }
}
