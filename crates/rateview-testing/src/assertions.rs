//! Custom assertions over the CLI's JSON output.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert the `presented` field of a present/observe document.
pub fn assert_presented(json: &Value, expected: &str) -> Result<()> {
    let presented = json["presented"]
        .as_str()
        .context("Expected string 'presented' field in JSON")?;

    if presented != expected {
        anyhow::bail!("Expected presented {:?}, got {:?}", expected, presented);
    }

    Ok(())
}

/// Assert whether the document reports a fallback to the raw value.
pub fn assert_degraded(json: &Value, expected: bool) -> Result<()> {
    let degraded = json["degraded"]
        .as_bool()
        .context("Expected boolean 'degraded' field in JSON")?;

    if degraded != expected {
        anyhow::bail!("Expected degraded={}, got {}", expected, degraded);
    }

    Ok(())
}

/// Assert the sequence of `cause` fields across observe output lines.
pub fn assert_causes(lines: &[Value], expected: &[&str]) -> Result<()> {
    let causes: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            line["cause"]
                .as_str()
                .with_context(|| format!("Line {} missing 'cause'", i))
        })
        .collect::<Result<_>>()?;

    if causes != expected {
        anyhow::bail!("Expected causes {:?}, got {:?}", expected, causes);
    }

    Ok(())
}
