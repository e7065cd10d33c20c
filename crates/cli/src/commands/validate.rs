//! CLI handler for the `validate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde_json::Value;
use skillpath_schema::validate;

/// Handle the `validate` command.
///
/// Exits nonzero when the payload fails validation so the command can
/// gate scripted syncs.
pub(crate) fn handle_validate_command(payload: PathBuf, format: String) -> Result<()> {
    let raw = std::fs::read_to_string(&payload)
        .with_context(|| format!("Failed to read payload file: {}", payload.display()))?;
    let value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Payload file is not valid JSON: {}", payload.display()))?;

    let report = validate(&value);

    if format == "json" {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "valid": report.is_valid(),
                "errors": report.errors,
            }))?
        );
        if !report.is_valid() {
            std::process::exit(1);
        }
    } else if report.is_valid() {
        println!("✓ {} is a valid progress payload", payload.display());
    } else {
        eprintln!("✗ {}", payload.display());
        for error in &report.errors {
            eprintln!("  - {error}");
        }
        eprintln!();
        eprintln!("Validation failed. Fix the payload before syncing.");
        std::process::exit(1);
    }

    Ok(())
}
