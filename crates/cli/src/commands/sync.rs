//! CLI handler for the `sync` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use skillpath_schema::SelfAssessmentPayload;
use skillpath_state::AssessmentStore;
use skillpath_sync::ProgressClient;
use tokio::runtime::Runtime;

use super::open_store;

/// Handle the `sync` command.
///
/// Without `--input` the most recently recorded assessment is uploaded.
pub(crate) fn handle_sync_command(
    input: Option<PathBuf>,
    server: Option<String>,
    data_dir: Option<PathBuf>,
) -> Result<()> {
    let payload: SelfAssessmentPayload = match input {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read payload file: {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Payload file is not valid JSON: {}", path.display()))?
        }
        None => open_store(data_dir)?
            .latest_assessment()?
            .context("No recorded assessment to sync; run `skillpath process` first")?,
    };

    let client = match server {
        Some(url) => ProgressClient::with_base_url(url),
        None => ProgressClient::new(),
    };

    let rt = Runtime::new()?;
    let report = rt.block_on(client.save_assessment(&payload))?;

    print!("{}", report.format_summary());
    Ok(())
}
