//! CLI handler for the `history` command.

use std::path::PathBuf;

use anyhow::Result;
use skillpath_state::AssessmentStore;

use super::open_store;

/// Handle the `history` command.
pub(crate) fn handle_history_command(limit: usize, data_dir: Option<PathBuf>) -> Result<()> {
    let store = open_store(data_dir)?;
    let entries = store.history()?;

    if entries.is_empty() {
        println!("No assessments recorded yet.");
        return Ok(());
    }

    println!("Assessment History");
    println!("==================");
    for entry in entries.iter().take(limit) {
        println!(
            "{}  {:.1}/5  {:<12}  {}",
            entry.timestamp, entry.overall_score, entry.overall_level, entry.session_id
        );
    }
    if entries.len() > limit {
        println!("... and {} more", entries.len() - limit);
    }

    Ok(())
}
