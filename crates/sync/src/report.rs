//! Reporting types for completed sync operations.

use serde::{Deserialize, Serialize};

/// What happened during a successful upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncReport {
    /// Session that was pushed.
    pub session_id: String,
    /// Base URL of the server that accepted it.
    pub server: String,
    /// Filename the server stored the payload under.
    pub filename: String,
    /// Attempts used; 1 means the first try succeeded.
    pub attempts: u32,
    /// Server-side save time (RFC 3339), as reported.
    pub saved_at: String,
}

impl SyncReport {
    /// Generates a formatted summary for display.
    pub fn format_summary(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Sync Complete: {}\n", self.server));
        out.push_str(&format!("  Session:  {}\n", self.session_id));
        out.push_str(&format!("  Stored:   {}\n", self.filename));
        out.push_str(&format!("  Saved at: {}\n", self.saved_at));
        out.push_str(&format!("  Attempts: {}\n", self.attempts));
        out
    }
}
