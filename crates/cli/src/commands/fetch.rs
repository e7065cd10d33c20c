//! CLI handler for the `fetch` command.

use anyhow::Result;
use skillpath_schema::SelfAssessmentPayload;
use skillpath_sync::ProgressClient;
use tokio::runtime::Runtime;

/// Handle the `fetch` command.
pub(crate) fn handle_fetch_command(
    assessment_id: String,
    server: Option<String>,
    format: String,
) -> Result<()> {
    let client = match server {
        Some(url) => ProgressClient::with_base_url(url),
        None => ProgressClient::new(),
    };

    let rt = Runtime::new()?;
    let payload = match rt.block_on(client.fetch_assessment(&assessment_id))? {
        Some(payload) => payload,
        None => {
            println!("No assessment stored on the server yet.");
            return Ok(());
        }
    };

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print!("{}", format_fetched_summary(&payload));
    }

    Ok(())
}

/// Format the stored assessment for terminal display.
fn format_fetched_summary(payload: &SelfAssessmentPayload) -> String {
    let results = &payload.assessment.results;
    let mut out = String::new();
    out.push_str(&format!(
        "Stored Assessment: {}\n",
        payload.metadata.assessment_id
    ));
    out.push_str(&format!("  Session:  {}\n", payload.metadata.session_id));
    out.push_str(&format!("  Saved:    {}\n", payload.timestamp));
    out.push_str(&format!(
        "  Overall:  {:.1}/5 ({})\n",
        results.overall_score, results.overall_level
    ));
    out.push_str(&format!(
        "  Answered: {}/{}\n",
        results.questions_answered, results.total_questions
    ));
    out.push('\n');
    for (category, score) in &results.category_scores {
        out.push_str(&format!(
            "  {:<30} {:.1}/5  {}\n",
            category.display_name(),
            score.score,
            score.level
        ));
    }
    out
}
