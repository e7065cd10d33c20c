//! CLI handler for the `process` command.
//!
//! Runs the whole local pipeline: parse answers, score them, generate
//! recommendations, synthesize the learning path, and record the
//! results in the local store.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use skillpath_assessment::{analyze_scores, collect_answer_set, AnswerSet};
use skillpath_recommend::{format_assessment_report, generate_recommendations, synthesize_path};
use skillpath_schema::{build_self_assessment, validate_payload};
use skillpath_state::AssessmentStore;
use tracing::debug;

use super::open_store;

/// Handle the `process` command.
pub(crate) fn handle_process_command(
    answers: PathBuf,
    format: String,
    dry_run: bool,
    data_dir: Option<PathBuf>,
) -> Result<()> {
    let raw = std::fs::read_to_string(&answers)
        .with_context(|| format!("Failed to read answers file: {}", answers.display()))?;
    let answer_set: AnswerSet = serde_json::from_str(&raw)
        .with_context(|| format!("Answers file is not valid JSON: {}", answers.display()))?;

    let now = Utc::now();
    let responses = collect_answer_set(&answer_set);
    let analysis = analyze_scores(&responses);
    let recommendations = generate_recommendations(&analysis);

    // Category-keyed answers carry no question ids, so no payload can be
    // built for them; scoring and the path document still work.
    let payload = match &answer_set {
        AnswerSet::ByQuestion(map) => Some(build_self_assessment(map, now)),
        AnswerSet::ByCategory(_) => None,
    };

    if let Some(payload) = &payload {
        let report = validate_payload(payload);
        if !report.is_valid() {
            anyhow::bail!("Built payload failed validation: {}", report.joined());
        }
    }

    let assessment_data = match &payload {
        Some(payload) => serde_json::to_value(&payload.assessment.results)?,
        None => serde_json::to_value(&analysis)?,
    };
    let document = synthesize_path(&recommendations, &assessment_data, now);

    if !dry_run {
        let store = open_store(data_dir)?;
        if let Some(payload) = &payload {
            store.record_assessment(payload)?;
            store.clear_draft()?;
            debug!(session = %payload.metadata.session_id, "recorded assessment");
        }
        store.save_path_document(&document)?;
    }

    if format == "json" {
        let output = serde_json::json!({
            "analysis": analysis,
            "recommendations": recommendations,
            "payload": payload,
            "pathDocument": document,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", format_assessment_report(&analysis, &recommendations));
        println!();
        println!(
            "Learning path: {} ({} items)",
            document.metadata.learning_path_id,
            document.learning_path.items.len()
        );
        if !dry_run {
            if let Some(payload) = &payload {
                println!("Recorded session {}", payload.metadata.session_id);
            }
            println!("Run `skillpath sync` to upload the results.");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillpath_state::FileStore;
    use skillpath_test_utils::{sample_answers, sample_category_answers, TestFixture};

    #[test]
    fn test_dry_run_records_nothing() {
        let fixture = TestFixture::new().expect("fixture");
        let answers = fixture
            .write_answers("answers.json", &sample_answers().to_string())
            .expect("write answers");
        let data_dir = fixture.tempdir.path().join("untouched");

        let result =
            handle_process_command(answers, "text".to_string(), true, Some(data_dir.clone()));

        assert!(result.is_ok(), "dry run should succeed: {result:?}");
        assert!(!data_dir.exists(), "dry run must not create the data dir");
    }

    #[test]
    fn test_question_answers_record_payload_and_path() {
        let fixture = TestFixture::new().expect("fixture");
        let answers = fixture
            .write_answers("answers.json", &sample_answers().to_string())
            .expect("write answers");
        let data_dir = fixture.data_path().to_path_buf();

        handle_process_command(answers, "text".to_string(), false, Some(data_dir.clone()))
            .expect("process should succeed");

        let store = FileStore::at(&data_dir).expect("reopen store");
        let latest = store.latest_assessment().expect("read latest");
        assert!(latest.is_some(), "assessment should be recorded");
        assert_eq!(store.history().expect("read history").len(), 1);

        let names: Vec<_> = std::fs::read_dir(&data_dir)
            .expect("read data dir")
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        assert!(
            names
                .iter()
                .any(|name| name.starts_with("assessmentLearningPath_")),
            "path document should be written, got: {names:?}"
        );
    }

    #[test]
    fn test_category_answers_skip_payload_but_keep_path() {
        let fixture = TestFixture::new().expect("fixture");
        let answers = fixture
            .write_answers("by-category.json", &sample_category_answers().to_string())
            .expect("write answers");
        let data_dir = fixture.data_path().to_path_buf();

        handle_process_command(answers, "json".to_string(), false, Some(data_dir.clone()))
            .expect("process should succeed");

        let store = FileStore::at(&data_dir).expect("reopen store");
        assert!(
            store.latest_assessment().expect("read latest").is_none(),
            "category answers cannot produce a payload"
        );
        let names: Vec<_> = std::fs::read_dir(&data_dir)
            .expect("read data dir")
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        assert!(
            names
                .iter()
                .any(|name| name.starts_with("assessmentLearningPath_")),
            "path document should still be written, got: {names:?}"
        );
    }

    #[test]
    fn test_missing_answers_file_is_an_error() {
        let fixture = TestFixture::new().expect("fixture");
        let missing = fixture.tempdir.path().join("nope.json");

        let result = handle_process_command(missing, "text".to_string(), true, None);

        assert!(result.is_err(), "missing file should fail");
        let message = format!("{:#}", result.unwrap_err());
        assert!(
            message.contains("Failed to read answers file"),
            "error should name the file problem: {message}"
        );
    }
}
