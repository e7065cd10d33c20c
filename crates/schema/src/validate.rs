//! Client-side payload validation, run before anything goes to the
//! server so bad submissions fail fast with every problem listed.
//!
//! Error strings match the progress server's expectations verbatim;
//! they appear in server logs and must stay greppable across clients.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use skillpath_assessment::SkillCategory;

use crate::payload::{SelfAssessmentPayload, PAYLOAD_TYPE};

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+\.\d+$").expect("VERSION_RE: compile-time constant"));

/// Accepted values for `metadata.source`.
pub const VALID_SOURCES: [&str; 6] = ["ui", "coach", "file-watcher", "server", "import", "manual"];

/// Outcome of validating one payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Every problem found, in document order.
    pub errors: Vec<String>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// All errors as one comma-separated line, for log output.
    #[must_use]
    pub fn joined(&self) -> String {
        self.errors.join(", ")
    }

    fn fail(message: &str) -> Self {
        ValidationReport {
            errors: vec![message.to_string()],
        }
    }
}

/// Validate any progress payload by detecting its type.
#[must_use]
pub fn validate(payload: &Value) -> ValidationReport {
    if payload.is_null() {
        return ValidationReport::fail("Payload is null or undefined");
    }
    let file_type = payload
        .get("metadata")
        .and_then(|m| m.get("fileType"))
        .and_then(Value::as_str);
    let top_type = payload.get("type").and_then(Value::as_str);
    if file_type == Some(PAYLOAD_TYPE) || top_type == Some(PAYLOAD_TYPE) {
        return validate_self_assessment(payload);
    }
    ValidationReport::fail("Unable to determine payload type")
}

/// Validate a self-assessment payload against the expected schema.
///
/// Checks are structural: field presence, formats, and category names.
/// Score arithmetic is not re-checked here.
#[must_use]
pub fn validate_self_assessment(payload: &Value) -> ValidationReport {
    let mut errors = Vec::new();

    let metadata = payload.get("metadata").filter(|v| is_present(v));
    if metadata.is_none() {
        errors.push("Missing metadata".to_string());
    }
    let assessment = payload.get("assessment").filter(|v| is_present(v));
    if assessment.is_none() {
        errors.push("Missing assessment".to_string());
    }
    if !payload.get("timestamp").is_some_and(is_present) {
        errors.push("Missing timestamp".to_string());
    }

    if let Some(metadata) = metadata {
        check_metadata(metadata, &mut errors);
    }
    if let Some(assessment) = assessment {
        check_questions(assessment, &mut errors);
        check_results(assessment, &mut errors);
    }

    ValidationReport { errors }
}

/// Validate an already-typed payload.
///
/// Built payloads always pass; this is the pre-sync gate that catches
/// hand-assembled or mutated ones.
#[must_use]
pub fn validate_payload(payload: &SelfAssessmentPayload) -> ValidationReport {
    match serde_json::to_value(payload) {
        Ok(value) => validate_self_assessment(&value),
        Err(err) => ValidationReport {
            errors: vec![format!("Payload serialization failed: {err}")],
        },
    }
}

fn check_metadata(metadata: &Value, errors: &mut Vec<String>) {
    let version = metadata.get("version");
    if !version.is_some_and(is_present) {
        errors.push("Missing metadata.version".to_string());
    } else if !version
        .and_then(Value::as_str)
        .is_some_and(|v| VERSION_RE.is_match(v))
    {
        errors.push("Invalid metadata.version format (expected: X.Y.Z)".to_string());
    }

    let source = metadata.get("source");
    if !source.is_some_and(is_present) {
        errors.push("Missing metadata.source".to_string());
    } else if !source
        .and_then(Value::as_str)
        .is_some_and(|s| VALID_SOURCES.contains(&s))
    {
        errors.push(
            "Invalid metadata.source (expected: ui, coach, file-watcher, server, import, or manual)"
                .to_string(),
        );
    }

    let file_type = metadata.get("fileType");
    if !file_type.is_some_and(is_present) {
        errors.push("Missing metadata.fileType".to_string());
    } else if file_type.and_then(Value::as_str) != Some(PAYLOAD_TYPE) {
        errors.push("Invalid metadata.fileType (expected: self-assessment)".to_string());
    }

    if !metadata.get("assessmentId").is_some_and(is_present) {
        errors.push("Missing metadata.assessmentId".to_string());
    }
}

fn check_questions(assessment: &Value, errors: &mut Vec<String>) {
    let questions = assessment.get("questions");
    if !questions.is_some_and(is_present) {
        errors.push("Missing assessment.questions".to_string());
        return;
    }
    let Some(list) = questions.and_then(Value::as_array) else {
        errors.push("assessment.questions must be an array".to_string());
        return;
    };

    for (i, question) in list.iter().enumerate() {
        if !question.get("question").is_some_and(is_present) {
            errors.push(format!("Question {i}: missing 'question' field"));
        }
        match question.get("category").filter(|v| is_present(v)) {
            None => errors.push(format!("Question {i}: missing 'category' field")),
            Some(category) => {
                let known = category
                    .as_str()
                    .and_then(SkillCategory::from_name)
                    .is_some();
                if !known {
                    let shown = category
                        .as_str()
                        .map_or_else(|| category.to_string(), str::to_string);
                    errors.push(format!("Question {i}: invalid category '{shown}'"));
                }
            }
        }
        // A zero response is odd but present; only absence is an error.
        if matches!(question.get("response"), None | Some(Value::Null)) {
            errors.push(format!("Question {i}: missing 'response'"));
        }
    }
}

fn check_results(assessment: &Value, errors: &mut Vec<String>) {
    let results = assessment.get("results").filter(|v| is_present(v));
    let Some(results) = results else {
        errors.push("Missing assessment.results".to_string());
        return;
    };

    let scores = results.get("categoryScores");
    if !scores.is_some_and(is_present) {
        errors.push("Missing assessment.results.categoryScores".to_string());
    } else if !scores.is_some_and(Value::is_object) {
        errors.push("assessment.results.categoryScores must be an object".to_string());
    }

    if results.get("overallScore").is_none() {
        errors.push("Missing assessment.results.overallScore".to_string());
    }
    if !results.get("overallLevel").is_some_and(is_present) {
        errors.push("Missing assessment.results.overallLevel".to_string());
    }
}

/// Loose presence check mirroring what older clients treat as "set":
/// null, empty strings, zero, and false all count as missing.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
