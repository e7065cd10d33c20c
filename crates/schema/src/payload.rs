//! Typed self-assessment payload, the document format shared with the
//! progress server.
//!
//! Struct field order matches the order older clients emit, so a freshly
//! built payload serializes byte-for-byte compatibly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use skillpath_assessment::{SkillCategory, SkillLevel};

// ===== Fixed metadata values =====

/// Payload and file type marker.
pub const PAYLOAD_TYPE: &str = "self-assessment";
/// Payload format version.
pub const PAYLOAD_VERSION: &str = "1.0.0";
/// Assessment display title.
pub const PAYLOAD_TITLE: &str = "Learning Skill Assessment";
/// Stable assessment identifier, also the fetch path segment.
pub const ASSESSMENT_ID: &str = "skill-assessment";
/// Assessment type marker.
pub const ASSESSMENT_TYPE: &str = "skill-assessment";
/// Source marker for payloads built by this tool.
pub const SOURCE_UI: &str = "ui";
/// Page the assessment lives on, used when no page context exists.
pub const DEFAULT_PAGE_URL: &str = "/learning/skill-assessment.md";
/// Coaching mode marker.
pub const COACH_MODE: &str = "self-directed";
/// User recorded when no identity is known.
pub const DEFAULT_USER: &str = "anonymous";

// ===== Payload structs =====

/// A complete self-assessment submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfAssessmentPayload {
    /// Always [`PAYLOAD_TYPE`]; lets consumers dispatch without reading
    /// the metadata.
    #[serde(rename = "type")]
    pub payload_type: String,
    pub metadata: PayloadMetadata,
    /// Submission time, RFC 3339 with millisecond precision.
    pub timestamp: String,
    pub assessment: AssessmentBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadMetadata {
    pub title: String,
    pub version: String,
    pub assessment_id: String,
    pub assessment_title: String,
    pub assessment_type: String,
    pub category: SkillCategory,
    pub source: String,
    pub file_type: String,
    pub session_id: String,
    pub user_id: String,
    pub page_url: String,
    pub coach_mode: String,
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentBody {
    pub questions: Vec<AnsweredQuestion>,
    pub results: AssessmentResults,
}

/// One answered question as recorded on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnsweredQuestion {
    pub id: String,
    pub question: String,
    pub category: SkillCategory,
    /// Whole-number rating, 1 through 5.
    pub response: u8,
    pub response_text: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResults {
    /// All six categories, present even when unanswered.
    pub category_scores: BTreeMap<SkillCategory, CategoryScore>,
    /// Mean response, rounded to one decimal for display.
    pub overall_score: f64,
    pub overall_level: SkillLevel,
    pub questions_answered: usize,
    pub total_questions: usize,
    /// Categories scoring at or above 4.0.
    pub strength_categories: Vec<SkillCategory>,
    /// Categories scoring below 2.6, unanswered ones included.
    pub growth_categories: Vec<SkillCategory>,
    pub recommended_path: SkillLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    /// Category average, rounded to two decimals.
    pub score: f64,
    pub level: SkillLevel,
    pub questions_count: usize,
    pub total_points: u32,
    pub max_points: u32,
}
