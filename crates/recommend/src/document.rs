//! The learning path document persisted after an assessment.
//!
//! Field names follow the camelCase document format shared with the
//! progress server and older clients.

use serde::{Deserialize, Serialize};

use skillpath_assessment::{SkillCategory, SkillLevel};

use crate::generator::EstimatedDuration;

/// Document format version.
pub const PATH_DOC_VERSION: &str = "1.0.0";
/// Source marker for documents produced by recommendation processing.
pub const PATH_SOURCE: &str = "assessment-processor";
/// File type marker for learning path progress documents.
pub const PATH_FILE_TYPE: &str = "learning-path-progress";
/// Type marker carried by every path item.
pub const ITEM_TYPE: &str = "learning-item";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathDocument {
    pub metadata: PathMetadata,
    /// Creation time, RFC 3339 with millisecond precision.
    pub timestamp: String,
    pub learning_path: LearningPath,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathMetadata {
    pub version: String,
    pub learning_path_id: String,
    pub learning_path_title: String,
    /// Difficulty of the path as a whole, the assessed overall level.
    pub path_type: SkillLevel,
    pub source: String,
    pub file_type: String,
    pub session_id: String,
    pub last_updated: String,
    /// The assessment payload the path was derived from.
    pub assessment_data: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPath {
    pub title: String,
    pub description: String,
    /// Categories the path focuses on, in recommendation order.
    pub categories: Vec<SkillCategory>,
    pub estimated_duration: EstimatedDuration,
    pub difficulty_level: SkillLevel,
    pub items: Vec<PathItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathItem {
    /// Path with separators flattened to underscores.
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: String,
    /// Last path segment with hyphens spaced out.
    pub title: String,
    pub category: SkillCategory,
    pub order: usize,
    pub estimated_time: u32,
    pub difficulty: SkillLevel,
    /// High-priority items are required to complete the path.
    pub is_required: bool,
    pub path: String,
    pub reason: String,
}
