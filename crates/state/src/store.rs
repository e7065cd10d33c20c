//! Store contract and error type.
//!
//! Keys follow the naming older clients used in browser storage, so a
//! directory of exported documents reads the same way the original
//! key-value store did.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use skillpath_assessment::{AnswerMap, SkillLevel};
use skillpath_recommend::PathDocument;
use skillpath_schema::SelfAssessmentPayload;

// ===== Keys =====

/// Key prefix for recorded assessment payloads.
pub const ASSESSMENT_KEY_PREFIX: &str = "skillAssessment_";
/// Key prefix for generated learning path documents.
pub const PATH_KEY_PREFIX: &str = "assessmentLearningPath_";
/// Key for the in-progress draft.
pub const DRAFT_KEY: &str = "skillAssessmentDraft";
/// Key for the history index.
pub const HISTORY_KEY: &str = "assessmentHistory";

/// Most recorded assessments kept before the oldest are pruned.
pub const HISTORY_LIMIT: usize = 50;

/// Storage key for an assessment session.
#[must_use]
pub fn assessment_key(session_id: &str) -> String {
    format!("{ASSESSMENT_KEY_PREFIX}{session_id}")
}

/// Storage key for a learning path document.
#[must_use]
pub fn path_key(path_id: &str) -> String {
    format!("{PATH_KEY_PREFIX}{path_id}")
}

// ===== Errors =====

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    /// No usable data directory on this system.
    #[error("No data directory available; set SKILLPATH_DATA_DIR to choose one")]
    NoDataDir,

    /// Reading or writing a stored document failed.
    #[error("Storage I/O failed for {path}")]
    Io {
        /// File the operation touched.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stored document exists but does not parse.
    #[error("Malformed stored document at {path}")]
    Malformed {
        /// File holding the document.
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be serialized for storage.
    #[error("Failed to encode document for key '{key}'")]
    Encode {
        /// Storage key being written.
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

// ===== History =====

/// One line of assessment history, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Session the payload was recorded under.
    pub session_id: String,
    /// Submission timestamp from the payload.
    pub timestamp: String,
    pub overall_score: f64,
    pub overall_level: SkillLevel,
}

impl HistoryEntry {
    /// Summarize a payload for the history index.
    #[must_use]
    pub fn from_payload(payload: &SelfAssessmentPayload) -> Self {
        HistoryEntry {
            session_id: payload.metadata.session_id.clone(),
            timestamp: payload.timestamp.clone(),
            overall_score: payload.assessment.results.overall_score,
            overall_level: payload.assessment.results.overall_level,
        }
    }
}

// ===== Store contract =====

/// Persistence for assessment state.
///
/// Implementations are key-value shaped: every document lives under one
/// key and writes replace whole documents. All methods take `&self`;
/// implementations handle their own interior mutability.
pub trait AssessmentStore {
    /// Save the in-progress answer draft, replacing any previous one.
    fn save_draft(&self, answers: &AnswerMap) -> Result<(), StoreError>;

    /// Load the current draft, if any.
    fn load_draft(&self) -> Result<Option<AnswerMap>, StoreError>;

    /// Remove the draft. Removing a missing draft is not an error.
    fn clear_draft(&self) -> Result<(), StoreError>;

    /// Record a completed assessment and prepend it to history.
    ///
    /// History is pruned to [`HISTORY_LIMIT`] entries; payloads pruned
    /// out of the index are deleted as well.
    fn record_assessment(&self, payload: &SelfAssessmentPayload) -> Result<(), StoreError>;

    /// Load a recorded assessment by session id.
    fn load_assessment(&self, session_id: &str)
        -> Result<Option<SelfAssessmentPayload>, StoreError>;

    /// The most recently recorded assessment, if any.
    fn latest_assessment(&self) -> Result<Option<SelfAssessmentPayload>, StoreError>;

    /// Save a generated learning path document under its path id.
    fn save_path_document(&self, document: &PathDocument) -> Result<(), StoreError>;

    /// Load a learning path document by path id.
    fn load_path_document(&self, path_id: &str) -> Result<Option<PathDocument>, StoreError>;

    /// Recorded assessments, newest first.
    fn history(&self) -> Result<Vec<HistoryEntry>, StoreError>;
}
