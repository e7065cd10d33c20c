//! File-backed store: one pretty-printed JSON document per key.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use skillpath_assessment::AnswerMap;
use skillpath_recommend::PathDocument;
use skillpath_schema::SelfAssessmentPayload;

use crate::env::data_dir;
use crate::store::{
    assessment_key, path_key, AssessmentStore, HistoryEntry, StoreError, DRAFT_KEY, HISTORY_KEY,
    HISTORY_LIMIT,
};

/// Stores each document as `<key>.json` under one root directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open the store at the resolved data directory, creating it if
    /// needed.
    pub fn open() -> Result<Self, StoreError> {
        Self::at(data_dir()?)
    }

    /// Open the store rooted at an explicit directory.
    pub fn at(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|source| StoreError::Io {
            path: root.clone(),
            source,
        })?;
        Ok(FileStore { root })
    }

    /// Directory documents are stored in.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn file_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let path = self.file_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let data = std::fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        let value =
            serde_json::from_str(&data).map_err(|source| StoreError::Malformed { path, source })?;
        Ok(Some(value))
    }

    fn write_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let path = self.file_for(key);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let data = serde_json::to_string_pretty(value).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;
        std::fs::write(&path, data).map_err(|source| StoreError::Io { path, source })
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.file_for(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }
}

impl AssessmentStore for FileStore {
    fn save_draft(&self, answers: &AnswerMap) -> Result<(), StoreError> {
        self.write_json(DRAFT_KEY, answers)
    }

    fn load_draft(&self) -> Result<Option<AnswerMap>, StoreError> {
        self.read_json(DRAFT_KEY)
    }

    fn clear_draft(&self) -> Result<(), StoreError> {
        self.remove(DRAFT_KEY)
    }

    fn record_assessment(&self, payload: &SelfAssessmentPayload) -> Result<(), StoreError> {
        let entry = HistoryEntry::from_payload(payload);
        self.write_json(&assessment_key(&entry.session_id), payload)?;

        let mut history: Vec<HistoryEntry> = self.read_json(HISTORY_KEY)?.unwrap_or_default();
        history.retain(|existing| existing.session_id != entry.session_id);
        history.insert(0, entry);
        while history.len() > HISTORY_LIMIT {
            if let Some(dropped) = history.pop() {
                debug!(session = %dropped.session_id, "pruning assessment past history limit");
                self.remove(&assessment_key(&dropped.session_id))?;
            }
        }
        self.write_json(HISTORY_KEY, &history)
    }

    fn load_assessment(
        &self,
        session_id: &str,
    ) -> Result<Option<SelfAssessmentPayload>, StoreError> {
        self.read_json(&assessment_key(session_id))
    }

    fn latest_assessment(&self) -> Result<Option<SelfAssessmentPayload>, StoreError> {
        match self.history()?.first() {
            Some(entry) => self.load_assessment(&entry.session_id),
            None => Ok(None),
        }
    }

    fn save_path_document(&self, document: &PathDocument) -> Result<(), StoreError> {
        self.write_json(&path_key(&document.metadata.learning_path_id), document)
    }

    fn load_path_document(&self, path_id: &str) -> Result<Option<PathDocument>, StoreError> {
        self.read_json(&path_key(path_id))
    }

    fn history(&self) -> Result<Vec<HistoryEntry>, StoreError> {
        Ok(self.read_json(HISTORY_KEY)?.unwrap_or_default())
    }
}
