//! In-memory store for tests and ephemeral runs.
//!
//! Holds serialized documents in a map, the way the original key-value
//! storage did, so it exercises the same encode and decode paths as the
//! file store.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use serde::de::DeserializeOwned;
use serde::Serialize;

use skillpath_assessment::AnswerMap;
use skillpath_recommend::PathDocument;
use skillpath_schema::SelfAssessmentPayload;

use crate::store::{
    assessment_key, path_key, AssessmentStore, HistoryEntry, StoreError, DRAFT_KEY, HISTORY_KEY,
    HISTORY_LIMIT,
};

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Number of stored documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|err| err.into_inner())
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.lock().get(key) {
            None => Ok(None),
            Some(data) => serde_json::from_str(data)
                .map(Some)
                .map_err(|source| StoreError::Malformed {
                    path: PathBuf::from(key),
                    source,
                }),
        }
    }

    fn write_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let data = serde_json::to_string(value).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.lock().insert(key.to_string(), data);
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.lock().remove(key);
    }
}

impl AssessmentStore for MemoryStore {
    fn save_draft(&self, answers: &AnswerMap) -> Result<(), StoreError> {
        self.write_json(DRAFT_KEY, answers)
    }

    fn load_draft(&self) -> Result<Option<AnswerMap>, StoreError> {
        self.read_json(DRAFT_KEY)
    }

    fn clear_draft(&self) -> Result<(), StoreError> {
        self.remove(DRAFT_KEY);
        Ok(())
    }

    fn record_assessment(&self, payload: &SelfAssessmentPayload) -> Result<(), StoreError> {
        let entry = HistoryEntry::from_payload(payload);
        self.write_json(&assessment_key(&entry.session_id), payload)?;

        let mut history: Vec<HistoryEntry> = self.read_json(HISTORY_KEY)?.unwrap_or_default();
        history.retain(|existing| existing.session_id != entry.session_id);
        history.insert(0, entry);
        while history.len() > HISTORY_LIMIT {
            if let Some(dropped) = history.pop() {
                self.remove(&assessment_key(&dropped.session_id));
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

#[cfg(test)]
mod tests {
    use super::*;
    use skillpath_assessment::RawRating;

    #[test]
    fn test_draft_round_trip() {
        let store = MemoryStore::new();
        assert!(store.load_draft().expect("load").is_none());

        let mut answers = AnswerMap::new();
        answers.insert("q1".to_string(), RawRating::from(4));
        store.save_draft(&answers).expect("save");
        assert_eq!(store.load_draft().expect("load"), Some(answers));

        store.clear_draft().expect("clear");
        assert!(store.load_draft().expect("load").is_none());
        // Clearing twice is fine.
        store.clear_draft().expect("clear again");
    }
}
