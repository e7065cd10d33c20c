//! Local persistence for skillpath.
//!
//! This crate stores everything the assessment pipeline needs between
//! runs:
//! - The in-progress answer draft
//! - Recorded assessment payloads, indexed by session
//! - Generated learning path documents
//! - A bounded history of past assessments, newest first
//!
//! [`FileStore`] keeps one JSON document per key under the data
//! directory; [`MemoryStore`] backs tests and ephemeral runs. Both
//! implement [`AssessmentStore`], the seam calling code depends on.

pub mod env;
pub mod file;
pub mod memory;
pub mod store;

pub use env::{data_dir, DATA_DIR_ENV};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::{
    assessment_key, path_key, AssessmentStore, HistoryEntry, StoreError, HISTORY_LIMIT,
};
