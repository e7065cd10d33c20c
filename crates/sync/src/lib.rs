//! Progress server sync for skillpath.
//!
//! Pushes validated self-assessment payloads to the progress server with
//! retry and backoff, and fetches the most recently stored assessment
//! back. Payloads that fail client-side validation are never sent.
//!
//! # Examples
//!
//! ```no_run
//! use skillpath_schema::{SelfAssessmentPayload, ASSESSMENT_ID};
//! use skillpath_sync::{ProgressClient, SyncError};
//!
//! # async fn run(payload: SelfAssessmentPayload) -> Result<(), SyncError> {
//! let client = ProgressClient::new();
//! let report = client.save_assessment(&payload).await?;
//! println!("{}", report.format_summary());
//!
//! if let Some(stored) = client.fetch_assessment(ASSESSMENT_ID).await? {
//!     println!("server has session {}", stored.metadata.session_id);
//! }
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]

pub mod client;
pub mod error;
pub mod report;

pub use client::{
    ProgressClient, DEFAULT_SERVER_URL, FETCH_ENDPOINT, SAVE_ENDPOINT, SERVER_URL_ENV,
};
pub use error::SyncError;
pub use report::SyncReport;
