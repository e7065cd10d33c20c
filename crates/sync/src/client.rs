//! HTTP client for the progress server.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use serde::Deserialize;
use skillpath_schema::{validate_payload, SelfAssessmentPayload};
use tracing::{debug, warn};

use crate::error::SyncError;
use crate::report::SyncReport;

/// Default progress server, the port the docs server listens on.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3002";

/// Environment variable overriding the server base URL.
pub const SERVER_URL_ENV: &str = "SKILLPATH_SERVER_URL";

/// Endpoint payloads are POSTed to.
pub const SAVE_ENDPOINT: &str = "/api/progress/save";

/// Endpoint prefix stored assessments are fetched from; the assessment id
/// goes after it.
pub const FETCH_ENDPOINT: &str = "/api/progress/self-assessment";

/// Delivery attempts before giving up.
const MAX_ATTEMPTS: u32 = 3;

/// Base backoff, doubled after every failed attempt.
const RETRY_BASE: Duration = Duration::from_millis(1000);

/// Get the server base URL, allowing override for testing.
fn server_base() -> String {
    std::env::var(SERVER_URL_ENV).unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string())
}

/// Backoff before the attempt after `failed_attempts` failures.
fn retry_delay(failed_attempts: u32) -> Duration {
    RETRY_BASE * 2u32.saturating_pow(failed_attempts.saturating_sub(1))
}

/// Success body of `POST /api/progress/save`, fields we use.
#[derive(Deserialize)]
struct SaveReceipt {
    filename: String,
    timestamp: String,
}

/// Clears the in-flight flag when an upload finishes, on every exit path.
struct FlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Client for the progress server.
///
/// Uploads go through client-side validation first, then up to three
/// delivery attempts with exponential backoff. Only one
/// upload runs at a time per client; a second call while one is in flight
/// returns [`SyncError::AlreadyInFlight`] instead of queueing.
pub struct ProgressClient {
    http: reqwest::Client,
    base_url: String,
    in_flight: AtomicBool,
}

impl ProgressClient {
    /// Client against the configured server (`SKILLPATH_SERVER_URL`, or the
    /// default when unset).
    pub fn new() -> Self {
        Self::with_base_url(server_base())
    }

    /// Client against an explicit base URL, no trailing slash.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Validate `payload` and upload it to the progress server.
    ///
    /// Client errors (4xx) fail immediately; server errors and transport
    /// failures are retried with backoff before giving up.
    pub async fn save_assessment(
        &self,
        payload: &SelfAssessmentPayload,
    ) -> Result<SyncReport, SyncError> {
        let validation = validate_payload(payload);
        if !validation.is_valid() {
            return Err(SyncError::InvalidPayload(validation.joined()));
        }

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(SyncError::AlreadyInFlight);
        }
        let _flight = FlightGuard {
            flag: &self.in_flight,
        };

        let url = format!("{}{}", self.base_url, SAVE_ENDPOINT);
        let (response, attempts) = self
            .send_with_retry(|| self.http.post(&url).json(payload))
            .await?;

        let status = response.status();
        if status.is_client_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(SyncError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let receipt: SaveReceipt = response
            .json()
            .await
            .map_err(|source| SyncError::Decode { source })?;
        Ok(SyncReport {
            session_id: payload.metadata.session_id.clone(),
            server: self.base_url.clone(),
            filename: receipt.filename,
            attempts,
            saved_at: receipt.timestamp,
        })
    }

    /// Fetch the most recently stored payload for `assessment_id`, with the
    /// same retry policy as uploads.
    ///
    /// Returns `Ok(None)` when the server has nothing stored yet.
    pub async fn fetch_assessment(
        &self,
        assessment_id: &str,
    ) -> Result<Option<SelfAssessmentPayload>, SyncError> {
        let url = format!("{}{}/{}", self.base_url, FETCH_ENDPOINT, assessment_id);
        let (response, _attempts) = self.send_with_retry(|| self.http.get(&url)).await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if status.is_client_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(SyncError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let payload: SelfAssessmentPayload = response
            .json()
            .await
            .map_err(|source| SyncError::Decode { source })?;
        Ok(Some(payload))
    }

    /// Send a request, retrying server errors and transport failures with
    /// backoff. Successful and 4xx responses are returned to the caller
    /// along with the number of attempts used.
    async fn send_with_retry<F>(
        &self,
        mut make_request: F,
    ) -> Result<(reqwest::Response, u32), SyncError>
    where
        F: FnMut() -> reqwest::RequestBuilder,
    {
        let mut attempt = 1;
        loop {
            debug!(attempt, "sending request to progress server");
            match make_request().send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() || status.is_client_error() {
                        return Ok((response, attempt));
                    }
                    if attempt == MAX_ATTEMPTS {
                        return Err(SyncError::Unavailable {
                            status: status.as_u16(),
                            attempts: attempt,
                        });
                    }
                    warn!(
                        attempt,
                        status = status.as_u16(),
                        "progress server errored, retrying"
                    );
                }
                Err(source) => {
                    if attempt == MAX_ATTEMPTS {
                        return Err(SyncError::Transport {
                            attempts: attempt,
                            source,
                        });
                    }
                    warn!(attempt, error = %source, "progress server unreachable, retrying");
                }
            }
            tokio::time::sleep(retry_delay(attempt)).await;
            attempt += 1;
        }
    }
}

impl Default for ProgressClient {
    fn default() -> Self {
        Self::new()
    }
}
