//! Errors surfaced while talking to the progress server.

use thiserror::Error;

/// Why a sync operation failed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SyncError {
    /// The payload failed client-side validation; nothing was sent.
    #[error("Payload failed validation: {0}")]
    InvalidPayload(String),

    /// Another upload is already running on this client.
    #[error("A sync is already in flight")]
    AlreadyInFlight,

    /// The server rejected the request; retrying would not help.
    #[error("Server rejected the request with HTTP {status}: {body}")]
    Rejected {
        /// HTTP status code (4xx).
        status: u16,
        /// Response body as received.
        body: String,
    },

    /// The server kept failing after every retry.
    #[error("Server still failing with HTTP {status} after {attempts} attempt(s)")]
    Unavailable {
        /// HTTP status code (5xx) of the last attempt.
        status: u16,
        /// Attempts made before giving up.
        attempts: u32,
    },

    /// The server could not be reached at all.
    #[error("Could not reach the progress server after {attempts} attempt(s)")]
    Transport {
        /// Attempts made before giving up.
        attempts: u32,
        #[source]
        source: reqwest::Error,
    },

    /// The response arrived but was not the shape we expected.
    #[error("Could not decode the server response")]
    Decode {
        #[source]
        source: reqwest::Error,
    },
}
