//! Client error taxonomy.

use reqwest::StatusCode;
use thiserror::Error;

use streams_core::{ParseError, StreamId};

/// Errors surfaced by client operations.
///
/// The client performs no local recovery: every failure propagates to the
/// caller typed by its cause. None of these are retried internally.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Login was rejected (401/403). Fatal to session setup.
    #[error("invalid credentials: {body}")]
    InvalidCredentials { body: String },

    /// An authenticated call returned 401; the token expired or is invalid.
    /// The client never refreshes tokens implicitly.
    #[error("unauthorized - token expired or invalid")]
    Unauthorized,

    /// The referenced stream does not exist (404).
    #[error("stream {stream_id} not found")]
    StreamNotFound { stream_id: StreamId },

    /// Any other non-success status, with the raw response body attached
    /// as diagnostic detail.
    #[error("unexpected status {status}: {body}")]
    Transport { status: StatusCode, body: String },

    /// The request could not be completed at the transport level.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A timestamp in a response payload was malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A response body did not match the documented wire shape.
    #[error("malformed response: {0}")]
    Response(#[source] serde_json::Error),
}
