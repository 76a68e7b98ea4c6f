//! The authenticated streams service client.

use std::fmt;

use reqwest::StatusCode;
use serde::Serialize;

use streams_core::{Entry, EntryId, Stream, StreamId, time};

use crate::error::ClientError;
use crate::record::{EntryRecord, WireEntry};
use crate::token::Token;

/// Client for the streams data service.
///
/// Construction authenticates and stores the session token; every subsequent
/// call attaches it as a bearer credential. Each operation issues exactly one
/// request and waits for its full response - there is no internal
/// concurrency, no retrying, and no implicit token refresh.
pub struct StreamsClient {
    http: reqwest::Client,
    base_url: String,
    token: Token,
}

impl fmt::Debug for StreamsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamsClient")
            .field("base_url", &self.base_url)
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Differential-sync payload. This client only ever pushes new local
/// entries; the stream and deletion channels exist in the protocol but stay
/// empty.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SyncEnvelope<'a> {
    modified_streams: &'a [Stream],
    deleted_streams: &'a [StreamId],
    modified_entries: &'a [Entry],
    deleted_entries: &'a [EntryId],
}

impl StreamsClient {
    /// Authenticates against the service and returns a ready client.
    ///
    /// The base URL is explicit configuration so consumers can point the
    /// client at a mock endpoint.
    ///
    /// # Errors
    ///
    /// [`ClientError::InvalidCredentials`] when the service rejects the
    /// credentials (401/403); [`ClientError::Transport`] for any other
    /// non-success status. Neither is retried.
    pub async fn login(
        base_url: impl Into<String>,
        username: &str,
        password: &str,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = reqwest::Client::new();

        let response = http
            .post(format!("{base_url}/login"))
            .json(&LoginRequest { username, password })
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ClientError::InvalidCredentials { body });
        }
        if !status.is_success() {
            return Err(ClientError::Transport { status, body });
        }

        let token: Token = serde_json::from_str(&body).map_err(ClientError::Response)?;
        tracing::debug!(%base_url, "authenticated");

        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    /// Retrieves all streams visible to the authenticated identity, each
    /// with its input spec decoded.
    pub async fn streams(&self) -> Result<Vec<Stream>, ClientError> {
        let response = self
            .http
            .get(format!("{}/streams", self.base_url))
            .bearer_auth(&self.token.access_token)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::Unauthorized);
        }
        if !status.is_success() {
            return Err(ClientError::Transport { status, body });
        }

        let streams: Vec<Stream> = serde_json::from_str(&body).map_err(ClientError::Response)?;
        tracing::debug!(count = streams.len(), "retrieved streams");
        Ok(streams)
    }

    /// Retrieves a stream's entries, re-keyed by field name through the
    /// stream's own input spec.
    ///
    /// A stream with no entries yields an empty collection, not an error.
    pub async fn entries(&self, stream: &Stream) -> Result<Vec<EntryRecord>, ClientError> {
        let response = self
            .http
            .get(format!("{}/streams/{}/entries", self.base_url, stream.id))
            .bearer_auth(&self.token.access_token)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::Unauthorized);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::StreamNotFound {
                stream_id: stream.id.clone(),
            });
        }
        if !status.is_success() {
            return Err(ClientError::Transport { status, body });
        }

        let raw: Vec<WireEntry> = serde_json::from_str(&body).map_err(ClientError::Response)?;
        let names = stream.input_spec.name_map();
        let records = raw
            .into_iter()
            .map(|wire| EntryRecord::from_wire(wire, &names))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(stream = %stream.id, count = records.len(), "retrieved entries");
        Ok(records)
    }

    /// Submits one entry to its stream.
    pub async fn add_entry(&self, entry: &Entry) -> Result<(), ClientError> {
        let response = self
            .http
            .post(format!(
                "{}/streams/{}/entries",
                self.base_url, entry.stream_id
            ))
            .bearer_auth(&self.token.access_token)
            .json(entry)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::Unauthorized);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::StreamNotFound {
                stream_id: entry.stream_id.clone(),
            });
        }
        if !status.is_success() {
            return Err(ClientError::Transport { status, body });
        }

        tracing::debug!(entry = %entry.id, stream = %entry.stream_id, "added entry");
        Ok(())
    }

    /// Submits a batch of entries through the sync endpoint, with the
    /// current timestamp as the sync watermark.
    ///
    /// The envelope is atomic from the client's perspective: either the
    /// whole batch is accepted or the operation fails as a whole, with no
    /// per-entry result.
    pub async fn add_entries(&self, entries: &[Entry]) -> Result<(), ClientError> {
        let envelope = SyncEnvelope {
            modified_streams: &[],
            deleted_streams: &[],
            modified_entries: entries,
            deleted_entries: &[],
        };
        let watermark = time::to_wire(&time::now_seconds());

        let response = self
            .http
            .post(format!("{}/sync", self.base_url))
            .query(&[("date", watermark.as_str())])
            .bearer_auth(&self.token.access_token)
            .json(&envelope)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::Unauthorized);
        }
        if !status.is_success() {
            return Err(ClientError::Transport { status, body });
        }

        tracing::debug!(count = entries.len(), "pushed entry batch");
        Ok(())
    }
}
