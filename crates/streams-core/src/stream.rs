//! Streams - named, schema-typed data series.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::schema::InputSpec;
use crate::time;
use crate::types::StreamId;

/// A named data series whose entries follow a typed schema.
///
/// Streams are read from the service with their input spec already decoded;
/// the spec is the authority for translating entry contents between wire
/// field ids and human-readable names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stream {
    /// Unique identifier, generated when the stream is created locally.
    pub id: StreamId,
    /// Human-readable name.
    pub name: String,
    /// Presentation format reported by the service.
    pub format: String,
    /// Schema for this stream's entry contents.
    pub input_spec: InputSpec,
    /// When the stream was created.
    #[serde(with = "time::wire")]
    pub created_date: DateTime<FixedOffset>,
    /// When the stream was last modified.
    #[serde(with = "time::wire")]
    pub modified_date: DateTime<FixedOffset>,
}

impl Stream {
    /// Creates a new stream with a generated id, stamped now.
    #[must_use]
    pub fn new(name: impl Into<String>, format: impl Into<String>, input_spec: InputSpec) -> Self {
        let now = time::now_seconds();
        Self {
            id: StreamId::generate(),
            name: name.into(),
            format: format.into(),
            input_spec,
            created_date: now,
            modified_date: now,
        }
    }
}
