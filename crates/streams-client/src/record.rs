//! Normalized read model for retrieved entries.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use streams_core::{EntryId, ParseError, StreamId, Value, time};

/// Raw entry row as returned by the service, keyed by field id.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireEntry {
    pub id: EntryId,
    pub stream_id: StreamId,
    pub contents: BTreeMap<String, Value>,
    pub date: String,
}

/// One retrieved entry, re-keyed by human-readable field name.
///
/// The wire keys contents by opaque field id so server-side renames do not
/// break stored history; callers reason about semantic names, so retrieval
/// translates at the boundary using the owning stream's input spec. Content
/// keys with no matching field are dropped, never raised as errors - partial
/// and legacy schemas are expected in production data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRecord {
    pub id: EntryId,
    pub stream_id: StreamId,
    pub date: DateTime<FixedOffset>,
    /// Field values keyed by name, flattened into the row when serialized.
    #[serde(flatten)]
    pub values: BTreeMap<String, Value>,
}

impl EntryRecord {
    pub(crate) fn from_wire(
        wire: WireEntry,
        names: &HashMap<&str, &str>,
    ) -> Result<Self, ParseError> {
        let date = time::parse_timestamp(&wire.date)?;
        let values = wire
            .contents
            .into_iter()
            .filter_map(|(field_id, value)| {
                names
                    .get(field_id.as_str())
                    .map(|name| ((*name).to_string(), value))
            })
            .collect();
        Ok(Self {
            id: wire.id,
            stream_id: wire.stream_id,
            date,
            values,
        })
    }

    /// Returns the value for a field name, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }
}

/// The most recent entry date across a retrieval, used as the watermark for
/// incremental imports. `None` when the stream has no entries.
#[must_use]
pub fn latest_entry_date(records: &[EntryRecord]) -> Option<DateTime<FixedOffset>> {
    records.iter().map(|record| record.date).max()
}
