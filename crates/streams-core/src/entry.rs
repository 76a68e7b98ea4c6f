//! Entries - dated data points belonging to a stream.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::time;
use crate::types::{EntryId, StreamId, Value};

/// One data point in a stream.
///
/// Contents are an open mapping from schema-defined identifiers to scalar
/// values; every key must correspond to a field declared in the owning
/// stream's input spec (the service enforces this, the client does not).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Unique identifier, generated for locally created entries.
    pub id: EntryId,
    /// The stream this entry belongs to.
    pub stream_id: StreamId,
    /// Field values keyed by field id (wire) or name (caller-built).
    pub contents: BTreeMap<String, Value>,
    /// When the data point occurred.
    #[serde(with = "time::wire")]
    pub date: DateTime<FixedOffset>,
    /// When the entry was created.
    #[serde(with = "time::wire")]
    pub created_date: DateTime<FixedOffset>,
    /// When the entry was last modified.
    #[serde(with = "time::wire")]
    pub modified_date: DateTime<FixedOffset>,
}

impl Entry {
    /// Creates an entry at a full timestamp, with a generated id.
    ///
    /// `created_date`/`modified_date` are stamped now, truncated to whole
    /// seconds, at each call.
    #[must_use]
    pub fn new(
        stream_id: StreamId,
        contents: BTreeMap<String, Value>,
        date: DateTime<FixedOffset>,
    ) -> Self {
        let now = time::now_seconds();
        Self {
            id: EntryId::generate(),
            stream_id,
            contents,
            date,
            created_date: now,
            modified_date: now,
        }
    }

    /// Creates an entry for a bare calendar date, anchored to noon local
    /// time so day-level aggregation is stable across timezones.
    #[must_use]
    pub fn for_day(stream_id: StreamId, contents: BTreeMap<String, Value>, day: NaiveDate) -> Self {
        Self::new(stream_id, contents, time::noon_local(day))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::*;

    fn sample_contents() -> BTreeMap<String, Value> {
        BTreeMap::from([
            ("calories".to_string(), Value::from(1850.0)),
            ("protein".to_string(), Value::from(92.5)),
        ])
    }

    #[test]
    fn entry_decodes_wire_shape() {
        let json = r#"{
            "id": "entry-1",
            "streamId": "stream-1",
            "contents": {"f1": 200, "f2": "steady"},
            "date": "2020-06-01T12:00:00+02:00",
            "createdDate": "2020-06-01T18:05:00+02:00",
            "modifiedDate": "2020-06-01T18:05:00+02:00"
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id.as_str(), "entry-1");
        assert_eq!(entry.stream_id.as_str(), "stream-1");
        assert_eq!(entry.contents.get("f1"), Some(&Value::Number(200.0)));
        assert_eq!(
            entry.contents.get("f2"),
            Some(&Value::String("steady".to_string()))
        );
    }

    #[test]
    fn entry_roundtrips_through_wire_json() {
        let stream_id = StreamId::new("stream-1").unwrap();
        let date = crate::time::parse_timestamp("2020-06-01T12:34:56+05:00").unwrap();
        let entry = Entry::new(stream_id, sample_contents(), date);

        let json = serde_json::to_string(&entry).unwrap();
        let parsed: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
    }

    #[test]
    fn new_entries_get_distinct_ids() {
        let stream_id = StreamId::new("stream-1").unwrap();
        let date = crate::time::now_seconds();
        let a = Entry::new(stream_id.clone(), BTreeMap::new(), date);
        let b = Entry::new(stream_id, BTreeMap::new(), date);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn for_day_anchors_to_local_noon() {
        let stream_id = StreamId::new("stream-1").unwrap();
        let day = NaiveDate::from_ymd_opt(2021, 7, 4).unwrap();
        let entry = Entry::for_day(stream_id, sample_contents(), day);

        let wall = entry.date.naive_local();
        assert_eq!(wall.date(), day);
        assert_eq!((wall.hour(), wall.minute(), wall.second()), (12, 0, 0));
    }

    #[test]
    fn construction_timestamps_have_seconds_precision() {
        let stream_id = StreamId::new("stream-1").unwrap();
        let entry = Entry::new(stream_id, BTreeMap::new(), crate::time::now_seconds());
        assert_eq!(entry.created_date.nanosecond(), 0);
        assert_eq!(entry.modified_date.nanosecond(), 0);
    }
}
