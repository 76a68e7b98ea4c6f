//! Stream schemas describing the typed fields an entry may carry.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::FieldId;

/// One column of a stream's schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Stable identifier keying raw entry contents on the wire.
    pub id: FieldId,
    /// Human-readable field name.
    pub name: String,
    /// Field type as reported by the service. Unknown type strings are
    /// accepted opaquely.
    #[serde(rename = "type")]
    pub kind: String,
    /// Allowed values for enumerated fields; empty otherwise.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

/// The schema contract for a stream's entry contents.
///
/// Field order carries no meaning, but `id` and `name` are each unique
/// within one spec; the id→name mapping relies on that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSpec {
    pub fields: Vec<Field>,
}

impl InputSpec {
    /// Derived mapping from field id to field name.
    ///
    /// A read-only view recomputed on each call, never cached.
    #[must_use]
    pub fn name_map(&self) -> HashMap<&str, &str> {
        self.fields
            .iter()
            .map(|field| (field.id.as_str(), field.name.as_str()))
            .collect()
    }
}
