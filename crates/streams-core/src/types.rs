//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },
}

/// Generates a validated string ID newtype with common trait implementations.
macro_rules! define_string_id {
    (
        $(#[$meta:meta])*
        $name:ident, $field_name:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a new ID after validation.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.is_empty() {
                    return Err(ValidationError::Empty { field: $field_name });
                }
                Ok(Self(id))
            }

            /// Returns the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_string_id!(
    /// A validated stream identifier.
    ///
    /// Stream IDs are assigned by the service; locally created streams get a
    /// generated one via [`StreamId::generate`].
    StreamId, "stream ID"
);

define_string_id!(
    /// A validated entry identifier.
    ///
    /// Entry IDs should be unique within the service; uniqueness is enforced
    /// server-side.
    EntryId, "entry ID"
);

define_string_id!(
    /// A validated field identifier.
    ///
    /// Field IDs key the raw entry contents on the wire and are mapped to
    /// field names through a stream's input spec.
    FieldId, "field ID"
);

impl StreamId {
    /// Generates a fresh random identifier (UUID v4, canonical text form).
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl EntryId {
    /// Generates a fresh random identifier (UUID v4, canonical text form).
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

/// A scalar value stored in an entry's contents.
///
/// The field set of an entry is determined at runtime by its stream's input
/// spec, so contents are an open mapping from field id (or name) to one of
/// these scalar variants rather than a fixed struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A boolean value.
    Bool(bool),
    /// A numeric value. JSON numbers are kept as `f64`.
    Number(f64),
    /// A string value.
    String(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        #[expect(clippy::cast_precision_loss, reason = "wire values are JSON numbers")]
        let value = value as f64;
        Self::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn stream_id_rejects_empty() {
        assert!(StreamId::new("").is_err());
        assert!(StreamId::new("stream-1").is_ok());
    }

    #[test]
    fn entry_id_serde_roundtrip() {
        let id = EntryId::new("entry-123").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"entry-123\"");
        let parsed: EntryId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn entry_id_serde_rejects_empty() {
        let result: Result<EntryId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn generated_ids_are_valid_uuids() {
        let id = EntryId::generate();
        assert!(!id.as_str().is_empty());
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn generated_ids_do_not_collide() {
        let ids: HashSet<String> = (0..1000).map(|_| StreamId::generate().0).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn value_deserializes_json_scalars() {
        assert_eq!(
            serde_json::from_str::<Value>("200").unwrap(),
            Value::Number(200.0)
        );
        assert_eq!(
            serde_json::from_str::<Value>("12.5").unwrap(),
            Value::Number(12.5)
        );
        assert_eq!(
            serde_json::from_str::<Value>("true").unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            serde_json::from_str::<Value>("\"low carb\"").unwrap(),
            Value::String("low carb".to_string())
        );
    }

    #[test]
    fn value_serializes_untagged() {
        assert_eq!(serde_json::to_string(&Value::Number(200.0)).unwrap(), "200.0");
        assert_eq!(serde_json::to_string(&Value::Bool(false)).unwrap(), "false");
        assert_eq!(
            serde_json::to_string(&Value::String("ok".into())).unwrap(),
            "\"ok\""
        );
    }
}
