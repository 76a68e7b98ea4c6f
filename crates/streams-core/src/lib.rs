//! Domain model for the streams data service.
//!
//! This crate contains the fundamental types for:
//! - Schema: typed field descriptions attached to each stream
//! - Entities: streams and their dated entries
//! - Temporal codec: wire timestamp parsing and serialization
//! - Identity: validated ids with random generation for new records

pub mod entry;
pub mod schema;
pub mod stream;
pub mod time;
pub mod types;

pub use entry::Entry;
pub use schema::{Field, InputSpec};
pub use stream::Stream;
pub use time::ParseError;
pub use types::{EntryId, FieldId, StreamId, ValidationError, Value};
